//! The login-then-unlock sequence.

use tracing::debug;

use crate::api::ApiClient;
use crate::auth::Authenticator;
use crate::config::Config;
use crate::error::Error;
use crate::models::{UnlockRequest, UnlockResponse};
use crate::unlock::UnlockClient;

/// Authenticate, then request the unlock code. Stops at the first failure.
pub async fn run(config: &Config, request: &UnlockRequest) -> Result<UnlockResponse, Error> {
    debug!(base_url = config.base_url(), "Starting unlock workflow");
    let client = ApiClient::new().map_err(Error::Client)?;

    let token = Authenticator::new(client.clone(), config.clone())
        .authenticate()
        .await?;

    UnlockClient::new(client, config)
        .request_unlock(&token, request)
        .await
}
