//! Unlock code requests for tamper-locked equipment.

use tracing::{error, info};

use crate::api::ApiClient;
use crate::auth::SessionToken;
use crate::config::Config;
use crate::error::Error;
use crate::models::{UnlockRequest, UnlockResponse};

/// Calls the `desbloqueio_rep_violacao` endpoint.
pub struct UnlockClient {
    client: ApiClient,
    url: String,
}

impl UnlockClient {
    pub fn new(client: ApiClient, config: &Config) -> Self {
        Self {
            client,
            url: config.unlock_url(),
        }
    }

    /// Fetch the unlock code for one device. The body is returned as is;
    /// lock states reported by the service are not interpreted here.
    pub async fn request_unlock(
        &self,
        token: &SessionToken,
        request: &UnlockRequest,
    ) -> Result<UnlockResponse, Error> {
        info!(serial = %request.serial, "Attempting to get unlock code...");
        let query = [
            ("serial", request.serial.as_str()),
            ("senha", request.senha.as_str()),
        ];
        match self.client.get_text(&self.url, token, &query).await {
            Ok(body) => {
                info!(bytes = body.len(), "Successfully retrieved unlock code.");
                Ok(UnlockResponse::new(body))
            }
            Err(e) => {
                error!(error = %e, serial = %request.serial, "Error getting unlock code");
                Err(Error::Request(e))
            }
        }
    }
}
