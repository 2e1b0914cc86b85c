use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::api::{ApiClient, ApiError};
use crate::config::Config;
use crate::error::Error;

use super::SessionToken;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    domain: Option<&'a str>,
    email: Option<&'a str>,
    password: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(rename = "accessToken")]
    access_token: Option<String>,
}

/// Logs into RHID with the credentials from a `Config`.
pub struct Authenticator {
    client: ApiClient,
    config: Config,
}

impl Authenticator {
    pub fn new(client: ApiClient, config: Config) -> Self {
        Self { client, config }
    }

    /// Visit the login page, then post the credentials and return the
    /// access token from the reply.
    pub async fn authenticate(&self) -> Result<SessionToken, Error> {
        info!("Attempting to get session token...");
        match self.login().await {
            Ok(token) => {
                info!("Successfully retrieved session token.");
                Ok(token)
            }
            Err(e) => {
                error!(error = %e, "Error getting session token");
                Err(Error::Authentication(e))
            }
        }
    }

    async fn login(&self) -> Result<SessionToken, ApiError> {
        self.client.visit(&self.config.login_page_url()).await?;

        let payload = LoginRequest {
            domain: None,
            email: self.config.email(),
            password: self.config.password(),
        };
        let response: LoginResponse = self
            .client
            .post_json(&self.config.login_url(), &payload)
            .await?;

        Self::extract_token(response)
    }

    fn extract_token(response: LoginResponse) -> Result<SessionToken, ApiError> {
        match response.access_token {
            Some(token) if !token.is_empty() => Ok(SessionToken::new(token)),
            _ => Err(ApiError::MissingToken),
        }
    }
}
