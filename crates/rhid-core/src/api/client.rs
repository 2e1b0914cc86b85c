//! API client for communicating with the RHID web service.
//!
//! This module provides the `ApiClient` struct that the authenticator and
//! the unlock requester share for their HTTP calls.

use std::time::Duration;

use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::auth::SessionToken;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for a CLI.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for RHID.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// Create a new API client with a cookie store, so cookies handed out
    /// by the login page are sent along with the login request.
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client })
    }

    fn auth_headers(token: &SessionToken) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        let mut value = header::HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
            .map_err(|_| {
                ApiError::InvalidResponse("access token is not a valid header value".to_string())
            })?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    /// GET a page and discard its body. Used for the login page visit.
    pub async fn visit(&self, url: &str) -> Result<(), ApiError> {
        debug!(url = url, "GET (body ignored)");
        let response = self.client.get(url).send().await?;
        Self::check_response(response).await?;
        Ok(())
    }

    /// POST a JSON body without authentication and parse the JSON reply.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(url = url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        let response = Self::check_response(response).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse JSON response from {}: {}", url, e))
        })
    }

    /// Authenticated GET with query parameters, returning the raw body.
    pub async fn get_text(
        &self,
        url: &str,
        token: &SessionToken,
        query: &[(&str, &str)],
    ) -> Result<String, ApiError> {
        debug!(url = url, "GET (authenticated)");
        let response = self
            .client
            .get(url)
            .headers(Self::auth_headers(token)?)
            .query(query)
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_headers_bearer_format() {
        let token = SessionToken::new("abc.def".to_string());
        let headers = ApiClient::auth_headers(&token).unwrap();
        let value = headers.get(header::AUTHORIZATION).unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer abc.def");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_auth_headers_rejects_control_characters() {
        let token = SessionToken::new("bad\ntoken".to_string());
        assert!(matches!(
            ApiClient::auth_headers(&token),
            Err(ApiError::InvalidResponse(_))
        ));
    }
}
