use thiserror::Error;

use crate::api::ApiError;

/// Failure of one stage of the unlock workflow.
/// The underlying `ApiError` is reachable through `source()`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    Configuration(String),

    #[error("Error getting session token")]
    Authentication(#[source] ApiError),

    #[error("Error getting unlock code")]
    Request(#[source] ApiError),

    #[error("Failed to build HTTP client")]
    Client(#[source] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_source_chain() {
        let err = Error::Authentication(ApiError::MissingToken);
        assert_eq!(err.to_string(), "Error getting session token");
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("Access token not found in login response".to_string())
        );
    }
}
