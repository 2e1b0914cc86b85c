//! Authentication against the RHID login endpoint.
//!
//! This module provides:
//! - `Authenticator`: exchanges account credentials for an access token
//! - `SessionToken`: the opaque bearer token, valid for one run only
//!
//! Tokens are never persisted or refreshed.

pub mod authenticator;
pub mod session;

pub use authenticator::Authenticator;
pub use session::SessionToken;
