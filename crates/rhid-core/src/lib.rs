//! Core library for rhid-unlock.
//!
//! Logs into the RHID equipment-management service and requests the unlock
//! code for a device identified by its serial number and password.
//!
//! - `config`: credentials and endpoint URLs
//! - `api`: HTTP client and status mapping
//! - `auth`: login and the session token
//! - `unlock`: the unlock code request
//! - `workflow`: both steps in sequence

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod unlock;
pub mod workflow;

pub use config::Config;
pub use error::Error;
pub use models::{UnlockRequest, UnlockResponse};
pub use workflow::run;
