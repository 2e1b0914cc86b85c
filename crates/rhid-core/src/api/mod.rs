//! HTTP client module for the RHID web service.
//!
//! This module provides the `ApiClient` used by the authenticator and the
//! unlock requester, plus `ApiError` for mapping transport and status
//! failures into something a user can read.
//!
//! The service authenticates with a bearer token obtained from the
//! `login.svc` endpoint. The client never stores that token; every
//! authenticated call receives it explicitly.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
