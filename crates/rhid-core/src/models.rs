//! Values exchanged with the unlock endpoint.

use std::fmt;

/// Equipment serial number and equipment password, as typed by the operator.
/// Neither is validated; the service decides whether they are acceptable.
#[derive(Clone, PartialEq, Eq)]
pub struct UnlockRequest {
    pub serial: String,
    pub senha: String,
}

impl UnlockRequest {
    pub fn new(serial: impl Into<String>, senha: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
            senha: senha.into(),
        }
    }
}

impl fmt::Debug for UnlockRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnlockRequest")
            .field("serial", &self.serial)
            .field("senha", &"<redacted>")
            .finish()
    }
}

/// Body returned by the unlock endpoint, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockResponse {
    body: String,
}

impl UnlockResponse {
    pub fn new(body: String) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for UnlockResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}
