//! Runtime configuration for talking to RHID.
//!
//! `Config` carries the account credentials and the service base URL. It is
//! built explicitly and handed to the authenticator, so nothing below the
//! binary reads the process environment.

use std::fmt;

/// Production base URL of the RHID web service
pub const DEFAULT_BASE_URL: &str = "https://rhid.com.br/v2";

/// Environment variable holding the account email
pub const EMAIL_VAR: &str = "EMAIL";

/// Environment variable holding the account password
pub const PASSWORD_VAR: &str = "PASSWORD";

/// Environment variable overriding the base URL
pub const BASE_URL_VAR: &str = "RHID_BASE_URL";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    email: Option<String>,
    password: Option<String>,
    base_url: String,
}

impl Config {
    pub fn new(email: Option<String>, password: Option<String>) -> Self {
        Self {
            email,
            password,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Read credentials from `EMAIL`/`PASSWORD` and the optional base URL
    /// override. Credentials are not validated; a missing one is sent as null.
    pub fn from_env() -> Self {
        let config = Self::new(read_var(EMAIL_VAR), read_var(PASSWORD_VAR));
        match read_var(BASE_URL_VAR) {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Login page visited before posting credentials.
    pub fn login_page_url(&self) -> String {
        format!("{}/#/login", self.base_url)
    }

    pub fn login_url(&self) -> String {
        format!("{}/login.svc/", self.base_url)
    }

    pub fn unlock_url(&self) -> String {
        format!("{}/util.svc/desbloqueio_rep_violacao/", self.base_url)
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
