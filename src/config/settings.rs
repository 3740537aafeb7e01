use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::ApiError;

/// Base URL used when `KAFB2B_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://edu.kafb2b.or.kr/api/v2/whsl";

pub const API_URL_VAR: &str = "KAFB2B_API_URL";
pub const SERVICE_KEY_VAR: &str = "SRCV_KEYVAL";
pub const SECRET_KEY_VAR: &str = "SCR_KEYVAL";

/// Applied to every network call unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Service credential pair exchanged for a bearer token.
///
/// Values are opaque non-empty strings. `Debug` redacts them so
/// settings can be logged without leaking key material.
#[derive(Clone)]
pub struct Credentials {
    pub service_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(service_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            service_key: service_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("service_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Everything the client needs before the first network call.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub api_url: String,
    pub credentials: Credentials,
    pub timeout: Duration,
}

impl ApiSettings {
    pub fn new(api_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            api_url: api_url.into(),
            credentials,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load settings from process environment variables.
    ///
    /// `KAFB2B_API_URL` falls back to [`DEFAULT_API_URL`]; absent or
    /// empty credential variables are a fatal configuration error
    /// naming every missing variable, raised before any network
    /// activity.
    pub fn from_env() -> Result<Self, ApiError> {
        let api_url = read_var(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let service_key = read_var(SERVICE_KEY_VAR);
        let secret_key = read_var(SECRET_KEY_VAR);

        let missing: Vec<&str> = [
            (SERVICE_KEY_VAR, &service_key),
            (SECRET_KEY_VAR, &secret_key),
        ]
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(ApiError::Config(format!(
                "missing required environment variable(s): {}",
                missing.join(", ")
            )));
        }

        Ok(Self::new(
            api_url,
            // both checked above
            Credentials::new(service_key.unwrap_or_default(), secret_key.unwrap_or_default()),
        ))
    }
}

/// An env var set to the empty string counts as unset.
fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
