//! Environment-driven configuration.
//!
//! Everything is read once at startup. The only required value is the Gemini API key;
//! the rest fall back to defaults that match a local development setup.

use std::fmt;
use std::net::SocketAddr;

use crate::error::ConfigurationError;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const API_BASE_VAR: &str = "GEMINI_API_BASE";
pub const ADDR_VAR: &str = "AGRICHECK_ADDR";
pub const MAX_UPLOAD_VAR: &str = "AGRICHECK_MAX_UPLOAD_BYTES";
pub const JPEG_QUALITY_VAR: &str = "AGRICHECK_JPEG_QUALITY";

pub const DEFAULT_MODEL: &str = "models/gemini-2.0-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// The Gemini API key. Never printed: `Debug` and `Display` are redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw key, for building the auth header only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential([REDACTED])")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credential: Credential,
    pub model: String,
    pub api_base: String,
    pub bind_addr: SocketAddr,
    pub max_upload_bytes: usize,
    pub jpeg_quality: u8,
}

/// Reads the API key from the process environment.
pub fn load_credential() -> Result<Credential, ConfigurationError> {
    credential_from(&env_lookup)
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn credential_from<F>(lookup: &F) -> Result<Credential, ConfigurationError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(API_KEY_VAR) {
        Some(key) if !key.trim().is_empty() => Ok(Credential::new(key.trim())),
        _ => Err(ConfigurationError::MissingCredential(API_KEY_VAR)),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let credential = load_credential()?;
        Self::with_credential(credential, env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = credential_from(&lookup)?;
        Self::with_credential(credential, lookup)
    }

    fn with_credential<F>(credential: Credential, lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let model = non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base = non_empty(API_BASE_VAR)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let addr = non_empty(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr: SocketAddr = addr.trim().parse().map_err(|e: std::net::AddrParseError| {
            ConfigurationError::InvalidValue {
                var: ADDR_VAR,
                value: addr.clone(),
                reason: e.to_string(),
            }
        })?;

        let max_upload_bytes = match non_empty(MAX_UPLOAD_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigurationError::InvalidValue {
                    var: MAX_UPLOAD_VAR,
                    value: raw.clone(),
                    reason: "expected a positive number of bytes".to_string(),
                })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let jpeg_quality = match non_empty(JPEG_QUALITY_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|q| (1..=100).contains(q))
                .ok_or_else(|| ConfigurationError::InvalidValue {
                    var: JPEG_QUALITY_VAR,
                    value: raw.clone(),
                    reason: "expected an integer between 1 and 100".to_string(),
                })?,
            None => DEFAULT_JPEG_QUALITY,
        };

        Ok(Config {
            credential,
            model,
            api_base,
            bind_addr,
            max_upload_bytes,
            jpeg_quality,
        })
    }
}
