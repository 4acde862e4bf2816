//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use serde::{Deserialize, Serialize};
use std::env;

use crate::{Error, Result};

/// Where bearer credentials come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialProviderKind {
    /// A session token supplied through configuration
    Static,
    /// Deterministic tokens for local development and tests
    Mock,
}

impl std::str::FromStr for CredentialProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "static" => Ok(Self::Static),
            "mock" => Ok(Self::Mock),
            other => Err(Error::Configuration(format!(
                "Unknown credential provider: {}. Supported providers: static, mock",
                other
            ))),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the CreatorKit backend API
    pub api_base_url: String,

    /// Credential source
    pub credential_provider: CredentialProviderKind,
    pub session_token: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_base_url", &self.api_base_url)
            .field("credential_provider", &self.credential_provider)
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("CREATORKIT_API_BASE_URL").ok_or_else(|| {
            Error::Configuration("CREATORKIT_API_BASE_URL is required".to_string())
        })?;
        let api_base_url = normalize_base_url(&api_base_url)?;

        let credential_provider = lookup("CREATORKIT_CREDENTIAL_PROVIDER")
            .unwrap_or_else(|| "static".to_string())
            .parse()?;

        let session_token = lookup("CREATORKIT_SESSION_TOKEN").filter(|t| !t.trim().is_empty());

        if credential_provider == CredentialProviderKind::Static && session_token.is_none() {
            return Err(Error::Configuration(
                "CREATORKIT_SESSION_TOKEN is required for the static credential provider"
                    .to_string(),
            ));
        }

        Ok(Self {
            api_base_url,
            credential_provider,
            session_token,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "creatorkit=info".to_string()),
        })
    }
}

/// Validate a base URL and strip trailing slashes
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(Error::Configuration(format!(
            "API base URL must start with http:// or https://, got '{}'",
            trimmed
        )));
    }

    let base = trimmed.trim_end_matches('/');
    if base.ends_with(':') || base.ends_with("//") {
        return Err(Error::Configuration(format!(
            "API base URL has no host: '{}'",
            trimmed
        )));
    }

    Ok(base.to_string())
}
