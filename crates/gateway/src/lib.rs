//! CreatorKit Request Gateway
//!
//! Issues authenticated calls against the CreatorKit backend API:
//! - A bearer credential is fetched from a `CredentialProvider` before every request
//! - JSON and multipart request bodies
//! - `{ success, message, ... }` response envelopes unwrapped into typed payloads
//! - Mock credential provider for testing and development

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod mock;

use std::sync::Arc;

use creatorkit_common::{Config, CredentialProviderKind, Error, Result};

pub use client::{RequestBody, RequestGateway};
pub use endpoints::Endpoint;
pub use envelope::{ContentPayload, Reply};

/// Source of short-lived bearer tokens.
///
/// Passed explicitly into every operation that talks to the backend so no
/// operation reaches into ambient session state.
#[async_trait::async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Fetch a token for the current session.
    ///
    /// Fails with `Error::Authentication` when the session is gone; callers
    /// must not send the request in that case.
    async fn bearer_token(&self) -> Result<String>;
}

/// Credential provider backed by a fixed session token
#[derive(Clone)]
pub struct StaticCredentialProvider {
    token: String,
}

impl StaticCredentialProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialProvider")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[async_trait::async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn bearer_token(&self) -> Result<String> {
        if self.token.trim().is_empty() {
            return Err(Error::Authentication(
                "No active session. Please sign in again.".to_string(),
            ));
        }
        Ok(self.token.clone())
    }
}

/// Factory for creating CredentialProvider implementations
pub struct CredentialProviderFactory;

impl CredentialProviderFactory {
    pub fn create(config: &Config) -> Result<Arc<dyn CredentialProvider>> {
        match config.credential_provider {
            CredentialProviderKind::Static => {
                tracing::info!("Creating static credential provider");
                let token = config.session_token.clone().ok_or_else(|| {
                    Error::Configuration(
                        "CREATORKIT_SESSION_TOKEN is required for the static credential provider"
                            .to_string(),
                    )
                })?;
                Ok(Arc::new(StaticCredentialProvider::new(token)))
            }
            CredentialProviderKind::Mock => {
                tracing::info!("Creating mock credential provider");
                Ok(Arc::new(mock::MockCredentialProvider::new()))
            }
        }
    }
}
