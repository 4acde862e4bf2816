//! Mock Credential Provider Implementation
//!
//! Programmable mock for testing authenticated flows:
//! - hands out a fixed token until told to fail
//! - counts token fetches for test assertions
//! - thread-safe via `Arc<RwLock<>>`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use creatorkit_common::{Error, Result};

use crate::CredentialProvider;

/// Token handed out when no explicit token was configured
pub const DEFAULT_MOCK_TOKEN: &str = "mock-session-token";

/// Mock credential provider with programmable failure
#[derive(Debug, Clone)]
pub struct MockCredentialProvider {
    token: Arc<RwLock<String>>,
    failure: Arc<RwLock<Option<String>>>,
    fetches: Arc<AtomicUsize>,
}

impl MockCredentialProvider {
    pub fn new() -> Self {
        Self::with_token(DEFAULT_MOCK_TOKEN)
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(token.into())),
            failure: Arc::new(RwLock::new(None)),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Make every following fetch fail with the given message
    pub fn fail_with(&self, message: impl Into<String>) {
        *self
            .failure
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(message.into());
    }

    /// Switch to another session's token
    pub fn set_token(&self, token: impl Into<String>) {
        *self
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = token.into();
    }

    /// Restore successful fetches
    pub fn reset(&self) {
        *self
            .failure
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
        self.fetches.store(0, Ordering::SeqCst);
    }

    /// Number of token fetches so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Default for MockCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CredentialProvider for MockCredentialProvider {
    async fn bearer_token(&self) -> Result<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let failure = self
            .failure
            .read()
            .map_err(|e| Error::Authentication(format!("failure lock poisoned: {e}")))?
            .clone();
        if let Some(message) = failure {
            tracing::debug!("Mock credentials: simulating expired session");
            return Err(Error::Authentication(message));
        }

        let token = self
            .token
            .read()
            .map_err(|e| Error::Authentication(format!("token lock poisoned: {e}")))?
            .clone();
        Ok(token)
    }
}
