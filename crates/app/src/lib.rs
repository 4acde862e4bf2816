//! CreatorKit application composition root
//!
//! Wires configuration, credentials, the request gateway, and the domain
//! stores into a single `App`.

pub mod cli;

use std::sync::Arc;

use creatorkit_common::Config;
use creatorkit_creations::{CommunityStore, CreationStore};
use creatorkit_gateway::{CredentialProvider, CredentialProviderFactory, RequestGateway};
use creatorkit_generations::GenerationClient;

/// Everything a front end needs to talk to the backend
pub struct App {
    pub credentials: Arc<dyn CredentialProvider>,
    pub creations: CreationStore,
    pub community: CommunityStore,
    pub generations: GenerationClient,
}

impl App {
    /// Build the application from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let gateway = RequestGateway::from_config(config)?;
        let credentials = CredentialProviderFactory::create(config)?;

        tracing::info!(base_url = %gateway.base_url(), "Application configured");

        Ok(Self::new(gateway, credentials))
    }

    pub fn new(gateway: RequestGateway, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            credentials,
            creations: CreationStore::new(gateway.clone()),
            community: CommunityStore::new(gateway.clone()),
            generations: GenerationClient::new(gateway),
        }
    }
}
