//! Published creations and like toggling
//!
//! The server alone decides whether a toggle likes or unlikes. After every
//! accepted toggle the whole list is reloaded; nothing is patched locally.
//! When toggles overlap, each still reloads and the list's own load sequence
//! keeps only the newest snapshot.

use serde::Serialize;

use creatorkit_common::{BusyFlag, Result};
use creatorkit_gateway::{CredentialProvider, Endpoint, RequestGateway};

use crate::domain::entities::{Creation, CreationId, TypeFilter};
use crate::domain::state::StoreState;
use crate::domain::view::{filtered_view, CommunityStats};
use crate::store::{LoadOutcome, StoreSnapshot, SyncedList};

#[derive(Debug, Serialize)]
struct ToggleLikeRequest {
    id: CreationId,
}

/// Result of a like toggle the server accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeToggle {
    /// Server confirmation, e.g. "Creation Liked"
    pub message: Option<String>,
    /// Outcome of the follow-up reload; `None` when the reload failed (see
    /// the store's error)
    pub reload: Option<LoadOutcome>,
}

/// Store behind the community gallery
#[derive(Debug)]
pub struct CommunityStore {
    gateway: RequestGateway,
    list: SyncedList,
    liking: BusyFlag,
}

impl CommunityStore {
    pub fn new(gateway: RequestGateway) -> Self {
        Self {
            gateway,
            list: SyncedList::new(Endpoint::PublishedCreations),
            liking: BusyFlag::new(),
        }
    }

    /// Fetch all published creations, replacing the cached list on success
    pub async fn load(&self, credentials: &dyn CredentialProvider) -> Result<LoadOutcome> {
        self.list.load(&self.gateway, credentials).await
    }

    /// Ask the server to toggle the current user's like, then reload.
    ///
    /// On failure the cached list, and with it every like count, stays as
    /// last loaded.
    pub async fn toggle_like(
        &self,
        credentials: &dyn CredentialProvider,
        id: CreationId,
    ) -> Result<LikeToggle> {
        let _busy = self.liking.enter();

        tracing::debug!(creation_id = %id, "Toggling like");

        let reply = self
            .gateway
            .post_json::<_, serde::de::IgnoredAny>(
                credentials,
                Endpoint::ToggleLikeCreation,
                &ToggleLikeRequest { id },
            )
            .await
            .inspect_err(|e| {
                tracing::warn!(creation_id = %id, error = %e, "Like toggle failed");
            })?;

        let reload = self.list.load(&self.gateway, credentials).await.ok();

        Ok(LikeToggle {
            message: reply.message,
            reload,
        })
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.list.snapshot()
    }

    pub fn state(&self) -> StoreState {
        self.list.snapshot().state
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    /// Whether a like toggle is outstanding
    pub fn is_toggling_like(&self) -> bool {
        self.liking.is_busy()
    }

    pub fn creations(&self) -> Vec<Creation> {
        self.list.with_creations(<[Creation]>::to_vec)
    }

    pub fn find(&self, id: CreationId) -> Option<Creation> {
        self.list
            .with_creations(|creations| creations.iter().find(|c| c.id == id).cloned())
    }

    pub fn filtered_view(&self, search: &str, filter: TypeFilter) -> Vec<Creation> {
        self.list.with_creations(|creations| {
            filtered_view(creations, search, filter)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    pub fn stats(&self) -> CommunityStats {
        self.list.with_creations(CommunityStats::compute)
    }
}
