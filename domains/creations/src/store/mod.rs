//! Client-side stores for creation lists
//!
//! Both stores share `SyncedList`: a server-owned list that is only ever
//! replaced wholesale by a fresh snapshot. A failed or superseded load never
//! touches the cached list.

pub mod community;
pub mod creations;
pub mod sequence;

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use creatorkit_common::{BusyFlag, Result};
use creatorkit_gateway::{CredentialProvider, Endpoint, RequestGateway};

use crate::domain::entities::Creation;
use crate::domain::state::{StoreEvent, StoreState, StoreStateMachine};
use sequence::RequestSequence;

/// Point-in-time copy of a store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub state: StoreState,
    /// Last successfully loaded list
    pub creations: Vec<Creation>,
    /// Message of the most recent failed load, cleared by the next success
    pub error: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
}

/// What a finished load did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The snapshot replaced the cached list
    Applied { count: usize },
    /// A newer load was issued meanwhile; the response was dropped
    Superseded,
}

#[derive(Debug, Deserialize)]
struct CreationsPayload {
    creations: Vec<Creation>,
}

/// A creation list kept in sync with one list endpoint
#[derive(Debug)]
pub(crate) struct SyncedList {
    endpoint: Endpoint,
    inner: RwLock<StoreSnapshot>,
    loads: RequestSequence,
    loading: BusyFlag,
}

impl SyncedList {
    pub(crate) fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            inner: RwLock::new(StoreSnapshot::default()),
            loads: RequestSequence::new(),
            loading: BusyFlag::new(),
        }
    }

    pub(crate) fn snapshot(&self) -> StoreSnapshot {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run `f` against the cached list without copying it
    pub(crate) fn with_creations<R>(&self, f: impl FnOnce(&[Creation]) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard.creations)
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading.is_busy()
    }

    /// Fetch the full list and replace the cache if this is still the newest load
    pub(crate) async fn load(
        &self,
        gateway: &RequestGateway,
        credentials: &dyn CredentialProvider,
    ) -> Result<LoadOutcome> {
        let ticket = self.loads.issue();
        let _busy = self.loading.enter();
        self.apply_event(StoreEvent::Load)?;

        let result = gateway
            .get::<CreationsPayload>(credentials, self.endpoint)
            .await;

        if !self.loads.is_current(ticket) {
            tracing::debug!(endpoint = %self.endpoint, "Discarding superseded load response");
            return result.map(|_| LoadOutcome::Superseded);
        }

        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match result {
            Ok(reply) => {
                let creations = dedupe_by_id(reply.data.creations);
                let count = creations.len();
                guard.state = StoreStateMachine::transition(guard.state, StoreEvent::Succeeded)?;
                guard.creations = creations;
                guard.error = None;
                guard.loaded_at = Some(Utc::now());
                tracing::info!(endpoint = %self.endpoint, count, "Creation list refreshed");
                Ok(LoadOutcome::Applied { count })
            }
            Err(e) => {
                guard.state = StoreStateMachine::transition(guard.state, StoreEvent::Failed)?;
                guard.error = Some(e.user_message());
                tracing::warn!(
                    endpoint = %self.endpoint,
                    error = %e,
                    kept = guard.creations.len(),
                    "Load failed, keeping previous snapshot"
                );
                Err(e)
            }
        }
    }

    fn apply_event(&self, event: StoreEvent) -> Result<()> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.state = StoreStateMachine::transition(guard.state, event)?;
        Ok(())
    }
}

/// Keep the first occurrence of every id
fn dedupe_by_id(creations: Vec<Creation>) -> Vec<Creation> {
    let total = creations.len();
    let mut seen = HashSet::with_capacity(total);
    let unique: Vec<Creation> = creations
        .into_iter()
        .filter(|c| seen.insert(c.id))
        .collect();

    if unique.len() != total {
        tracing::warn!(
            dropped = total - unique.len(),
            "Server snapshot contained duplicate creation ids"
        );
    }
    unique
}
