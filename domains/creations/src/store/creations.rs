//! The signed-in user's own creations

use chrono::{DateTime, Local, TimeZone};

use creatorkit_common::Result;
use creatorkit_gateway::{CredentialProvider, Endpoint, RequestGateway};

use crate::domain::entities::{Creation, TypeFilter};
use crate::domain::state::StoreState;
use crate::domain::view::{filtered_view, DashboardStats};
use crate::store::{LoadOutcome, StoreSnapshot, SyncedList};

/// Store behind the personal dashboard
#[derive(Debug)]
pub struct CreationStore {
    gateway: RequestGateway,
    list: SyncedList,
}

impl CreationStore {
    pub fn new(gateway: RequestGateway) -> Self {
        Self {
            gateway,
            list: SyncedList::new(Endpoint::UserCreations),
        }
    }

    /// Fetch all of the user's creations, replacing the cached list on success
    pub async fn load(&self, credentials: &dyn CredentialProvider) -> Result<LoadOutcome> {
        self.list.load(&self.gateway, credentials).await
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

    pub fn creations(&self) -> Vec<Creation> {
        self.list.with_creations(<[Creation]>::to_vec)
    }

    pub fn filtered_view(&self, search: &str, filter: TypeFilter) -> Vec<Creation> {
        self.list.with_creations(|creations| {
            filtered_view(creations, search, filter)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Dashboard stats relative to the local wall clock
    pub fn stats(&self) -> DashboardStats {
        self.stats_at(&Local::now())
    }

    pub fn stats_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DashboardStats {
        self.list
            .with_creations(|creations| DashboardStats::compute(creations, now))
    }
}
