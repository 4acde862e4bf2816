//! Creations domain: the user's creation feed and the community gallery

pub mod domain;
pub mod store;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Creation, CreationBody, CreationId, CreationType, Creator, TypeFilter};
pub use domain::state::{StoreEvent, StoreState, StoreStateMachine};
pub use domain::view::{filtered_view, CommunityStats, DashboardStats, TRENDING_THRESHOLD};

// Re-export store types
pub use store::community::{CommunityStore, LikeToggle};
pub use store::creations::CreationStore;
pub use store::{LoadOutcome, StoreSnapshot};
