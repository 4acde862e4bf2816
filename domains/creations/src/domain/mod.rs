//! Domain layer for creations
//!
//! Contains entities, the store state machine, and derived views.

pub mod entities;
pub mod state;
pub mod view;
