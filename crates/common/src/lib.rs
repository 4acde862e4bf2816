//! Shared utilities, configuration, and error handling for CreatorKit
//!
//! This crate provides common functionality used across the CreatorKit client:
//! - Configuration management following 12-factor principles
//! - The workspace-wide error type and its user-facing messages
//! - Per-operation busy flags for submit-style operations
//! - State machine error types

pub mod busy;
pub mod config;
pub mod error;
pub mod state;

pub use busy::{BusyFlag, BusyGuard};
pub use config::{Config, CredentialProviderKind};
pub use error::{Error, Result};
pub use state::StateError;
