//! Domain layer for generation tools
//!
//! Contains tool options, validated request types, and uploads.

pub mod entities;
pub mod upload;
