//! Domain layer
//!
//! Contains pure widget logic with no external dependencies.
//! - `entities`: Data models for configuration, deploys, and view state
//! - `ports`: Trait definitions for external collaborators

pub mod entities;
pub mod ports;
