//! Unified error types for the feed widget
//!
//! This module defines error types for each layer:
//! - `DroneError`: Drone API client errors
//! - `HostError`: dashboard host call rejections
//! - `WidgetError`: operation-level errors surfaced to the embedder

use thiserror::Error;

/// Drone API client errors
#[derive(Debug, Error)]
pub enum DroneError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid API key")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Errors from the dashboard host collaborator
///
/// The host owns config storage and widget chrome; any of its calls can be
/// rejected. These are never swallowed silently - operations surface them
/// through their return value and the rendered view.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Config read failed: {0}")]
    ReadConfig(String),

    #[error("Config write failed: {0}")]
    StoreConfig(String),

    #[error("Exit config mode failed: {0}")]
    ExitConfigMode(String),
}

/// Operation-level errors - used by widget entry points
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Host error: {0}")]
    Host(#[from] HostError),
}
