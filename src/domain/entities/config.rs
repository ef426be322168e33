//! Widget configuration

use serde::{Deserialize, Serialize};

/// Connection settings for the Drone server.
///
/// Persisted through the dashboard host as a flat `{apiKey, droneUrl}`
/// record; the host treats it as opaque JSON. Empty strings mean unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Bearer token for the Drone API
    pub api_key: String,
    /// Base URL of the Drone server
    pub drone_url: String,
}

impl WidgetConfig {
    pub fn new(api_key: impl Into<String>, drone_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            drone_url: drone_url.into(),
        }
    }

    /// Both fields must be non-empty before a fetch is allowed.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.drone_url.is_empty()
    }
}
