//! Drone client port trait

use async_trait::async_trait;

use crate::domain::entities::{Deploy, WidgetConfig};
use crate::error::DroneError;

/// Interface for fetching the build feed from a Drone server.
///
/// Takes the full connection settings per call because the user can change
/// them at any time through the configuration form.
#[async_trait]
pub trait DroneClient: Send + Sync {
    /// Fetch the latest build feed for the configured user.
    async fn user_feed(&self, config: &WidgetConfig) -> Result<Vec<Deploy>, DroneError>;
}
