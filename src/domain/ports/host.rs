//! Dashboard host port trait
//!
//! Defines the interface the hosting dashboard runtime provides to the
//! widget: persisted configuration storage, configuration-mode chrome, and
//! the loading indicator. The widget core only talks to the host through
//! this trait, so tests can inject an in-memory fake.

use async_trait::async_trait;

use crate::domain::entities::WidgetConfig;
use crate::error::HostError;

#[async_trait]
pub trait DashboardHost: Send + Sync {
    /// Read the persisted widget configuration, if any was ever saved.
    async fn read_config(&self) -> Result<Option<WidgetConfig>, HostError>;

    /// Persist the configuration, replacing whatever was stored before.
    async fn store_config(&self, config: &WidgetConfig) -> Result<(), HostError>;

    /// Tell the host to close its configuration chrome around the widget.
    async fn exit_config_mode(&self) -> Result<(), HostError>;

    /// Toggle the host's loading indicator for this widget.
    fn set_loading_animation(&self, enabled: bool);
}
