//! Widget view state

use super::{Deploy, WidgetConfig};

/// Which of the two widget surfaces is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetMode {
    /// Editing connection settings
    Configuring,
    /// Showing the deploy list (or the setup prompt when unconfigured)
    #[default]
    Viewing,
}

/// Immutable snapshot of widget state handed to the renderer.
#[derive(Debug, Clone)]
pub struct WidgetView {
    pub mode: WidgetMode,
    /// Current field values; in `Configuring` these are unsaved drafts
    pub config: WidgetConfig,
    /// Deploys from the last successful fetch, newest first
    pub deploys: Vec<Deploy>,
    /// Set when a host call was rejected; rendered as a visible banner
    pub host_error: Option<String>,
}
