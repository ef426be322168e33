//! Domain entities

pub mod config;
pub mod deploy;
pub mod view;

pub use config::WidgetConfig;
pub use deploy::{sort_newest_first, Deploy, DeployStatus};
pub use view::{WidgetMode, WidgetView};
