//! Application layer
//!
//! The widget state machine and the periodic refresh task that drives it.

pub mod refresh;
pub mod widget;

pub use refresh::{RefreshHandle, DEFAULT_REFRESH_INTERVAL};
pub use widget::FeedWidget;
