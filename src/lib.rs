//! Drone build-feed dashboard widget
//!
//! A widget core that polls a Drone CI server for recent deployment statuses
//! and renders them as a sorted list. The hosting dashboard runtime is
//! abstracted behind port traits, so the core runs unchanged against any
//! host that can store a config record and toggle a loading indicator.
//! Uses hexagonal (ports & adapters) architecture for clean separation of
//! concerns.
//!
//! Typical embedding:
//!
//! ```no_run
//! use std::sync::Arc;
//! use drone_feed_widget::{
//!     DroneHttpClient, FeedWidget, RefreshHandle, DEFAULT_REFRESH_INTERVAL,
//! };
//! # use drone_feed_widget::{DashboardHost, WidgetConfig, HostError};
//! # use async_trait::async_trait;
//! # struct MyHost;
//! # #[async_trait]
//! # impl DashboardHost for MyHost {
//! #     async fn read_config(&self) -> Result<Option<WidgetConfig>, HostError> { Ok(None) }
//! #     async fn store_config(&self, _: &WidgetConfig) -> Result<(), HostError> { Ok(()) }
//! #     async fn exit_config_mode(&self) -> Result<(), HostError> { Ok(()) }
//! #     fn set_loading_animation(&self, _: bool) {}
//! # }
//!
//! # async fn mount(host: Arc<MyHost>) {
//! let widget = Arc::new(FeedWidget::new(host, Arc::new(DroneHttpClient::new())));
//! let _ = widget.initialize().await;
//! // keep the handle; dropping it at teardown stops the polling task
//! let refresh = RefreshHandle::spawn(widget.clone(), DEFAULT_REFRESH_INTERVAL);
//! # drop(refresh);
//! # }
//! ```

pub mod adapters;
pub mod app;
pub mod domain;
pub mod error;
pub mod feed;


pub use adapters::DroneHttpClient;
pub use app::{FeedWidget, RefreshHandle, DEFAULT_REFRESH_INTERVAL};
pub use domain::entities::{Deploy, DeployStatus, WidgetConfig, WidgetMode, WidgetView};
pub use domain::ports::{DashboardHost, DroneClient};
pub use error::{DroneError, HostError, WidgetError};
pub use feed::{render_widget, render_widget_at};
