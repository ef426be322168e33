//! Periodic refresh task
//!
//! The widget polls the feed on a fixed interval. The timer is an explicitly
//! owned tokio task: the embedder keeps the handle for the lifetime of the
//! mount and cancels it (or just drops it) at teardown. In-flight responses
//! that land after a newer fetch are already discarded by the widget's
//! sequence guard.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::app::FeedWidget;
use crate::domain::ports::{DashboardHost, DroneClient};

/// Poll interval used by dashboards unless they override it.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Owned handle to the periodic poll task.
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Spawn a task that fetches the feed every `period`.
    ///
    /// The first tick fires one full period after spawning; the mount path
    /// already fetches once via `initialize`.
    pub fn spawn<H, C>(widget: Arc<FeedWidget<H, C>>, period: Duration) -> Self
    where
        H: DashboardHost + 'static,
        C: DroneClient + 'static,
    {
        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut ticks = tokio::time::interval_at(start, period);
            loop {
                ticks.tick().await;
                widget.fetch().await;
            }
        });
        Self { task }
    }

    /// Stop polling. Dropping the handle has the same effect.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
