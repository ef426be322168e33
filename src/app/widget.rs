//! Feed widget state machine
//!
//! Owns configuration state, performs fetches against the Drone feed
//! endpoint, and exposes view snapshots for rendering. The host runtime and
//! the HTTP client are injected as port traits, so the whole machine runs
//! against in-memory fakes in tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{sort_newest_first, Deploy, WidgetConfig, WidgetMode, WidgetView};
use crate::domain::ports::{DashboardHost, DroneClient};
use crate::error::{HostError, WidgetError};

#[derive(Default)]
struct WidgetState {
    mode: WidgetMode,
    config: WidgetConfig,
    deploys: Vec<Deploy>,
    host_error: Option<String>,
}

/// The build-feed widget.
///
/// One instance per dashboard mount. All operations take `&self`; state
/// lives behind a lock because the periodic refresh task and host-issued
/// signals can run concurrently.
pub struct FeedWidget<H, C>
where
    H: DashboardHost,
    C: DroneClient,
{
    host: Arc<H>,
    drone: Arc<C>,
    state: RwLock<WidgetState>,
    /// Monotonic fetch sequence. A response is applied only if it belongs to
    /// the latest issued request, so overlapping fetches cannot clobber
    /// newer data with a slow stale reply.
    fetch_seq: AtomicU64,
}

impl<H, C> FeedWidget<H, C>
where
    H: DashboardHost,
    C: DroneClient,
{
    pub fn new(host: Arc<H>, drone: Arc<C>) -> Self {
        Self {
            host,
            drone,
            state: RwLock::new(WidgetState::default()),
            fetch_seq: AtomicU64::new(0),
        }
    }

    /// Load persisted configuration from the host and, if it is complete,
    /// trigger the first fetch. Called once at mount and again after a
    /// cancelled configuration edit.
    pub async fn initialize(&self) -> Result<(), WidgetError> {
        match self.host.read_config().await {
            Ok(Some(config)) => {
                let complete = config.is_complete();
                {
                    let mut state = self.state.write().unwrap();
                    state.config = config;
                    state.host_error = None;
                }
                if complete {
                    self.fetch().await;
                }
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => Err(self.record_host_error(e)),
        }
    }

    /// Fetch the build feed and replace the deploy list with the sorted
    /// response.
    ///
    /// No-op unless both connection settings are present. Fetch failures are
    /// logged and leave the previous list visible; they never change mode.
    /// The host loading indicator is cleared on every path.
    pub async fn fetch(&self) {
        let config = {
            let state = self.state.read().unwrap();
            if !state.config.is_complete() {
                return;
            }
            state.config.clone()
        };

        let issued = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;

        self.host.set_loading_animation(true);
        let result = self.drone.user_feed(&config).await;
        self.host.set_loading_animation(false);

        match result {
            Ok(deploys) => self.apply_deploys(issued, deploys),
            Err(e) => {
                tracing::warn!("feed fetch failed: {}", e);
            }
        }
    }

    /// Replace the deploy list with a fetch response, unless a newer request
    /// has been issued in the meantime.
    ///
    /// The sequence check happens while holding the state write lock, so a
    /// slow reply cannot pass the check and then overwrite data written by a
    /// newer request between check and apply.
    fn apply_deploys(&self, issued: u64, mut deploys: Vec<Deploy>) {
        let mut state = self.state.write().unwrap();
        if issued != self.fetch_seq.load(Ordering::SeqCst) {
            tracing::warn!(issued, "discarding stale feed response");
            return;
        }
        sort_newest_first(&mut deploys);
        tracing::debug!(count = deploys.len(), "applied feed fetch");
        state.deploys = deploys;
    }

    /// Persist the current draft settings and return to the viewing surface.
    ///
    /// If the host rejects the write, the widget stays in `Configuring` with
    /// the drafts intact and a visible error, so edits are not silently lost.
    pub async fn save_config(&self) -> Result<(), WidgetError> {
        let config = self.state.read().unwrap().config.clone();

        match self.host.store_config(&config).await {
            Ok(()) => {
                {
                    let mut state = self.state.write().unwrap();
                    state.mode = WidgetMode::Viewing;
                    state.host_error = None;
                }
                if config.is_complete() {
                    self.fetch().await;
                }
                Ok(())
            }
            Err(e) => Err(self.record_host_error(e)),
        }
    }

    /// Discard unsaved edits: leave the configuration surface, tell the host
    /// to close its config chrome, then reload whatever was last persisted.
    pub async fn cancel_config(&self) -> Result<(), WidgetError> {
        self.state.write().unwrap().mode = WidgetMode::Viewing;

        self.host
            .exit_config_mode()
            .await
            .map_err(|e| self.record_host_error(e))?;

        self.initialize().await
    }

    /// Update one draft field from the configuration form.
    /// Unrecognized field names are ignored.
    pub fn set_field(&self, name: &str, value: &str) {
        let mut state = self.state.write().unwrap();
        match name {
            "apiKey" => state.config.api_key = value.to_string(),
            "droneUrl" => state.config.drone_url = value.to_string(),
            _ => {}
        }
    }

    /// Host signal: the user opened the widget's settings.
    pub fn on_configure(&self) {
        self.state.write().unwrap().mode = WidgetMode::Configuring;
    }

    /// Host signal: the user asked for a manual refresh.
    pub async fn on_refresh(&self) {
        self.fetch().await;
    }

    /// Snapshot of the current state for rendering.
    pub fn view(&self) -> WidgetView {
        let state = self.state.read().unwrap();
        WidgetView {
            mode: state.mode,
            config: state.config.clone(),
            deploys: state.deploys.clone(),
            host_error: state.host_error.clone(),
        }
    }

    fn record_host_error(&self, e: HostError) -> WidgetError {
        tracing::error!("host call rejected: {}", e);
        self.state.write().unwrap().host_error = Some(e.to_string());
        WidgetError::Host(e)
    }
}
