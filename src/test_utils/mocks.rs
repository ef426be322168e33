//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing. They record
//! calls so tests can verify behavior: stored config, loading-indicator
//! toggles, exit-config-mode calls, and feed-fetch counts.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::{Deploy, WidgetConfig};
use crate::domain::ports::{DashboardHost, DroneClient};
use crate::error::{DroneError, HostError};

// ============================================================================
// In-Memory Dashboard Host
// ============================================================================

#[derive(Default)]
pub struct MockDashboardHost {
    stored: Arc<Mutex<Option<WidgetConfig>>>,
    loading: Arc<Mutex<Vec<bool>>>,
    exit_calls: Arc<AtomicUsize>,
    fail_read: bool,
    fail_store: bool,
    fail_exit: bool,
}

impl MockDashboardHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the host storage with a persisted configuration
    pub fn with_config(self, config: WidgetConfig) -> Self {
        *self.stored.lock().unwrap() = Some(config);
        self
    }

    /// Make `read_config` fail
    pub fn with_failing_read(mut self) -> Self {
        self.fail_read = true;
        self
    }

    /// Make `store_config` fail
    pub fn with_failing_store(mut self) -> Self {
        self.fail_store = true;
        self
    }

    /// Make `exit_config_mode` fail
    pub fn with_failing_exit(mut self) -> Self {
        self.fail_exit = true;
        self
    }

    /// Handle to the stored configuration, for assertions
    pub fn stored_config(&self) -> Arc<Mutex<Option<WidgetConfig>>> {
        self.stored.clone()
    }

    /// Every `set_loading_animation` call, in order
    pub fn loading_history(&self) -> Arc<Mutex<Vec<bool>>> {
        self.loading.clone()
    }

    /// Number of `exit_config_mode` calls
    pub fn exit_call_counter(&self) -> Arc<AtomicUsize> {
        self.exit_calls.clone()
    }
}

#[async_trait]
impl DashboardHost for MockDashboardHost {
    async fn read_config(&self) -> Result<Option<WidgetConfig>, HostError> {
        if self.fail_read {
            return Err(HostError::ReadConfig("storage unavailable".to_string()));
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn store_config(&self, config: &WidgetConfig) -> Result<(), HostError> {
        if self.fail_store {
            return Err(HostError::StoreConfig("storage unavailable".to_string()));
        }
        *self.stored.lock().unwrap() = Some(config.clone());
        Ok(())
    }

    async fn exit_config_mode(&self) -> Result<(), HostError> {
        if self.fail_exit {
            return Err(HostError::ExitConfigMode("host rejected".to_string()));
        }
        self.exit_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn set_loading_animation(&self, enabled: bool) {
        self.loading.lock().unwrap().push(enabled);
    }
}

// ============================================================================
// Scripted Drone Client
// ============================================================================

struct ScriptedResponse {
    delay: Option<Duration>,
    result: Result<Vec<Deploy>, DroneError>,
}

/// Drone client that replays a scripted queue of responses.
///
/// Each `user_feed` call consumes one entry; once the queue is empty it
/// returns an empty feed.
#[derive(Default)]
pub struct MockDroneClient {
    responses: Arc<Mutex<VecDeque<ScriptedResponse>>>,
    calls: Arc<AtomicUsize>,
}

impl MockDroneClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn with_response(self, deploys: Vec<Deploy>) -> Self {
        self.responses.lock().unwrap().push_back(ScriptedResponse {
            delay: None,
            result: Ok(deploys),
        });
        self
    }

    /// Queue a successful response that takes `delay` to arrive
    pub fn with_delayed_response(self, delay: Duration, deploys: Vec<Deploy>) -> Self {
        self.responses.lock().unwrap().push_back(ScriptedResponse {
            delay: Some(delay),
            result: Ok(deploys),
        });
        self
    }

    /// Queue a failure
    pub fn with_error(self, error: DroneError) -> Self {
        self.responses.lock().unwrap().push_back(ScriptedResponse {
            delay: None,
            result: Err(error),
        });
        self
    }

    /// Number of `user_feed` calls
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl DroneClient for MockDroneClient {
    async fn user_feed(&self, _config: &WidgetConfig) -> Result<Vec<Deploy>, DroneError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let scripted = self.responses.lock().unwrap().pop_front();
        match scripted {
            Some(response) => {
                if let Some(delay) = response.delay {
                    tokio::time::sleep(delay).await;
                }
                response.result
            }
            None => Ok(Vec::new()),
        }
    }
}
