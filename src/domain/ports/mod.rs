//! Domain ports (traits)
//!
//! Port traits define interfaces that the widget core requires.
//! Adapters (and the embedding dashboard) provide concrete implementations.

pub mod drone;
pub mod host;

pub use drone::DroneClient;
pub use host::DashboardHost;
