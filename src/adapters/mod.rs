//! Adapters
//!
//! Concrete implementations of domain ports against real external systems.

pub mod drone;

pub use drone::DroneHttpClient;
