//! Drone API adapter

pub mod client;

pub use client::DroneHttpClient;
