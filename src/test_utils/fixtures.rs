//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Deploy, WidgetConfig};

/// A complete connection configuration
pub fn test_config() -> WidgetConfig {
    WidgetConfig::new("sk-test", "https://drone.example.com")
}

/// A successful deploy with the given name and start time
pub fn test_deploy(name: &str, started_at: Option<i64>) -> Deploy {
    Deploy {
        name: name.to_string(),
        status: "success".to_string(),
        started_at,
        number: Some(1),
        full_name: Some(format!("acme/{}", name)),
        commit: Some("deadbeefcafe".to_string()),
        branch: Some("main".to_string()),
        remote: Some(format!("https://git.example.com/acme/{}.git", name)),
        message: Some(format!("Build {}", name)),
    }
}

/// A deploy that is still running
pub fn running_deploy(name: &str, started_at: Option<i64>) -> Deploy {
    Deploy {
        status: "running".to_string(),
        ..test_deploy(name, started_at)
    }
}
