//! Drone API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::entities::{Deploy, WidgetConfig};
use crate::domain::ports::DroneClient;
use crate::error::DroneError;

/// Implementation of the Drone API client
#[derive(Clone, Default)]
pub struct DroneHttpClient {
    http: Client,
}

impl DroneHttpClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    fn feed_url(drone_url: &str) -> String {
        format!(
            "{}/api/user/feed?latest=true",
            drone_url.trim_end_matches('/')
        )
    }
}

async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, DroneError> {
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| DroneError::Deserialization(e.to_string()))
    } else if status.as_u16() == 401 {
        Err(DroneError::Unauthorized)
    } else if status.as_u16() == 429 {
        Err(DroneError::RateLimited)
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(DroneError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl DroneClient for DroneHttpClient {
    async fn user_feed(&self, config: &WidgetConfig) -> Result<Vec<Deploy>, DroneError> {
        let response = self
            .http
            .get(Self::feed_url(&config.drone_url))
            .bearer_auth(&config.api_key)
            .send()
            .await?;

        handle_response(response).await
    }
}
