//! iptv-org Dataset Client
//!
//! HTTP client that downloads one dataset and decodes its JSON array.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

use super::types::{ApiChannel, ApiLogo, ApiStream, Dataset};
use crate::config::DatasetEndpoints;

/// Dataset fetch error types
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Network/connection error
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP error (non-2xx status)
    #[error("HTTP error: {0}")]
    Http(u16),
    /// JSON parsing error
    #[error("Parse error: {0}")]
    Parse(String),
    /// The HTTP client could not be built
    #[error("Client error: {0}")]
    Client(String),
}

/// Client for the iptv-org dataset endpoints
pub struct DatasetClient {
    http: Client,
    endpoints: DatasetEndpoints,
}

impl DatasetClient {
    pub fn new(
        endpoints: DatasetEndpoints,
        user_agent: &str,
        timeout_ms: u64,
    ) -> Result<Self, DatasetError> {
        let http = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_millis(timeout_ms))
            .gzip(true)
            .build()
            .map_err(|e| DatasetError::Client(e.to_string()))?;

        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &DatasetEndpoints {
        &self.endpoints
    }

    fn url_for(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::Channels => &self.endpoints.channels,
            Dataset::Streams => &self.endpoints.streams,
            Dataset::Logos => &self.endpoints.logos,
        }
    }

    /// GET a dataset and decode it as a JSON array
    async fn get<T: DeserializeOwned>(&self, dataset: Dataset) -> Result<Vec<T>, DatasetError> {
        let url = self.url_for(dataset);
        debug!("Dataset request: {} ({})", dataset, url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| DatasetError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::Http(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DatasetError::Network(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse {} dataset: {}", dataset, e);
            debug!("Response text: {}", text.chars().take(500).collect::<String>());
            DatasetError::Parse(e.to_string())
        })
    }

    pub async fn fetch_channels(&self) -> Result<Vec<ApiChannel>, DatasetError> {
        self.get(Dataset::Channels).await
    }

    pub async fn fetch_streams(&self) -> Result<Vec<ApiStream>, DatasetError> {
        self.get(Dataset::Streams).await
    }

    pub async fn fetch_logos(&self) -> Result<Vec<ApiLogo>, DatasetError> {
        self.get(Dataset::Logos).await
    }
}
