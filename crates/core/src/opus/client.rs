//! OPUS HTTP client.
//!
//! One client serves both the metadata queries and the image downloads that
//! follow them, so both share the connection pool and the request timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::OpusConfig;
use crate::imagery::{AssemblyError, FrameSource};
use crate::orbit::Instrument;

use super::query::build_query_url;
use super::types::{MetadataResponse, OpusImagesResponse};
use super::{MetadataError, MetadataSource};

/// OPUS API client.
pub struct OpusClient {
    client: Client,
    base_url: String,
}

impl OpusClient {
    /// Create a new OPUS client.
    pub fn new(config: &OpusConfig) -> Result<Self, MetadataError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MetadataError::unexpected(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query URL for one instrument and time window.
    pub fn query_url(&self, instrument: Instrument, start: &str, finish: &str) -> String {
        build_query_url(&self.base_url, instrument, start, finish)
    }
}

#[async_trait]
impl MetadataSource for OpusClient {
    async fn image_urls(&self, url: &str) -> Result<MetadataResponse, MetadataError> {
        debug!(url = url, "Querying OPUS");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MetadataError::unexpected(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::RemoteRequest {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            });
        }

        let body: OpusImagesResponse = response.json().await.map_err(|e| {
            MetadataError::unexpected(format!("Failed to parse OPUS response: {}", e))
        })?;

        debug!(url = url, images = body.data.len(), "OPUS query complete");

        Ok(MetadataResponse::from((status.as_u16(), body)))
    }
}

#[async_trait]
impl FrameSource for OpusClient {
    async fn fetch_frame(&self, url: &str) -> Result<Vec<u8>, AssemblyError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AssemblyError::download(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssemblyError::download(url, format!("HTTP {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AssemblyError::download(url, e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_uses_configured_base() {
        let config = OpusConfig {
            base_url: "http://localhost:9999/api/images/small.json".to_string(),
            ..Default::default()
        };
        let client = OpusClient::new(&config).unwrap();
        assert_eq!(
            client.query_url(Instrument::Cirs, "s", "f"),
            "http://localhost:9999/api/images/small.json?instrument=Cassini+CIRS&time1=s&time2=f"
        );
        assert_eq!(client.base_url(), config.base_url);
    }
}
