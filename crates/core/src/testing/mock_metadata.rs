//! Mock OPUS metadata source for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::opus::{instrument_from_query, MetadataError, MetadataResponse, MetadataSource};
use crate::orbit::Instrument;

/// Canned answer for one instrument.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Success with these image URLs.
    Urls(Vec<String>),
    /// Non-success HTTP status.
    Status(u16),
    /// Any other failure.
    Unexpected(String),
}

impl MockResponse {
    pub fn urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Urls(urls.into_iter().map(Into::into).collect())
    }
}

/// Mock implementation of the MetadataSource trait.
///
/// Responses are keyed by the instrument named in the query URL; instruments
/// without a configured response get an empty URL list. Every requested URL
/// is recorded, and the highest number of requests in flight at once is
/// tracked so tests can observe concurrency.
#[derive(Debug, Default)]
pub struct MockMetadataSource {
    responses: RwLock<HashMap<Instrument, MockResponse>>,
    requests: RwLock<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the answer for `instrument`.
    pub async fn set_response(&self, instrument: Instrument, response: MockResponse) {
        self.responses.write().await.insert(instrument, response);
    }

    /// All requested URLs, in request order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }

    /// Highest number of requests observed in flight simultaneously.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataSource for MockMetadataSource {
    async fn image_urls(&self, url: &str) -> Result<MetadataResponse, MetadataError> {
        self.requests.write().await.push(url.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        // Let sibling units reach this point before answering.
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let response = match instrument_from_query(url) {
            Some(instrument) => self.responses.read().await.get(&instrument).cloned(),
            None => None,
        };

        match response.unwrap_or(MockResponse::Urls(Vec::new())) {
            MockResponse::Urls(image_urls) => Ok(MetadataResponse {
                status: 200,
                image_urls,
            }),
            MockResponse::Status(status) => Err(MetadataError::RemoteRequest {
                status,
                message: reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown status")
                    .to_string(),
            }),
            MockResponse::Unexpected(reason) => Err(MetadataError::Unexpected(reason)),
        }
    }
}
