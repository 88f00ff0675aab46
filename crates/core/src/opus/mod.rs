//! OPUS image metadata lookups.
//!
//! OPUS (Outer Planets Unified Search) answers "which preview images exist
//! for this instrument between these two timestamps". The answer is a JSON
//! document whose `data` entries each carry a base `path` and an `img` file
//! name; the image URL is their concatenation.

mod client;
mod query;
mod types;

pub use client::OpusClient;
pub use query::{build_query_url, instrument_from_query, query_param};
pub use types::{MetadataResponse, OpusImage, OpusImagesResponse};

use async_trait::async_trait;
use thiserror::Error;

use crate::report::{anchor, escape_html, ReportLog};

/// Errors that can occur while fetching image metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The metadata API answered with a non-success status.
    #[error("Remote request failed: {status} - {message}")]
    RemoteRequest { status: u16, message: String },

    /// Anything else: transport failure, unreadable body, malformed JSON.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl MetadataError {
    pub fn unexpected(reason: impl Into<String>) -> Self {
        Self::Unexpected(reason.into())
    }
}

/// Source of image URL lists for a fully formed query URL.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Perform the query and return the image URLs in response order.
    async fn image_urls(&self, url: &str) -> Result<MetadataResponse, MetadataError>;
}

/// Fetch image URLs for `url`, turning every failure into an empty list.
///
/// Failures are written to the report log; callers treat an empty list as
/// "nothing to assemble".
pub async fn collect_image_urls(
    source: &dyn MetadataSource,
    url: &str,
    log: &ReportLog,
) -> Vec<String> {
    log.debug("Fetching OPUS JSON");

    match source.image_urls(url).await {
        Ok(response) => {
            log.info(format!(
                "Got response [{}] for URL: {}",
                response.status,
                anchor(url)
            ));
            let links: Vec<String> = response.image_urls.iter().map(|u| anchor(u)).collect();
            log.info(format!(
                "Found {} image URLs: [{}]",
                links.len(),
                links.join(", ")
            ));
            response.image_urls
        }
        Err(MetadataError::RemoteRequest { status, message }) => {
            log.error(format!(
                "Request error for {} [{}]: {}",
                anchor(url),
                status,
                escape_html(&message)
            ));
            Vec::new()
        }
        Err(e) => {
            log.error(format!(
                "Unexpected error while fetching {}: {}",
                anchor(url),
                escape_html(&e.to_string())
            ));
            Vec::new()
        }
    }
}
