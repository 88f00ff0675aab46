//! Mock frame source for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use crate::imagery::{AssemblyError, FrameSource};

/// Mock implementation of the FrameSource trait.
///
/// Serves configured bytes per URL and records every fetch. URLs marked with
/// [`MockFrameSource::fail_url`] or never configured fail with a download
/// error.
#[derive(Debug, Default)]
pub struct MockFrameSource {
    frames: RwLock<HashMap<String, Vec<u8>>>,
    failing: RwLock<HashSet<String>>,
    fetched: RwLock<Vec<String>>,
}

impl MockFrameSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_frame(&self, url: impl Into<String>, bytes: Vec<u8>) {
        self.frames.write().await.insert(url.into(), bytes);
    }

    /// Make fetching `url` fail.
    pub async fn fail_url(&self, url: impl Into<String>) {
        self.failing.write().await.insert(url.into());
    }

    /// Fetched URLs in fetch order.
    pub async fn fetched_urls(&self) -> Vec<String> {
        self.fetched.read().await.clone()
    }
}

#[async_trait]
impl FrameSource for MockFrameSource {
    async fn fetch_frame(&self, url: &str) -> Result<Vec<u8>, AssemblyError> {
        self.fetched.write().await.push(url.to_string());

        if self.failing.read().await.contains(url) {
            return Err(AssemblyError::download(url, "simulated failure"));
        }

        self.frames
            .read()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| AssemblyError::download(url, "no frame configured"))
    }
}
