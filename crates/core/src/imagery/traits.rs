use async_trait::async_trait;

use super::error::AssemblyError;

/// Downloads the raw bytes of one animation frame.
#[async_trait]
pub trait FrameSource: Send + Sync {
    async fn fetch_frame(&self, url: &str) -> Result<Vec<u8>, AssemblyError>;
}
