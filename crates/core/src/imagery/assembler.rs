//! GIF assembly from an ordered list of image URLs.

use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{imageops, Delay, Frame, RgbaImage};
use tracing::{debug, warn};

use crate::config::AnimationConfig;

use super::error::AssemblyError;
use super::traits::FrameSource;
use super::types::AssembledAnimation;

/// Writes downloaded frames, in order, into a single looping GIF.
///
/// The canvas is as large as the largest frame; smaller frames are centred
/// on a transparent background. The encoded animation goes to
/// `<target>.part` first and is renamed to `target` once written, so a
/// target that exists is always complete.
#[derive(Debug, Clone)]
pub struct GifAssembler {
    frame_delay_ms: u32,
}

impl GifAssembler {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            frame_delay_ms: config.frame_delay_ms,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&AnimationConfig::default())
    }

    /// Assemble `urls` into `target`.
    ///
    /// Returns `Ok(None)` without touching the filesystem when `urls` is empty.
    pub async fn assemble(
        &self,
        source: &dyn FrameSource,
        urls: &[String],
        target: &Path,
    ) -> Result<Option<AssembledAnimation>, AssemblyError> {
        if urls.is_empty() {
            return Ok(None);
        }

        let mut images = Vec::with_capacity(urls.len());
        for url in urls {
            let bytes = source.fetch_frame(url).await?;
            let image = image::load_from_memory(&bytes)
                .map_err(|source| AssemblyError::Decode {
                    url: url.clone(),
                    source,
                })?
                .to_rgba8();
            images.push(image);
        }

        let encoded = self.encode(images)?;

        let partial = partial_path(target);
        if let Err(e) = write_then_rename(&encoded, &partial, target).await {
            if let Err(remove_err) = tokio::fs::remove_file(&partial).await {
                if remove_err.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        "Failed to remove partial animation {}: {}",
                        partial.display(),
                        remove_err
                    );
                }
            }
            return Err(e);
        }

        debug!(path = %target.display(), frames = urls.len(), "Animation written");
        Ok(Some(AssembledAnimation {
            path: target.to_path_buf(),
            frames: urls.len(),
        }))
    }

    fn encode(&self, images: Vec<RgbaImage>) -> Result<Vec<u8>, AssemblyError> {
        let width = images.iter().map(|i| i.width()).max().unwrap_or(0);
        let height = images.iter().map(|i| i.height()).max().unwrap_or(0);

        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            encoder
                .set_repeat(Repeat::Infinite)
                .map_err(AssemblyError::Encode)?;

            for image in images {
                let frame = Frame::from_parts(
                    fit_to_canvas(image, width, height),
                    0,
                    0,
                    Delay::from_numer_denom_ms(self.frame_delay_ms, 1),
                );
                encoder.encode_frame(frame).map_err(AssemblyError::Encode)?;
            }
        }

        Ok(bytes)
    }
}

/// Centre `image` on a transparent `width` x `height` canvas.
fn fit_to_canvas(image: RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.width() == width && image.height() == height {
        return image;
    }
    let mut canvas = RgbaImage::new(width, height);
    let left = (width - image.width()) / 2;
    let top = (height - image.height()) / 2;
    imageops::overlay(&mut canvas, &image, i64::from(left), i64::from(top));
    canvas
}

async fn write_then_rename(bytes: &[u8], partial: &Path, target: &Path) -> Result<(), AssemblyError> {
    tokio::fs::write(partial, bytes)
        .await
        .map_err(|e| AssemblyError::io(partial, e))?;
    tokio::fs::rename(partial, target)
        .await
        .map_err(|e| AssemblyError::io(target, e))
}

fn partial_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    target.with_file_name(name)
}
