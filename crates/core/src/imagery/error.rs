//! Error types for image assembly.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the assembly of one animation.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// A frame could not be downloaded.
    #[error("Failed to download frame {url}: {reason}")]
    Download { url: String, reason: String },

    /// Downloaded bytes are not a decodable image.
    #[error("Failed to decode frame {url}")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },

    /// The GIF encoder rejected a frame.
    #[error("Failed to encode animation frame")]
    Encode(#[source] image::ImageError),

    /// The output file could not be written or moved into place.
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AssemblyError {
    pub fn download(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Download {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
