//! Testing utilities and mock implementations of the external services.
//!
//! Every remote collaborator (OPUS metadata, image downloads, encyclopedia,
//! dictionary) has a mock here, so the orchestrator can be exercised end to
//! end without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use traceback_core::testing::{fixtures, MockFrameSource, MockMetadataSource, MockResponse};
//!
//! let metadata = MockMetadataSource::new();
//! let frames = MockFrameSource::new();
//!
//! metadata.set_response(Instrument::Iss, MockResponse::urls(["http://img/1.png"])).await;
//! frames.set_frame("http://img/1.png", fixtures::solid_png([255, 0, 0])).await;
//! ```

mod mock_frames;
mod mock_lookup;
mod mock_metadata;

pub use mock_frames::MockFrameSource;
pub use mock_lookup::{MockDictionary, MockEncyclopedia};
pub use mock_metadata::{MockMetadataSource, MockResponse};

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

    use crate::orbit::Orbit;

    pub const START: &str = "2005-01-01T00:00:00.0";
    pub const FINISH: &str = "2005-01-02T00:00:00.0";

    /// An orbit spanning Jan 1-2 2005 with the given notes.
    pub fn orbit(number: i64, notes: &str) -> Orbit {
        Orbit {
            number,
            start: START.to_string(),
            finish: FINISH.to_string(),
            notes: notes.to_string(),
        }
    }

    /// A 4x4 opaque PNG of one colour.
    pub fn solid_png(rgb: [u8; 3]) -> Vec<u8> {
        png_of_size(4, 4, rgb)
    }

    /// An opaque PNG of one colour with the given dimensions.
    pub fn png_of_size(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("PNG encoding of an in-memory image");
        bytes
    }

    /// `count` image URLs under `base`, named `frame-<n>.png`.
    pub fn frame_urls(base: &str, count: usize) -> Vec<String> {
        (1..=count)
            .map(|n| format!("{}/frame-{}.png", base.trim_end_matches('/'), n))
            .collect()
    }
}
