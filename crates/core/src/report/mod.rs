//! Report fragments and the final report page.
//!
//! Each orbit owns one HTML fragment (`<orbit>/log.html`). Components write
//! to it through a [`ReportLog`], and the orchestrator concatenates every
//! fragment into one page once all orbits are processed.

mod html;
mod log;

pub use html::{
    anchor, escape_html, figure, orbit_intro, orbit_notes_html, render_page, SECTION_CLOSE,
};
pub use log::ReportLog;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while creating or assembling report files.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to create an output directory.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read or write a report file.
    #[error("Failed to write report file: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read an orbit fragment back.
    #[error("Failed to read report fragment: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub(crate) fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }
}
