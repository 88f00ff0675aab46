use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::types::{Orbit, OrbitsFile};

#[derive(Debug, Error)]
pub enum OrbitLoadError {
    #[error("Failed to read orbits file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse orbits document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read the `{"orbits": [...]}` input document.
pub fn load_orbits(path: &Path) -> Result<Vec<Orbit>, OrbitLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| OrbitLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let orbits = parse_orbits(&contents)?;
    debug!(path = %path.display(), count = orbits.len(), "Loaded orbits");
    Ok(orbits)
}

pub fn parse_orbits(json: &str) -> Result<Vec<Orbit>, OrbitLoadError> {
    let file: OrbitsFile = serde_json::from_str(json)?;
    Ok(file.orbits)
}
