//! Orbit record types.

use serde::{Deserialize, Serialize};

use super::instrument::Instrument;

/// One orbital pass, as read from the input document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Orbit {
    /// Orbit number, also the name of the orbit's output directory.
    pub number: i64,
    /// Start of the time window (ISO 8601-like, passed to OPUS verbatim).
    pub start: String,
    /// End of the time window.
    pub finish: String,
    /// Free-text notes describing the orbit.
    #[serde(default)]
    pub notes: String,
}

impl Orbit {
    /// Instruments whose acronym appears anywhere in the notes.
    ///
    /// This is a plain substring test, so "VIMS" also matches inside
    /// "XVIMSX" and "ISS" inside "MISSION".
    pub fn instruments(&self) -> Vec<Instrument> {
        Instrument::ALL
            .into_iter()
            .filter(|instrument| self.notes.contains(instrument.acronym()))
            .collect()
    }

    /// Name of the orbit's output directory.
    pub fn directory_name(&self) -> String {
        self.number.to_string()
    }
}

/// Top-level input document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrbitsFile {
    pub orbits: Vec<Orbit>,
}
