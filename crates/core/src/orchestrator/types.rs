//! Orbit driver result types.

use std::path::PathBuf;

use crate::imagery::ImageryReport;
use crate::text::TextAnalysis;

/// Result of processing one orbit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbitOutcome {
    pub number: i64,
    /// Path of the orbit's report fragment.
    pub fragment: PathBuf,
    /// `None` when text analysis is disabled.
    pub text: Option<TextAnalysis>,
    pub imagery: ImageryReport,
}

/// Result of a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub report_path: PathBuf,
    pub orbits: Vec<OrbitOutcome>,
}

impl RunSummary {
    pub fn animations_written(&self) -> usize {
        self.orbits
            .iter()
            .map(|o| o.imagery.animations().count())
            .sum()
    }

    pub fn failed_units(&self) -> usize {
        self.orbits.iter().map(|o| o.imagery.failures()).sum()
    }

    /// Whether any instrument unit failed to assemble its animation.
    pub fn has_failures(&self) -> bool {
        self.failed_units() > 0
    }
}
