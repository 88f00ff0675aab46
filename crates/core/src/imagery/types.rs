//! Outcome types for the imagery fan-out.

use std::path::PathBuf;

use crate::orbit::Instrument;

/// A finished animation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledAnimation {
    pub path: PathBuf,
    pub frames: usize,
}

/// What happened to one instrument's unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitStatus {
    /// Animation written.
    Written(AssembledAnimation),
    /// Metadata lookup produced no image URLs (or failed and was swallowed).
    NoImages,
    /// Assembly aborted; no file was left behind.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOutcome {
    pub instrument: Instrument,
    pub query_url: String,
    pub status: UnitStatus,
}

/// All unit outcomes for one orbit, in instrument declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageryReport {
    pub outcomes: Vec<UnitOutcome>,
}

impl ImageryReport {
    pub fn animations(&self) -> impl Iterator<Item = &AssembledAnimation> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            UnitStatus::Written(animation) => Some(animation),
            _ => None,
        })
    }

    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, UnitStatus::Failed { .. }))
            .count()
    }

    pub fn instruments(&self) -> Vec<Instrument> {
        self.outcomes.iter().map(|o| o.instrument).collect()
    }
}
