//! Orbit driver.
//!
//! Processes orbits strictly one after another:
//! - **Fragment**: heading and notes written to `<orbit>/log.html`
//! - **Text**: entity lookups logged into the fragment (optional)
//! - **Imagery**: concurrent per-instrument units, joined before moving on
//! - **Report**: all fragments concatenated into the report page at the end

mod runner;
mod types;

pub use runner::{OrbitDriver, FRAGMENT_FILE};
pub use types::{OrbitOutcome, RunSummary};
