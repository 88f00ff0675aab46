//! Orbit records and the instruments whose imagery can be attached to them.
//!
//! An orbit is one spacecraft pass and the unit of report generation. Its
//! free-text notes decide which instruments are relevant and its start and
//! finish timestamps give the time window for image queries.

mod dates;
mod instrument;
mod loader;
mod types;

pub use dates::{format_date_range, DateError};
pub use instrument::Instrument;
pub use loader::{load_orbits, parse_orbits, OrbitLoadError};
pub use types::{Orbit, OrbitsFile};
