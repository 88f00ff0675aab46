//! Instrument imagery: fetch OPUS previews and assemble them into GIFs.
//!
//! For every instrument named in an orbit's notes the [`ImageryCoordinator`]
//! runs one independent unit of work:
//!
//! ```text
//! query URL ──► MetadataSource ──► [image URLs] ──► GifAssembler ──► <ACRONYM>.gif
//!                                                     ▲
//!                                                FrameSource
//! ```
//!
//! Units are polled concurrently and the coordinator waits for all of them.
//! A unit never fails the coordinator: metadata errors become an empty URL
//! list and assembly errors become a [`UnitStatus::Failed`] outcome.

mod assembler;
mod coordinator;
mod error;
mod traits;
mod types;

pub use assembler::GifAssembler;
pub use coordinator::ImageryCoordinator;
pub use error::AssemblyError;
pub use traits::FrameSource;
pub use types::{AssembledAnimation, ImageryReport, UnitOutcome, UnitStatus};
