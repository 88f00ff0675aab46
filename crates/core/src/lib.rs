pub mod config;
pub mod imagery;
pub mod opus;
pub mod orbit;
pub mod orchestrator;
pub mod report;
pub mod testing;
pub mod text;

pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, Config, ConfigError,
};
pub use imagery::{
    AssembledAnimation, AssemblyError, FrameSource, GifAssembler, ImageryCoordinator,
    ImageryReport, UnitOutcome, UnitStatus,
};
pub use opus::{build_query_url, MetadataError, MetadataSource, OpusClient};
pub use orbit::{load_orbits, Instrument, Orbit, OrbitLoadError};
pub use orchestrator::{OrbitDriver, OrbitOutcome, RunSummary};
pub use report::{ReportError, ReportLog};
pub use text::{
    Lexicon, Resolution, TermCache, TextAnalysis, TextAnalyzer, WikipediaClient, WiktionaryClient,
};
