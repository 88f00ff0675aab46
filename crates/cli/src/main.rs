use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use traceback_core::{
    load_config, load_config_from_env, load_orbits, validate_config, Config, GifAssembler,
    ImageryCoordinator, Lexicon, OpusClient, OrbitDriver, RunSummary, TextAnalyzer,
    WikipediaClient, WiktionaryClient,
};

/// Config file used when `TRACEBACK_CONFIG` is unset.
const DEFAULT_CONFIG: &str = "traceback.toml";

/// Exit status when the report was written but some animations failed.
const PARTIAL_FAILURE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(summary) if summary.has_failures() => ExitCode::from(PARTIAL_FAILURE),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<RunSummary> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = read_config()?;
    validate_config(&config).context("Configuration validation failed")?;
    info!("Output directory: {:?}", config.output.directory);

    let orbits = load_orbits(&config.input.orbits)
        .with_context(|| format!("Failed to load orbits from {:?}", config.input.orbits))?;
    info!("Loaded {} orbits", orbits.len());

    let opus = Arc::new(OpusClient::new(&config.opus).context("Failed to create OPUS client")?);
    let imagery = ImageryCoordinator::new(
        opus.clone(),
        opus.clone(),
        GifAssembler::new(&config.animation),
        opus.base_url(),
    );

    let mut driver = OrbitDriver::new(&config.output, imagery);
    if config.text.enabled {
        driver = driver.with_text_analyzer(build_text_analyzer(&config)?);
    } else {
        info!("Text analysis disabled");
    }

    let summary = driver.run(&orbits).await.context("Failed to write report")?;

    if summary.has_failures() {
        warn!(
            "{} instrument animation(s) failed; see {:?}",
            summary.failed_units(),
            summary.report_path
        );
    }

    Ok(summary)
}

fn read_config() -> Result<Config> {
    let config_path = match std::env::var("TRACEBACK_CONFIG") {
        Ok(path) => PathBuf::from(path),
        Err(_) => {
            let default = PathBuf::from(DEFAULT_CONFIG);
            if !default.exists() {
                info!("No {} found, using defaults and environment", DEFAULT_CONFIG);
                return load_config_from_env().context("Failed to load configuration");
            }
            default
        }
    };

    info!("Loading configuration from {:?}", config_path);
    load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))
}

fn build_text_analyzer(config: &Config) -> Result<TextAnalyzer> {
    let encyclopedia = Arc::new(
        WikipediaClient::new(&config.text).context("Failed to create Wikipedia client")?,
    );
    let dictionary = Arc::new(
        WiktionaryClient::new(&config.text).context("Failed to create Wiktionary client")?,
    );

    let lexicon = match &config.text.word_list {
        Some(path) => match Lexicon::from_path(path) {
            Ok(lexicon) => {
                info!("Loaded {} words from {:?}", lexicon.len(), path);
                lexicon
            }
            Err(e) => {
                warn!("Could not read word list {:?}: {}", path, e);
                Lexicon::empty()
            }
        },
        None => Lexicon::empty(),
    };

    Ok(TextAnalyzer::new(encyclopedia, dictionary)
        .with_lexicon(lexicon)
        .with_summary_sentences(config.text.summary_sentences))
}
