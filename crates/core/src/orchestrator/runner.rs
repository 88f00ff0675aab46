//! Sequential orbit processing and report page assembly.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::OutputConfig;
use crate::imagery::ImageryCoordinator;
use crate::orbit::{format_date_range, Orbit};
use crate::report::{
    escape_html, orbit_intro, render_page, ReportError, ReportLog, SECTION_CLOSE,
};
use crate::text::{TermCache, TextAnalyzer};

use super::types::{OrbitOutcome, RunSummary};

/// File name of each orbit's report fragment.
pub const FRAGMENT_FILE: &str = "log.html";

/// Drives orbits through text analysis and imagery, one at a time.
pub struct OrbitDriver {
    output_dir: PathBuf,
    report_file: String,
    imagery: ImageryCoordinator,
    text: Option<TextAnalyzer>,
}

impl OrbitDriver {
    /// Create a driver without text analysis.
    pub fn new(output: &OutputConfig, imagery: ImageryCoordinator) -> Self {
        Self {
            output_dir: output.directory.clone(),
            report_file: output.report_file.clone(),
            imagery,
            text: None,
        }
    }

    /// Enable text analysis of orbit notes.
    pub fn with_text_analyzer(mut self, analyzer: TextAnalyzer) -> Self {
        self.text = Some(analyzer);
        self
    }

    pub fn orbit_dir(&self, orbit: &Orbit) -> PathBuf {
        self.output_dir.join(orbit.directory_name())
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file)
    }

    /// Process every orbit in input order, then write the report page.
    pub async fn run(&self, orbits: &[Orbit]) -> Result<RunSummary, ReportError> {
        create_dir(&self.output_dir).await?;

        let mut cache = TermCache::new();
        let mut outcomes = Vec::with_capacity(orbits.len());
        let mut body = String::new();

        for orbit in orbits {
            info!(orbit = orbit.number, "Processing orbit");
            let outcome = self.analyse_orbit(orbit, &mut cache).await?;

            let fragment = tokio::fs::read_to_string(&outcome.fragment)
                .await
                .map_err(|source| ReportError::ReadFailed {
                    path: outcome.fragment.clone(),
                    source,
                })?;
            body.push_str(&fragment);
            outcomes.push(outcome);
        }

        let report_path = self.report_path();
        tokio::fs::write(&report_path, render_page(&body))
            .await
            .map_err(|e| ReportError::write_failed(&report_path, e))?;

        let summary = RunSummary {
            report_path,
            orbits: outcomes,
        };
        info!(
            orbits = summary.orbits.len(),
            animations = summary.animations_written(),
            failed_units = summary.failed_units(),
            report = %summary.report_path.display(),
            "Report written"
        );

        Ok(summary)
    }

    /// Process one orbit into its directory and report fragment.
    ///
    /// The fragment is rewritten from scratch on every call.
    pub async fn analyse_orbit(
        &self,
        orbit: &Orbit,
        cache: &mut TermCache,
    ) -> Result<OrbitOutcome, ReportError> {
        let dir = self.orbit_dir(orbit);
        create_dir(&dir).await?;

        let (date_range, date_error) = match format_date_range(&orbit.start, &orbit.finish) {
            Ok(range) => (range, None),
            Err(e) => (format!("{}–{}", orbit.start, orbit.finish), Some(e)),
        };

        let fragment = dir.join(FRAGMENT_FILE);
        tokio::fs::write(&fragment, orbit_intro(orbit.number, &date_range, &orbit.notes))
            .await
            .map_err(|e| ReportError::write_failed(&fragment, e))?;

        let log = ReportLog::open(&fragment)?;
        let orbit_log = log.scoped("orbit");
        if let Some(e) = date_error {
            warn!(orbit = orbit.number, "{}", e);
            orbit_log.warn(format!(
                "Could not format orbit dates: {}",
                escape_html(&e.to_string())
            ));
        }

        orbit_log.debug(format!("Analysing the text for orbit {}", orbit.number));
        let text = match &self.text {
            Some(analyzer) => Some(analyzer.analyse(&orbit.notes, cache, &log).await),
            None => None,
        };

        let imagery = self.imagery.run(orbit, &dir, &log).await;

        log.append_html(SECTION_CLOSE);

        Ok(OrbitOutcome {
            number: orbit.number,
            fragment,
            text,
            imagery,
        })
    }
}

async fn create_dir(path: &Path) -> Result<(), ReportError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| ReportError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source,
        })
}
