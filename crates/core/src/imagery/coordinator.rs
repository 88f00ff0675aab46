//! Per-orbit fan-out of instrument imagery units.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::opus::{build_query_url, collect_image_urls, MetadataSource};
use crate::orbit::{Instrument, Orbit};
use crate::report::{escape_html, figure, ReportLog};

use super::assembler::GifAssembler;
use super::traits::FrameSource;
use super::types::{ImageryReport, UnitOutcome, UnitStatus};

/// Runs one fetch-and-assemble unit per instrument mentioned in an orbit.
pub struct ImageryCoordinator {
    metadata: Arc<dyn MetadataSource>,
    frames: Arc<dyn FrameSource>,
    assembler: GifAssembler,
    base_url: String,
}

impl ImageryCoordinator {
    pub fn new(
        metadata: Arc<dyn MetadataSource>,
        frames: Arc<dyn FrameSource>,
        assembler: GifAssembler,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            metadata,
            frames,
            assembler,
            base_url: base_url.into(),
        }
    }

    /// Fetch and assemble imagery for every instrument in `orbit.notes`.
    ///
    /// Animations are written to `orbit_dir/<ACRONYM>.gif`. All units start
    /// together and this returns once every unit has finished, whatever the
    /// individual results. With no matching instrument nothing is requested.
    pub async fn run(&self, orbit: &Orbit, orbit_dir: &Path, log: &ReportLog) -> ImageryReport {
        let instruments = orbit.instruments();
        if instruments.is_empty() {
            debug!(orbit = orbit.number, "No instruments mentioned, skipping imagery");
            return ImageryReport::default();
        }

        let log = log.scoped("imagery");
        info!(
            orbit = orbit.number,
            units = instruments.len(),
            "Starting imagery units"
        );

        let units = instruments.into_iter().map(|instrument| {
            let query_url = build_query_url(&self.base_url, instrument, &orbit.start, &orbit.finish);
            let target = orbit_dir.join(instrument.file_name());
            self.run_unit(orbit, instrument, query_url, target, &log)
        });

        let outcomes = join_all(units).await;

        ImageryReport { outcomes }
    }

    async fn run_unit(
        &self,
        orbit: &Orbit,
        instrument: Instrument,
        query_url: String,
        target: PathBuf,
        log: &ReportLog,
    ) -> UnitOutcome {
        let urls = collect_image_urls(self.metadata.as_ref(), &query_url, log).await;

        let status = if urls.is_empty() {
            UnitStatus::NoImages
        } else {
            log.debug(format!("Writing images to {}", target.display()));
            match self
                .assembler
                .assemble(self.frames.as_ref(), &urls, &target)
                .await
            {
                Ok(Some(animation)) => {
                    let src = format!("{}/{}", orbit.directory_name(), instrument.file_name());
                    log.debug(figure(&src, instrument, &orbit.start, &orbit.finish));
                    UnitStatus::Written(animation)
                }
                Ok(None) => UnitStatus::NoImages,
                Err(e) => {
                    warn!(
                        orbit = orbit.number,
                        instrument = %instrument,
                        "Imagery unit failed: {}",
                        e
                    );
                    log.error(format!(
                        "Failed to assemble {} images into {}: {}",
                        instrument,
                        escape_html(&target.display().to_string()),
                        escape_html(&e.to_string())
                    ));
                    UnitStatus::Failed {
                        reason: e.to_string(),
                    }
                }
            }
        };

        if !matches!(status, UnitStatus::Written(_)) {
            remove_stale(&target, log).await;
        }

        UnitOutcome {
            instrument,
            query_url,
            status,
        }
    }
}

/// Remove an animation left by an earlier run that this run did not replace.
async fn remove_stale(target: &Path, log: &ReportLog) {
    match tokio::fs::remove_file(target).await {
        Ok(()) => log.info(format!(
            "Removed stale animation {}",
            escape_html(&target.display().to_string())
        )),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove stale animation {}: {}", target.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, MockFrameSource, MockMetadataSource, MockResponse};
    use tempfile::TempDir;

    struct Harness {
        coordinator: ImageryCoordinator,
        metadata: Arc<MockMetadataSource>,
        frames: Arc<MockFrameSource>,
        dir: TempDir,
        log: ReportLog,
    }

    fn harness() -> Harness {
        let dir = TempDir::new().unwrap();
        let log = ReportLog::open(&dir.path().join("log.html")).unwrap();
        let metadata = Arc::new(MockMetadataSource::new());
        let frames = Arc::new(MockFrameSource::new());
        let coordinator = ImageryCoordinator::new(
            metadata.clone(),
            frames.clone(),
            GifAssembler::with_defaults(),
            "http://opus.test/small.json",
        );
        Harness {
            coordinator,
            metadata,
            frames,
            dir,
            log,
        }
    }

    #[tokio::test]
    async fn test_no_instruments_no_requests() {
        let h = harness();
        let orbit = fixtures::orbit(1, "Distant Saturn observations");

        let report = h.coordinator.run(&orbit, h.dir.path(), &h.log).await;

        assert!(report.outcomes.is_empty());
        assert_eq!(h.metadata.request_count().await, 0);
        assert!(h.frames.fetched_urls().await.is_empty());
    }

    #[tokio::test]
    async fn test_written_unit_logs_figure() {
        let h = harness();
        h.frames.set_frame("http://img/a.png", fixtures::solid_png([1, 2, 3])).await;
        h.metadata
            .set_response(Instrument::Iss, MockResponse::urls(["http://img/a.png"]))
            .await;
        let orbit = fixtures::orbit(7, "Cassini+ISS flyby");

        let report = h.coordinator.run(&orbit, h.dir.path(), &h.log).await;

        assert_eq!(report.instruments(), vec![Instrument::Iss]);
        assert_eq!(report.animations().count(), 1);
        let log = std::fs::read_to_string(h.log.path()).unwrap();
        assert!(log.contains("<img src=\"7/ISS.gif\"/>"));
        assert!(log.contains("imagery     : DEBUG"));
    }

    #[tokio::test]
    async fn test_assembly_failure_is_isolated() {
        let h = harness();
        h.frames.set_frame("http://img/ok.png", fixtures::solid_png([9, 9, 9])).await;
        h.frames.fail_url("http://img/broken.png").await;
        h.metadata
            .set_response(Instrument::Iss, MockResponse::urls(["http://img/broken.png"]))
            .await;
        h.metadata
            .set_response(Instrument::Vims, MockResponse::urls(["http://img/ok.png"]))
            .await;
        let orbit = fixtures::orbit(2, "ISS and VIMS");

        let report = h.coordinator.run(&orbit, h.dir.path(), &h.log).await;

        assert_eq!(report.failures(), 1);
        assert!(matches!(report.outcomes[0].status, UnitStatus::Failed { .. }));
        assert!(matches!(report.outcomes[1].status, UnitStatus::Written(_)));
        assert!(!h.dir.path().join("ISS.gif").exists());
        assert!(h.dir.path().join("VIMS.gif").exists());
    }

    #[tokio::test]
    async fn test_unreplaced_animation_is_removed() {
        let h = harness();
        std::fs::write(h.dir.path().join("UVIS.gif"), b"from an earlier run").unwrap();
        h.metadata
            .set_response(Instrument::Uvis, MockResponse::Status(503))
            .await;
        let orbit = fixtures::orbit(5, "UVIS occultation");

        let report = h.coordinator.run(&orbit, h.dir.path(), &h.log).await;

        assert_eq!(report.outcomes[0].status, UnitStatus::NoImages);
        assert!(!h.dir.path().join("UVIS.gif").exists());
        let log = std::fs::read_to_string(h.log.path()).unwrap();
        assert!(log.contains("Removed stale animation"));
    }

    #[tokio::test]
    async fn test_failure_message_is_escaped() {
        let h = harness();
        h.frames.fail_url("http://img/a<b>&c.png").await;
        h.metadata
            .set_response(Instrument::Cirs, MockResponse::urls(["http://img/a<b>&c.png"]))
            .await;
        let orbit = fixtures::orbit(6, "CIRS scan");

        h.coordinator.run(&orbit, h.dir.path(), &h.log).await;

        let log = std::fs::read_to_string(h.log.path()).unwrap();
        assert!(log.contains("Failed to assemble CIRS images"));
        assert!(log.contains("a&lt;b&gt;&amp;c.png: simulated failure"));
        assert!(!log.contains("a<b>"));
    }
}
