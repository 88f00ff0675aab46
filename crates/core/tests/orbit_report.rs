//! End-to-end report tests.
//!
//! These tests run the orbit driver over several orbits with mock OPUS,
//! frame, encyclopedia and dictionary sources and check the report page and
//! the per-orbit directories it leaves behind.

use std::sync::Arc;

use tempfile::TempDir;

use traceback_core::{
    config::OutputConfig,
    testing::{fixtures, MockDictionary, MockEncyclopedia, MockFrameSource, MockMetadataSource, MockResponse},
    GifAssembler, ImageryCoordinator, Instrument, OrbitDriver, Resolution, TextAnalyzer,
};

/// Test helper to create all dependencies for a driver run.
struct TestHarness {
    metadata: Arc<MockMetadataSource>,
    frames: Arc<MockFrameSource>,
    encyclopedia: Arc<MockEncyclopedia>,
    dictionary: Arc<MockDictionary>,
    temp_dir: TempDir,
}

impl TestHarness {
    fn new() -> Self {
        Self {
            metadata: Arc::new(MockMetadataSource::new()),
            frames: Arc::new(MockFrameSource::new()),
            encyclopedia: Arc::new(MockEncyclopedia::new()),
            dictionary: Arc::new(MockDictionary::new()),
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn driver(&self) -> OrbitDriver {
        let output = OutputConfig {
            directory: self.temp_dir.path().join("out"),
            report_file: "app.html".to_string(),
        };
        let imagery = ImageryCoordinator::new(
            self.metadata.clone(),
            self.frames.clone(),
            GifAssembler::with_defaults(),
            "https://opus.test/small.json",
        );
        let text = TextAnalyzer::new(self.encyclopedia.clone(), self.dictionary.clone())
            .with_summary_sentences(3);

        OrbitDriver::new(&output, imagery).with_text_analyzer(text)
    }

    async fn serve_iss(&self) {
        let urls = fixtures::frame_urls("https://img.test/iss", 2);
        for url in &urls {
            self.frames
                .set_frame(url.clone(), fixtures::solid_png([200, 100, 50]))
                .await;
        }
        self.metadata
            .set_response(Instrument::Iss, MockResponse::Urls(urls))
            .await;
    }
}

#[tokio::test]
async fn test_full_run_writes_report_and_animations() {
    let h = TestHarness::new();
    h.serve_iss().await;
    h.encyclopedia
        .set_summary("titan", "Titan is the largest moon of Saturn.")
        .await;
    h.dictionary
        .set_definitions("cassini", vec!["A space probe sent to Saturn.".to_string()])
        .await;

    let orbits = vec![
        fixtures::orbit(1, "Cassini+ISS flyby of Titan"),
        fixtures::orbit(2, "Titan again with ISS and VIMS"),
    ];
    let summary = h.driver().run(&orbits).await.expect("Run failed");

    let out = h.temp_dir.path().join("out");
    assert_eq!(summary.report_path, out.join("app.html"));
    assert_eq!(summary.animations_written(), 2);
    assert!(!summary.has_failures());
    assert!(out.join("1").join("ISS.gif").exists());
    assert!(out.join("2").join("ISS.gif").exists());
    assert!(!out.join("2").join("VIMS.gif").exists());
    assert!(out.join("1").join("log.html").exists());

    let page = std::fs::read_to_string(&summary.report_path).unwrap();
    assert!(page.contains("Cassini Traceback"));
    assert!(page.contains("Orbit 1 &mdash; Jan 1–2"));
    assert!(page.contains("<img src=\"1/ISS.gif\"/>"));
    assert!(page.contains("<img src=\"2/ISS.gif\"/>"));
    assert!(page.contains("Found summary information for titan"));
    assert!(page.find("Orbit 1").unwrap() < page.find("Orbit 2").unwrap());
}

#[tokio::test]
async fn test_term_cache_spans_orbits() {
    let h = TestHarness::new();
    h.encyclopedia
        .set_summary("titan", "Titan is the largest moon of Saturn.")
        .await;

    let orbits = vec![
        fixtures::orbit(1, "Cassini+ISS flyby of Titan"),
        fixtures::orbit(2, "Titan again with ISS and VIMS"),
    ];
    let summary = h.driver().run(&orbits).await.expect("Run failed");

    assert_eq!(
        h.encyclopedia.queries().await,
        vec!["cassini", "iss", "titan", "vims"]
    );
    assert_eq!(h.encyclopedia.last_sentences().await, Some(3));

    let first = summary.orbits[0].text.as_ref().expect("text analysis missing");
    assert!(matches!(
        first.resolution_of("Titan"),
        Some(Resolution::Encyclopedia(_))
    ));
    assert_eq!(first.resolution_of("ISS"), Some(&Resolution::Unresolved));

    let second = summary.orbits[1].text.as_ref().expect("text analysis missing");
    assert_eq!(second.resolution_of("Titan"), Some(&Resolution::AlreadyKnown));
    assert_eq!(
        second.resolution_of("ISS"),
        Some(&Resolution::PreviouslyUnresolved)
    );
}

#[tokio::test]
async fn test_failed_animation_still_writes_report() {
    let h = TestHarness::new();
    h.serve_iss().await;
    h.frames.fail_url("https://img.test/iss/frame-2.png").await;

    let orbits = vec![fixtures::orbit(5, "ISS")];
    let summary = h.driver().run(&orbits).await.expect("Run failed");

    assert!(summary.has_failures());
    assert_eq!(summary.failed_units(), 1);
    assert_eq!(summary.animations_written(), 0);

    let orbit_dir = h.temp_dir.path().join("out").join("5");
    assert!(!orbit_dir.join("ISS.gif").exists());
    assert!(!orbit_dir.join("ISS.gif.part").exists());

    let page = std::fs::read_to_string(&summary.report_path).unwrap();
    assert!(page.contains("Failed to assemble ISS images"));
    assert!(page.contains("</section>"));
}
