//! Append-only HTML log bound to one orbit's report fragment.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, error, info, warn, Level};

use super::html::escape_html;
use super::ReportError;

struct Sink {
    path: PathBuf,
    file: Mutex<File>,
}

/// Writes log entries into a report fragment and mirrors them to `tracing`.
///
/// Cloning is cheap; clones share the same file. Every entry is written with
/// a single `write_all` under the lock, so entries from concurrent fan-out
/// units never interleave.
#[derive(Clone)]
pub struct ReportLog {
    target: &'static str,
    sink: Arc<Sink>,
}

impl ReportLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self, ReportError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| ReportError::write_failed(path, e))?;

        Ok(Self {
            target: "traceback",
            sink: Arc::new(Sink {
                path: path.to_path_buf(),
                file: Mutex::new(file),
            }),
        })
    }

    /// A handle writing to the same fragment under a different target name.
    pub fn scoped(&self, target: &'static str) -> Self {
        Self {
            target,
            sink: Arc::clone(&self.sink),
        }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn path(&self) -> &Path {
        &self.sink.path
    }

    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.record(Level::DEBUG, message.as_ref());
    }

    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.record(Level::INFO, message.as_ref());
    }

    #[track_caller]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.record(Level::WARN, message.as_ref());
    }

    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.record(Level::ERROR, message.as_ref());
    }

    /// Write one entry. `message` is HTML and is written as is.
    #[track_caller]
    pub fn record(&self, level: Level, message: &str) {
        let location = Location::caller();

        match level {
            Level::ERROR => error!(report = self.target, "{}", message),
            Level::WARN => warn!(report = self.target, "{}", message),
            Level::INFO => info!(report = self.target, "{}", message),
            _ => debug!(report = self.target, "{}", message),
        }

        let entry = format!(
            "<p class=\"traceback\">{:<12}: {:<8} {}</p><pre class=\"traceback\">{}:{}</pre>\n",
            self.target,
            level.as_str(),
            message,
            escape_html(location.file()),
            location.line()
        );
        self.write(entry.as_bytes());
    }

    /// Append raw markup outside of any log entry.
    pub fn append_html(&self, html: &str) {
        self.write(html.as_bytes());
    }

    fn write(&self, bytes: &[u8]) {
        let mut file = self
            .sink
            .file
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = file.write_all(bytes) {
            warn!(
                "Failed to write report entry to {}: {}",
                self.sink.path.display(),
                e
            );
        }
    }
}

impl std::fmt::Debug for ReportLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportLog")
            .field("target", &self.target)
            .field("path", &self.sink.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_entry_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.html");
        let log = ReportLog::open(&path).unwrap().scoped("orbit");

        log.debug("Analysing the text for orbit 7");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with(
            "<p class=\"traceback\">orbit       : DEBUG    Analysing the text for orbit 7</p>"
        ));
        assert!(contents.contains("<pre class=\"traceback\">"));
        assert!(contents.contains("log.rs:"));
    }

    #[test]
    fn test_appends_to_existing_fragment() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.html");
        std::fs::write(&path, "<section>").unwrap();

        let log = ReportLog::open(&path).unwrap();
        log.error("boom");
        log.append_html("</section>");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("<section><p class=\"traceback\">"));
        assert!(contents.contains("ERROR    boom"));
        assert!(contents.ends_with("</section>"));
    }

    #[test]
    fn test_scoped_handles_share_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.html");
        let log = ReportLog::open(&path).unwrap();
        let text = log.scoped("text");
        let imagery = log.scoped("imagery");

        text.info("one");
        imagery.warn("two");

        let contents = std::fs::read_to_string(&path).unwrap();
        let first = contents.find("text        : INFO     one").unwrap();
        let second = contents.find("imagery     : WARN     two").unwrap();
        assert!(first < second);
        assert_eq!(text.path(), imagery.path());
        assert_eq!(log.target(), "traceback");
        assert_eq!(text.target(), "text");
        assert_eq!(imagery.target(), "imagery");
    }

    #[test]
    fn test_open_in_missing_directory_fails() {
        let result = ReportLog::open(Path::new("/nonexistent/dir/log.html"));
        assert!(matches!(result, Err(ReportError::WriteFailed { .. })));
    }
}
