use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub opus: OpusConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub text: TextConfig,
}

/// Where orbit records are read from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default = "default_orbits_path")]
    pub orbits: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            orbits: default_orbits_path(),
        }
    }
}

fn default_orbits_path() -> PathBuf {
    PathBuf::from("orbits.json")
}

/// Where orbit directories and the report page are written
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,
    /// Report page file name, relative to `directory`
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            report_file: default_report_file(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_report_file() -> String {
    "app.html".to_string()
}

/// OPUS planetary-data API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpusConfig {
    /// Image metadata endpoint; query parameters are appended to it
    #[serde(default = "default_opus_url")]
    pub base_url: String,
    /// Request timeout in seconds, applied to metadata and image downloads
    #[serde(default = "default_opus_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for OpusConfig {
    fn default() -> Self {
        Self {
            base_url: default_opus_url(),
            timeout_secs: default_opus_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_opus_url() -> String {
    "https://tools.pds-rings.seti.org/opus/api/images/small.json".to_string()
}

fn default_opus_timeout() -> u64 {
    60
}

pub(crate) fn default_user_agent() -> String {
    format!(
        "CassiniTraceback/{} ( https://github.com/cassini-traceback )",
        env!("CARGO_PKG_VERSION")
    )
}

/// GIF assembly configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnimationConfig {
    /// Delay between frames in milliseconds
    #[serde(default = "default_frame_delay")]
    pub frame_delay_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: default_frame_delay(),
        }
    }
}

fn default_frame_delay() -> u32 {
    100
}

/// Orbit notes analysis configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextConfig {
    /// Disable to skip entity lookups entirely
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Newline separated list of common words treated as already known
    #[serde(default)]
    pub word_list: Option<PathBuf>,
    #[serde(default = "default_wikipedia_url")]
    pub wikipedia_url: String,
    #[serde(default = "default_wiktionary_url")]
    pub wiktionary_url: String,
    /// Number of sentences kept from an encyclopedia summary
    #[serde(default = "default_sentences")]
    pub summary_sentences: usize,
    #[serde(default = "default_lookup_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            word_list: None,
            wikipedia_url: default_wikipedia_url(),
            wiktionary_url: default_wiktionary_url(),
            summary_sentences: default_sentences(),
            timeout_secs: default_lookup_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_wikipedia_url() -> String {
    "https://en.wikipedia.org/api/rest_v1".to_string()
}

fn default_wiktionary_url() -> String {
    "https://en.wiktionary.org/api/rest_v1".to_string()
}

fn default_sentences() -> usize {
    10
}

fn default_lookup_timeout() -> u64 {
    30
}

impl Config {
    /// Path of the final report page
    pub fn report_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.report_file)
    }
}
