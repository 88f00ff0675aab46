use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Request timeouts are not 0
/// - At least one summary sentence is requested
/// - Report file name is not empty
/// - Remote endpoints are http(s) URLs
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.opus.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "opus.timeout_secs cannot be 0".to_string(),
        ));
    }
    if config.text.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "text.timeout_secs cannot be 0".to_string(),
        ));
    }
    if config.text.summary_sentences == 0 {
        return Err(ConfigError::ValidationError(
            "text.summary_sentences cannot be 0".to_string(),
        ));
    }
    if config.output.report_file.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "output.report_file cannot be empty".to_string(),
        ));
    }

    for (key, url) in [
        ("opus.base_url", &config.opus.base_url),
        ("text.wikipedia_url", &config.text.wikipedia_url),
        ("text.wiktionary_url", &config.text.wiktionary_url),
    ] {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be an http(s) URL, got '{}'",
                key, url
            )));
        }
    }

    Ok(())
}
