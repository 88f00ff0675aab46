//! Wikipedia REST summary client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::TextConfig;

use super::traits::{Encyclopedia, LookupError};

/// Wikipedia page summary client.
pub struct WikipediaClient {
    client: Client,
    base_url: String,
}

impl WikipediaClient {
    pub fn new(config: &TextConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.wikipedia_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Encyclopedia for WikipediaClient {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn summary(&self, term: &str, sentences: usize) -> Result<String, LookupError> {
        let url = format!(
            "{}/page/summary/{}",
            self.base_url,
            urlencoding::encode(term)
        );

        debug!("Wikipedia summary: term='{}'", term);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == 404 {
            return Err(LookupError::NotFound(term.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::ApiError {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let page: WpSummary = response.json().await.map_err(|e| {
            LookupError::ParseError(format!("Failed to parse summary response: {}", e))
        })?;

        if page.page_type == "disambiguation" {
            return Err(LookupError::Ambiguous(term.to_string()));
        }

        let extract = page.extract.unwrap_or_default();
        if extract.trim().is_empty() {
            return Err(LookupError::NotFound(term.to_string()));
        }

        Ok(first_sentences(&extract, sentences))
    }
}

/// The first `count` sentences of `text`.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace or the end of
/// the text.
pub fn first_sentences(text: &str, count: usize) -> String {
    let mut seen = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = match chars.peek() {
            Some((_, next)) => next.is_whitespace(),
            None => true,
        };
        if at_boundary {
            seen += 1;
            if seen >= count {
                return text[..index + c.len_utf8()].trim().to_string();
            }
        }
    }

    text.trim().to_string()
}

// ============================================================================
// Wikipedia API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct WpSummary {
    #[serde(rename = "type", default)]
    page_type: String,
    #[serde(default)]
    extract: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sentences_truncates() {
        let text = "Titan is the largest moon of Saturn. It has a thick atmosphere! Is it habitable? Maybe.";
        assert_eq!(first_sentences(text, 1), "Titan is the largest moon of Saturn.");
        assert_eq!(
            first_sentences(text, 3),
            "Titan is the largest moon of Saturn. It has a thick atmosphere! Is it habitable?"
        );
    }

    #[test]
    fn test_first_sentences_ignores_inner_dots() {
        let text = "Launched in 1997 at 4.43 a.m. local time. Arrived 2004.";
        assert_eq!(first_sentences(text, 1), "Launched in 1997 at 4.43 a.m.");
    }

    #[test]
    fn test_first_sentences_shorter_text() {
        assert_eq!(first_sentences("  One sentence only  ", 10), "One sentence only");
    }

    #[test]
    fn test_summary_type_defaults() {
        let page: WpSummary = serde_json::from_str(r#"{"title": "Titan"}"#).unwrap();
        assert_eq!(page.page_type, "");
        assert!(page.extract.is_none());
    }
}
