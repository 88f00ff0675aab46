//! Wiktionary REST definition client.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::TextConfig;

use super::traits::{Dictionary, LookupError};

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Language section read from definition responses.
const LANGUAGE: &str = "en";

/// Wiktionary definition client.
pub struct WiktionaryClient {
    client: Client,
    base_url: String,
}

impl WiktionaryClient {
    pub fn new(config: &TextConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.wiktionary_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Dictionary for WiktionaryClient {
    fn name(&self) -> &str {
        "wiktionary"
    }

    async fn definitions(&self, term: &str) -> Result<Vec<String>, LookupError> {
        let url = format!(
            "{}/page/definition/{}",
            self.base_url,
            urlencoding::encode(term)
        );

        debug!("Wiktionary definitions: term='{}'", term);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == 404 {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::ApiError {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let usages: HashMap<String, Vec<WtUsage>> = response.json().await.map_err(|e| {
            LookupError::ParseError(format!("Failed to parse definition response: {}", e))
        })?;

        Ok(english_definitions(usages))
    }
}

fn english_definitions(mut usages: HashMap<String, Vec<WtUsage>>) -> Vec<String> {
    usages
        .remove(LANGUAGE)
        .unwrap_or_default()
        .into_iter()
        .flat_map(|usage| usage.definitions)
        .map(|d| strip_tags(&d.definition))
        .filter(|d| !d.is_empty())
        .collect()
}

/// Remove HTML tags and surrounding whitespace.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").trim().to_string()
}

// ============================================================================
// Wiktionary API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct WtUsage {
    #[serde(default)]
    definitions: Vec<WtDefinition>,
}

#[derive(Debug, Deserialize)]
struct WtDefinition {
    #[serde(default)]
    definition: String,
}
