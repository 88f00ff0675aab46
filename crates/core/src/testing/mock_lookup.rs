//! Mock encyclopedia and dictionary for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use crate::text::{Dictionary, Encyclopedia, LookupError};

/// Mock implementation of the Encyclopedia trait.
///
/// Unconfigured terms answer [`LookupError::NotFound`].
#[derive(Debug, Default)]
pub struct MockEncyclopedia {
    summaries: RwLock<HashMap<String, String>>,
    ambiguous: RwLock<HashSet<String>>,
    errors: RwLock<HashMap<String, LookupError>>,
    queries: RwLock<Vec<String>>,
    last_sentences: RwLock<Option<usize>>,
}

impl MockEncyclopedia {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_summary(&self, term: &str, summary: &str) {
        self.summaries
            .write()
            .await
            .insert(term.to_string(), summary.to_string());
    }

    /// Make `term` a disambiguation page.
    pub async fn set_ambiguous(&self, term: &str) {
        self.ambiguous.write().await.insert(term.to_string());
    }

    /// Make the next lookup of `term` fail with `error`.
    pub async fn set_error(&self, term: &str, error: LookupError) {
        self.errors.write().await.insert(term.to_string(), error);
    }

    /// Looked up terms, in order.
    pub async fn queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }

    /// Sentence count passed with the most recent lookup.
    pub async fn last_sentences(&self) -> Option<usize> {
        *self.last_sentences.read().await
    }
}

#[async_trait]
impl Encyclopedia for MockEncyclopedia {
    fn name(&self) -> &str {
        "mock-encyclopedia"
    }

    async fn summary(&self, term: &str, sentences: usize) -> Result<String, LookupError> {
        self.queries.write().await.push(term.to_string());
        *self.last_sentences.write().await = Some(sentences);

        if let Some(error) = self.errors.write().await.remove(term) {
            return Err(error);
        }
        if self.ambiguous.read().await.contains(term) {
            return Err(LookupError::Ambiguous(term.to_string()));
        }
        self.summaries
            .read()
            .await
            .get(term)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(term.to_string()))
    }
}

/// Mock implementation of the Dictionary trait.
///
/// Unconfigured terms have no definitions.
#[derive(Debug, Default)]
pub struct MockDictionary {
    definitions: RwLock<HashMap<String, Vec<String>>>,
    errors: RwLock<HashMap<String, LookupError>>,
    queries: RwLock<Vec<String>>,
}

impl MockDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_definitions(&self, term: &str, definitions: Vec<String>) {
        self.definitions
            .write()
            .await
            .insert(term.to_string(), definitions);
    }

    /// Make the next lookup of `term` fail with `error`.
    pub async fn set_error(&self, term: &str, error: LookupError) {
        self.errors.write().await.insert(term.to_string(), error);
    }

    pub async fn queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }
}

#[async_trait]
impl Dictionary for MockDictionary {
    fn name(&self) -> &str {
        "mock-dictionary"
    }

    async fn definitions(&self, term: &str) -> Result<Vec<String>, LookupError> {
        self.queries.write().await.push(term.to_string());

        if let Some(error) = self.errors.write().await.remove(term) {
            return Err(error);
        }
        Ok(self
            .definitions
            .read()
            .await
            .get(term)
            .cloned()
            .unwrap_or_default())
    }
}
