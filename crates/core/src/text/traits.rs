//! Traits for the text analysis collaborators.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a reference lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// No page exists for the term.
    #[error("No page found for '{0}'")]
    NotFound(String),

    /// The term names several pages.
    #[error("'{0}' may refer to several pages")]
    Ambiguous(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl LookupError {
    /// Whether the lookup answered authoritatively that it cannot explain the term.
    pub fn is_definitive(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Ambiguous(_))
    }
}

/// Finds candidate named entities in free text.
pub trait EntityExtractor: Send + Sync {
    /// Name of this extractor for logging.
    fn name(&self) -> &str;

    /// Entities in order of first appearance, without duplicates.
    fn extract(&self, text: &str) -> Vec<String>;
}

/// Source of short encyclopedic summaries.
#[async_trait]
pub trait Encyclopedia: Send + Sync {
    fn name(&self) -> &str;

    /// Summary of at most `sentences` sentences for `term`.
    async fn summary(&self, term: &str, sentences: usize) -> Result<String, LookupError>;
}

/// Source of word definitions.
#[async_trait]
pub trait Dictionary: Send + Sync {
    fn name(&self) -> &str;

    /// Definitions for `term`; empty when the dictionary has none.
    async fn definitions(&self, term: &str) -> Result<Vec<String>, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LookupError::Ambiguous("titan".to_string());
        assert_eq!(err.to_string(), "'titan' may refer to several pages");

        let err = LookupError::ApiError {
            status: 500,
            message: "oops".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 500 - oops");
    }

    #[test]
    fn test_is_definitive() {
        assert!(LookupError::NotFound("x".to_string()).is_definitive());
        assert!(LookupError::Ambiguous("x".to_string()).is_definitive());
        assert!(!LookupError::ParseError("x".to_string()).is_definitive());
    }
}
