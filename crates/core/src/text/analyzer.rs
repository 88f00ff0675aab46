//! Notes analyzer: extraction, cache checks and reference lookups.

use std::sync::Arc;

use tracing::debug;

use crate::report::{escape_html, ReportLog};

use super::cache::TermCache;
use super::extractor::CapitalisedPhraseExtractor;
use super::lexicon::Lexicon;
use super::traits::{Dictionary, Encyclopedia, EntityExtractor};
use super::types::{EntityReport, Resolution, TextAnalysis};

const DEFAULT_SUMMARY_SENTENCES: usize = 10;

/// Explains the named entities of orbit notes.
pub struct TextAnalyzer {
    extractor: Box<dyn EntityExtractor>,
    lexicon: Lexicon,
    encyclopedia: Arc<dyn Encyclopedia>,
    dictionary: Arc<dyn Dictionary>,
    summary_sentences: usize,
}

impl TextAnalyzer {
    /// Create an analyzer with the capitalised-phrase extractor and an empty lexicon.
    pub fn new(encyclopedia: Arc<dyn Encyclopedia>, dictionary: Arc<dyn Dictionary>) -> Self {
        Self {
            extractor: Box::new(CapitalisedPhraseExtractor::new()),
            lexicon: Lexicon::empty(),
            encyclopedia,
            dictionary,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
        }
    }

    pub fn with_extractor(mut self, extractor: Box<dyn EntityExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_summary_sentences(mut self, sentences: usize) -> Self {
        self.summary_sentences = sentences;
        self
    }

    /// Analyse `text`, updating `cache` and logging findings to `log`.
    ///
    /// Lookup failures are logged, never returned.
    pub async fn analyse(&self, text: &str, cache: &mut TermCache, log: &ReportLog) -> TextAnalysis {
        let log = log.scoped("text");
        log.debug(format!(
            "Analysing orbit text with {}",
            self.extractor.name()
        ));

        let mut analysis = TextAnalysis::default();

        for entity in self.extractor.extract(text) {
            log.debug(format!("Found {}", escape_html(&entity)));
            let resolution = self.resolve(&entity, cache, &log).await;
            analysis.entities.push(EntityReport { entity, resolution });
        }

        debug!(
            entities = analysis.entities.len(),
            known = cache.known_count(),
            unknown = cache.unknown_count(),
            "Text analysis complete"
        );

        analysis
    }

    async fn resolve(&self, entity: &str, cache: &mut TermCache, log: &ReportLog) -> Resolution {
        let term = entity.to_lowercase();

        if cache.is_known(&term) || self.lexicon.contains(&term) {
            log.debug(format!(
                "I know what {} means, I have seen it before",
                escape_html(entity)
            ));
            return Resolution::AlreadyKnown;
        }
        if cache.is_unknown(&term) {
            log.debug(format!(
                "I have seen {} before but can't work out what it means",
                escape_html(entity)
            ));
            return Resolution::PreviouslyUnresolved;
        }

        log.debug(format!(
            "Searching {} for {}",
            self.encyclopedia.name(),
            escape_html(&term)
        ));
        match self
            .encyclopedia
            .summary(&term, self.summary_sentences)
            .await
        {
            Ok(summary) => {
                log.info(format!(
                    "Found summary information for {}: {}",
                    escape_html(&term),
                    escape_html(&summary)
                ));
                cache.mark_known(&term);
                return Resolution::Encyclopedia(summary);
            }
            Err(e) => {
                log.error(format!(
                    "Encountered an error searching {} for {}: {}",
                    self.encyclopedia.name(),
                    escape_html(&term),
                    escape_html(&e.to_string())
                ));
                if e.is_definitive() {
                    cache.mark_unknown(&term);
                }
            }
        }

        log.debug(format!(
            "Searching {} for {}",
            self.dictionary.name(),
            escape_html(&term)
        ));
        match self.dictionary.definitions(&term).await {
            Ok(definitions) if !definitions.is_empty() => {
                log.info(format!(
                    "Found definitions for {}: {}",
                    escape_html(&term),
                    escape_html(&format!("{:?}", definitions))
                ));
                cache.mark_known(&term);
                Resolution::Dictionary(definitions)
            }
            Ok(_) => {
                log.info(format!(
                    "Found nothing in {} for {}",
                    self.dictionary.name(),
                    escape_html(&term)
                ));
                cache.mark_unknown(&term);
                Resolution::Unresolved
            }
            Err(e) => {
                log.error(format!(
                    "Encountered an error searching {} for {}: {}",
                    self.dictionary.name(),
                    escape_html(&term),
                    escape_html(&e.to_string())
                ));
                Resolution::Unresolved
            }
        }
    }
}
