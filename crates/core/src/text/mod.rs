//! Orbit notes analysis: find named entities and look up what they mean.
//!
//! Each entity is checked against what the run already learned (the
//! [`TermCache`]) and a lexicon of common words. Anything still unexplained
//! is looked up in an [`Encyclopedia`] and, failing that, a [`Dictionary`].
//! Findings go to the orbit's report fragment.
//!
//! # Example
//!
//! ```ignore
//! use traceback_core::text::{TextAnalyzer, TermCache, WikipediaClient, WiktionaryClient};
//!
//! let analyzer = TextAnalyzer::new(Arc::new(wikipedia), Arc::new(wiktionary))
//!     .with_lexicon(Lexicon::from_path(Path::new("/usr/share/dict/words"))?);
//!
//! let mut cache = TermCache::new();
//! let analysis = analyzer.analyse(&orbit.notes, &mut cache, &log).await;
//! ```

mod analyzer;
mod cache;
mod extractor;
mod lexicon;
mod traits;
mod types;
mod wikipedia;
mod wiktionary;

pub use analyzer::TextAnalyzer;
pub use cache::TermCache;
pub use extractor::CapitalisedPhraseExtractor;
pub use lexicon::Lexicon;
pub use traits::{Dictionary, Encyclopedia, EntityExtractor, LookupError};
pub use types::{EntityReport, Resolution, TextAnalysis};
pub use wikipedia::{first_sentences, WikipediaClient};
pub use wiktionary::{strip_tags, WiktionaryClient};
