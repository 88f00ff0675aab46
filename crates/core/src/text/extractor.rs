//! Capitalised-phrase entity extraction.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::traits::EntityExtractor;

static PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][A-Za-z0-9'-]*(?:[ \t]+[A-Z][A-Za-z0-9'-]*)*").expect("valid phrase regex")
});

/// Words that start a capitalised run only because they open a sentence.
const LEADING_FILLERS: &[&str] = &[
    "A", "An", "And", "After", "At", "Before", "But", "During", "For", "From", "In", "It", "Its",
    "Of", "On", "The", "Then", "These", "This", "Those", "While", "With",
];

/// Treats each run of capitalised or upper-case words as one entity.
///
/// `Cassini+ISS flyby of Titan` yields `Cassini`, `ISS` and `Titan`.
/// Sentence-opening filler words are dropped from the front of a run, and
/// single-letter leftovers are ignored.
#[derive(Debug, Clone, Default)]
pub struct CapitalisedPhraseExtractor;

impl CapitalisedPhraseExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl EntityExtractor for CapitalisedPhraseExtractor {
    fn name(&self) -> &str {
        "capitalised-phrase"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        let mut entities: Vec<String> = Vec::new();

        for found in PHRASE.find_iter(text) {
            let words: Vec<&str> = found
                .as_str()
                .split_whitespace()
                .skip_while(|w| LEADING_FILLERS.contains(w))
                .collect();
            if words.is_empty() {
                continue;
            }

            let entity = words.join(" ");
            if entity.chars().count() < 2 || entities.contains(&entity) {
                continue;
            }
            entities.push(entity);
        }

        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        CapitalisedPhraseExtractor::new().extract(text)
    }

    #[test]
    fn test_splits_on_plus() {
        assert_eq!(extract("Cassini+ISS flyby of Titan"), vec!["Cassini", "ISS", "Titan"]);
    }

    #[test]
    fn test_multi_word_phrase() {
        assert_eq!(
            extract("release of the Huygens Probe toward Titan"),
            vec!["Huygens Probe", "Titan"]
        );
    }

    #[test]
    fn test_leading_filler_dropped() {
        assert_eq!(extract("The Cassini spacecraft. During SOI"), vec!["Cassini", "SOI"]);
    }

    #[test]
    fn test_deduplicates_in_order() {
        assert_eq!(extract("Titan, Rhea, Titan again"), vec!["Titan", "Rhea"]);
    }

    #[test]
    fn test_single_letters_ignored() {
        assert!(extract("A quiet orbit").is_empty());
        assert!(extract("no entities here").is_empty());
    }
}
