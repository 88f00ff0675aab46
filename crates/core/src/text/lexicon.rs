//! Common-word lexicon.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

/// Lowercase set of words that need no lookup.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Read one word per line. Blank lines are ignored.
    pub fn from_reader(reader: impl BufRead) -> std::io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let word = line?.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// `term` must already be lowercase.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_reader_lowercases_and_skips_blanks() {
        let lexicon = Lexicon::from_reader(Cursor::new("Ring\n\n  moon \nSaturn\n")).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("ring"));
        assert!(lexicon.contains("moon"));
        assert!(lexicon.contains("saturn"));
    }

    #[test]
    fn test_from_words() {
        let lexicon = Lexicon::from_words(["Flyby", " "]);
        assert!(lexicon.contains("flyby"));
        assert_eq!(lexicon.len(), 1);
        assert!(Lexicon::empty().is_empty());
    }

    #[test]
    fn test_from_missing_path() {
        assert!(Lexicon::from_path(Path::new("/nonexistent/words")).is_err());
    }
}
