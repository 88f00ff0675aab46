use std::collections::HashSet;

/// Terms learned during one run.
///
/// Keys are lowercase terms. Nothing is ever evicted; the cache lives as long
/// as the orchestrator run that owns it.
#[derive(Debug, Clone, Default)]
pub struct TermCache {
    known: HashSet<String>,
    unknown: HashSet<String>,
}

impl TermCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_known(&self, term: &str) -> bool {
        self.known.contains(term)
    }

    pub fn is_unknown(&self, term: &str) -> bool {
        self.unknown.contains(term)
    }

    /// Record that `term` was explained. Clears any earlier unknown mark.
    pub fn mark_known(&mut self, term: &str) {
        self.unknown.remove(term);
        self.known.insert(term.to_string());
    }

    pub fn mark_unknown(&mut self, term: &str) {
        if !self.known.contains(term) {
            self.unknown.insert(term.to_string());
        }
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    pub fn unknown_count(&self) -> usize {
        self.unknown.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_overrides_unknown() {
        let mut cache = TermCache::new();
        cache.mark_unknown("enceladus");
        assert!(cache.is_unknown("enceladus"));

        cache.mark_known("enceladus");
        assert!(cache.is_known("enceladus"));
        assert!(!cache.is_unknown("enceladus"));

        cache.mark_unknown("enceladus");
        assert!(!cache.is_unknown("enceladus"));
        assert_eq!(cache.known_count(), 1);
        assert_eq!(cache.unknown_count(), 0);
    }
}
