//! Result types for notes analysis.

/// How an entity was explained, if at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Already known from the cache or the lexicon.
    AlreadyKnown,
    /// Looked up earlier in the run without success; not retried.
    PreviouslyUnresolved,
    /// Explained by an encyclopedia summary.
    Encyclopedia(String),
    /// Explained by dictionary definitions.
    Dictionary(Vec<String>),
    /// Neither source could explain it.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityReport {
    /// Entity as it appears in the text.
    pub entity: String,
    pub resolution: Resolution,
}

/// Outcome of analysing one orbit's notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAnalysis {
    pub entities: Vec<EntityReport>,
}

impl TextAnalysis {
    pub fn resolution_of(&self, entity: &str) -> Option<&Resolution> {
        self.entities
            .iter()
            .find(|e| e.entity == entity)
            .map(|e| &e.resolution)
    }
}
