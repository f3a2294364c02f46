//! A ready-made [`SearchString`] implementation.
//!
//! [`SearchSpec`] is the concrete type embedders use when they do not carry
//! their own phrase-compiler output format. It derives its match target from
//! the part ids it is given and round-trips through serde, so collections can
//! be loaded from JSON configuration.

use serde::{Deserialize, Serialize};

use crate::search_string::{PartId, PhrasePart, SearchString};

/// A self-contained search string: id, ordered parts, and the set of parts
/// that may match anywhere in a document (global scope).
///
/// ```
/// use phraseset::search_spec::SearchSpec;
///
/// let spec = SearchSpec::new("weather")
///     .with_part(1, "rain;drizzle")
///     .with_global_part(2, "storm warning");
/// assert_eq!(spec.match_target, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSpec {
    pub id: String,
    pub parts: Vec<PhrasePart>,
    /// Part ids that are satisfiable anywhere in a sentence sequence.
    #[serde(default)]
    pub global_parts: Vec<PartId>,
    /// Sum of all part ids. Recomputed by the builder methods; when
    /// deserializing hand-written JSON it must be supplied consistently.
    #[serde(default)]
    pub match_target: u64,
    /// Output slot, filled by the matcher on a successful match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_sentences: Vec<String>,
}

impl SearchSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parts: Vec::new(),
            global_parts: Vec::new(),
            match_target: 0,
            matched_sentences: Vec::new(),
        }
    }

    /// Add a locally scoped part. The expression holds semicolon-delimited
    /// alternative phrases.
    pub fn with_part(mut self, part_id: PartId, expression: &str) -> Self {
        self.match_target += part_id;
        self.parts.push(PhrasePart::new(part_id, expression));
        self
    }

    /// Add a part that may be satisfied anywhere in a sentence sequence.
    pub fn with_global_part(mut self, part_id: PartId, expression: &str) -> Self {
        self.global_parts.push(part_id);
        self.with_part(part_id, expression)
    }
}

impl SearchString for SearchSpec {
    fn id(&self) -> &str {
        &self.id
    }

    fn parts(&self) -> &[PhrasePart] {
        &self.parts
    }

    fn match_target(&self) -> u64 {
        self.match_target
    }

    fn is_global(&self, part_id: PartId) -> bool {
        self.global_parts.contains(&part_id)
    }

    fn matched_sentences(&self) -> &[String] {
        &self.matched_sentences
    }

    fn set_matched_sentences(&mut self, sentences: Vec<String>) {
        self.matched_sentences = sentences;
    }
}
