use serde::{Deserialize, Serialize};

/// Index of a search string within its collection.
///
/// Slots are assigned in insertion order at build time and are what the
/// pattern index stores in its completion markers, so the scanner never
/// touches the string ids themselves.
pub type Slot = u32;

/// Identifier of one part of a search string.
///
/// Part ids are chosen by the external phrase compiler. The matcher only
/// relies on the contract that the ids of one search string sum to its match
/// target without overlap; it does not assume powers of two.
pub type PartId = u64;

/// One required part of a search string: a part id paired with the raw
/// phrase expression whose semicolon-delimited alternatives can satisfy it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhrasePart {
    pub part_id: PartId,
    pub expression: String,
}

impl PhrasePart {
    pub fn new(part_id: PartId, expression: impl Into<String>) -> Self {
        Self {
            part_id,
            expression: expression.into(),
        }
    }
}

/// Contract between the matcher and externally compiled search strings.
///
/// The phrase-expression compiler that chooses part ids and match targets is
/// not part of this crate; anything implementing this trait can be handed to
/// [`crate::matcher::SearchStringCollection::build`].
///
/// Implementors must guarantee:
/// - `match_target()` equals the sum of all `part_id`s in `parts()`, and the
///   ids are bit-disjoint (they never carry into each other when summed)
/// - `id()` is unique within one collection (violations fail the build)
pub trait SearchString {
    /// Externally supplied unique identifier.
    fn id(&self) -> &str;

    /// Ordered parts, each with its raw phrase expression.
    fn parts(&self) -> &[PhrasePart];

    /// Sum of all required part ids; reaching exactly this value means every
    /// part was satisfied.
    fn match_target(&self) -> u64;

    /// Whether a part may be satisfied anywhere in a multi-sentence document
    /// rather than within a single sentence. Only consulted in
    /// sentence-sequence mode.
    fn is_global(&self, part_id: PartId) -> bool;

    /// Output slot: the rendered match window from the most recent successful
    /// match. Overwritten, never accumulated.
    fn matched_sentences(&self) -> &[String];

    /// Store the rendered match window. Called by the matcher on success.
    fn set_matched_sentences(&mut self, sentences: Vec<String>);
}
