use rustc_hash::FxHashMap;
use tracing::debug;

use crate::search_string::{PartId, PhrasePart, Slot};

/// Legacy textual marker meaning "this whole part is globally scoped".
/// Scoping is decided by `SearchString::is_global` at match time; the marker
/// is stripped here as lexical cleanup of stored pattern text only.
const GLOBAL_MARKER: &str = "GLOBAL";

/// One node of the pattern index: children keyed by a single character (or
/// the reserved boundary sentinel) plus the `(slot, part_id)` pairs whose
/// alternative phrase ends here.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    completions: Vec<(Slot, PartId)>,
}

impl TrieNode {
    #[inline]
    pub(crate) fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub(crate) fn completions(&self) -> &[(Slot, PartId)] {
        &self.completions
    }
}

/// Immutable-after-build multi-pattern index.
///
/// Every alternative phrase of every part of every search string is inserted
/// character by character; phrases sharing a prefix share the prefix nodes.
/// Once built the index is never mutated, so it is safe to share read-only
/// across threads.
#[derive(Debug, Default)]
pub struct PatternIndex {
    root: TrieNode,
}

impl PatternIndex {
    /// Build the index from the parts of each search string, in slot order.
    ///
    /// Each phrase is lower-cased before insertion; scanning lower-cases the
    /// input, which together give case-insensitive matching.
    pub fn build<'a, I>(parts_by_slot: I) -> Self
    where
        I: IntoIterator<Item = (Slot, &'a [PhrasePart])>,
    {
        let mut index = Self::default();
        let mut phrase_count = 0usize;

        for (slot, parts) in parts_by_slot {
            for part in parts {
                for phrase in split_alternatives(&part.expression) {
                    index.insert(&phrase.to_lowercase(), slot, part.part_id);
                    phrase_count += 1;
                }
            }
        }

        debug!(phrases = phrase_count, "pattern index built");
        index
    }

    /// Insert one alternative phrase, marking its terminal node.
    fn insert(&mut self, phrase: &str, slot: Slot, part_id: PartId) {
        let mut node = &mut self.root;
        for c in phrase.chars() {
            node = node.children.entry(c).or_default();
        }
        // Set semantics: the same phrase registered twice for one pair
        // still yields a single completion marker.
        if !node.completions.contains(&(slot, part_id)) {
            node.completions.push((slot, part_id));
        }
    }

    #[inline]
    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }
}

/// Split a raw phrase expression into its alternative phrases.
///
/// Trims whitespace and stray semicolons, drops the legacy `GLOBAL` marker
/// and empty segments. `"quick fox; fast fox;;GLOBAL"` yields
/// `["quick fox", "fast fox"]`.
pub fn split_alternatives(expression: &str) -> Vec<String> {
    expression
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != GLOBAL_MARKER)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(expr: &str) -> Vec<PhrasePart> {
        vec![PhrasePart::new(1, expr)]
    }

    #[test]
    fn test_split_alternatives() {
        assert_eq!(
            split_alternatives("quick fox; fast fox"),
            vec!["quick fox", "fast fox"]
        );
        assert_eq!(split_alternatives(";;  ;"), Vec::<String>::new());
        assert_eq!(
            split_alternatives("lazy dog;GLOBAL;"),
            vec!["lazy dog"]
        );
    }

    #[test]
    fn test_prefix_sharing() {
        let p = parts("car;cart");
        let index = PatternIndex::build([(0, p.as_slice())]);

        // "car" terminal carries a completion and still has the 't' child.
        let c = index.root().child('c').unwrap();
        let a = c.child('a').unwrap();
        let r = a.child('r').unwrap();
        assert_eq!(r.completions(), &[(0, 1)]);
        assert!(!r.is_leaf());
        let t = r.child('t').unwrap();
        assert_eq!(t.completions(), &[(0, 1)]);
        assert!(t.is_leaf());
    }

    #[test]
    fn test_lowercased_insertion() {
        let p = parts("Quick Fox");
        let index = PatternIndex::build([(0, p.as_slice())]);
        assert!(index.root().child('q').is_some());
        assert!(index.root().child('Q').is_none());
    }

    #[test]
    fn test_duplicate_phrase_single_marker() {
        let p = parts("fox;fox");
        let index = PatternIndex::build([(0, p.as_slice())]);
        let terminal = index
            .root()
            .child('f')
            .and_then(|n| n.child('o'))
            .and_then(|n| n.child('x'))
            .unwrap();
        assert_eq!(terminal.completions().len(), 1);
    }
}
