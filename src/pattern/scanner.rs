use rustc_hash::FxHashSet;

use crate::pattern::trie::{PatternIndex, TrieNode};
use crate::search_string::{PartId, Slot};

/// Reserved pseudo-character marking a word-boundary assertion in compiled
/// phrases. It never matches as a literal; in the automaton the boundary
/// edge consumes one word-break input character.
pub const BOUNDARY: char = '\0';

/// Word-break membership test. Anything that is not alphanumeric separates
/// words, including the sentinel padding around the text.
#[inline]
pub fn is_word_break(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Scan `text` once and collect every `(slot, part_id)` whose alternative
/// phrase occurs in it.
///
/// The caller is expected to have lower-cased `text`; the index stores
/// phrases lower-cased at build time.
///
/// The text is logically padded with one leading boundary sentinel (so
/// phrases asserting a boundary can match at the very start) and two
/// trailing ones (the first resolves boundary assertions pending after the
/// last character, the second gives forks spawned there one extra step).
///
/// Each position seeds a fresh state at the trie root, which is what makes
/// matching substring-anywhere rather than anchored. The current generation
/// of states is iterated as a snapshot while the next generation is built
/// into a fresh vec; a state that cannot advance simply does not survive.
pub fn scan(index: &PatternIndex, text: &str) -> FxHashSet<(Slot, PartId)> {
    let mut matched: FxHashSet<(Slot, PartId)> = FxHashSet::default();

    let padded = std::iter::once(BOUNDARY)
        .chain(text.chars())
        .chain([BOUNDARY, BOUNDARY]);

    let mut active: Vec<&TrieNode> = Vec::new();
    for c in padded {
        let is_wb = is_word_break(c);

        active.push(index.root());
        let mut next: Vec<&TrieNode> = Vec::with_capacity(active.len());

        for node in &active {
            // Boundary step: fork through the sentinel edge without
            // consuming this state; the fork swallows the word-break
            // character and continues in the next generation.
            if is_wb {
                if let Some(fork) = node.child(BOUNDARY) {
                    matched.extend(fork.completions().iter().copied());
                    if !fork.is_leaf() {
                        next.push(fork);
                    }
                }
            }

            // Literal step. Sentinel padding is not a literal: states that
            // only had literal continuations die at the text edges.
            if c != BOUNDARY {
                if let Some(child) = node.child(c) {
                    matched.extend(child.completions().iter().copied());
                    if !child.is_leaf() {
                        next.push(child);
                    }
                }
            }
        }

        active = next;
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_string::PhrasePart;

    fn index_of(parts: &[(PartId, &str)]) -> PatternIndex {
        let owned: Vec<PhrasePart> = parts
            .iter()
            .map(|&(id, expr)| PhrasePart::new(id, expr))
            .collect();
        PatternIndex::build([(0u32, owned.as_slice())])
    }

    #[test]
    fn test_substring_match() {
        let index = index_of(&[(1, "fox")]);
        let pairs = scan(&index, "foxglove");
        assert!(pairs.contains(&(0, 1)));
    }

    #[test]
    fn test_no_match_empty_result() {
        let index = index_of(&[(1, "fox")]);
        assert!(scan(&index, "the lazy dog").is_empty());
        assert!(scan(&index, "").is_empty());
    }

    #[test]
    fn test_match_anywhere() {
        let index = index_of(&[(1, "dog")]);
        assert!(scan(&index, "dog days").contains(&(0, 1)));
        assert!(scan(&index, "a good dog").contains(&(0, 1)));
        assert!(scan(&index, "sundog effect").contains(&(0, 1)));
    }

    #[test]
    fn test_boundary_anchored_word() {
        // Compiled with boundary sentinels on both sides: whole-word only.
        let index = index_of(&[(1, "\0fox\0")]);
        assert!(scan(&index, "a fox ran").contains(&(0, 1)));
        assert!(scan(&index, "fox").contains(&(0, 1)));
        assert!(scan(&index, "foxglove").is_empty());
        assert!(scan(&index, "redfox").is_empty());
    }

    #[test]
    fn test_boundary_at_text_end() {
        // The trailing sentinel pad must resolve a boundary assertion
        // pending after the final character.
        let index = index_of(&[(1, "dog\0")]);
        assert!(scan(&index, "lazy dog").contains(&(0, 1)));
        assert!(scan(&index, "dogma").is_empty());
    }

    #[test]
    fn test_boundary_fork_preserves_literal_path() {
        // One phrase boundary-anchored, one plain, sharing no prefix nodes
        // past the root: both paths stay live through word breaks.
        let index = index_of(&[(1, "\0cat\0"), (2, "at h")]);
        let pairs = scan(&index, "the cat howled");
        assert!(pairs.contains(&(0, 1)));
        assert!(pairs.contains(&(0, 2)));
    }

    #[test]
    fn test_overlapping_matches_same_position() {
        let index = index_of(&[(1, "he"), (2, "hello"), (4, "ell")]);
        let pairs = scan(&index, "hello");
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_repeated_occurrence_single_pair() {
        let index = index_of(&[(1, "dog")]);
        let pairs = scan(&index, "dog eat dog");
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_phrase_with_spaces() {
        let index = index_of(&[(1, "quick fox")]);
        assert!(scan(&index, "the quick fox jumped").contains(&(0, 1)));
        assert!(scan(&index, "the quick red fox").is_empty());
    }

    #[test]
    fn test_word_break_classification() {
        assert!(is_word_break(' '));
        assert!(is_word_break('.'));
        assert!(is_word_break(BOUNDARY));
        assert!(!is_word_break('a'));
        assert!(!is_word_break('7'));
    }
}
