use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::error::ConfigError;
use crate::matcher::evaluate::{collect_parts, is_satisfied, PartSets};
use crate::matcher::window::{render_window, truncate_chars, MAX_CONTEXT_CHARS};
use crate::pattern::scanner::scan;
use crate::pattern::trie::PatternIndex;
use crate::search_string::{SearchString, Slot};

/// A validated set of search strings plus the pattern index built from them.
///
/// Built once with [`build`](Self::build); the index is read-only afterwards.
/// The `find_*` entry points take `&mut self` only to write each matched
/// search string's `matched_sentences` output slot, which also means the
/// borrow checker serializes concurrent calls on one collection.
pub struct SearchStringCollection<S: SearchString> {
    strings: Vec<S>,
    index: PatternIndex,
}

impl<S: SearchString> SearchStringCollection<S> {
    /// Validate ids and build the pattern index.
    ///
    /// An empty or duplicate id fails the whole build; no partially built
    /// collection is ever returned.
    pub fn build(strings: Vec<S>) -> Result<Self, ConfigError> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for (index, s) in strings.iter().enumerate() {
            if s.id().is_empty() {
                return Err(ConfigError::EmptyId { index });
            }
            if !seen.insert(s.id()) {
                return Err(ConfigError::DuplicateId {
                    id: s.id().to_string(),
                });
            }
        }

        let index = PatternIndex::build(
            strings
                .iter()
                .enumerate()
                .map(|(slot, s)| (slot as Slot, s.parts())),
        );

        debug!(search_strings = strings.len(), "collection built");
        Ok(Self { strings, index })
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Look up a search string by its external id.
    pub fn get(&self, id: &str) -> Option<&S> {
        self.strings.iter().find(|s| s.id() == id)
    }

    /// Single-text mode: scan `text` once and return every search string all
    /// of whose parts are satisfied, in insertion order.
    ///
    /// Each matched search string's `matched_sentences` slot is overwritten
    /// with the input text truncated to [`MAX_CONTEXT_CHARS`].
    pub fn find_all(&mut self, text: &str) -> Vec<&S> {
        let pairs = scan(&self.index, &text.to_lowercase());
        let sets = collect_parts(&pairs, |_, _| true);

        let context = truncate_chars(text, MAX_CONTEXT_CHARS);
        let mut hits = Vec::new();
        for slot in 0..self.strings.len() {
            let Some(parts) = sets.get(&(slot as Slot)) else {
                continue;
            };
            if is_satisfied(parts, self.strings[slot].match_target()) {
                self.strings[slot].set_matched_sentences(vec![context.clone()]);
                hits.push(slot);
            }
        }

        debug!(candidates = pairs.len(), matched = hits.len(), "single-text scan");
        hits.into_iter().map(|slot| &self.strings[slot]).collect()
    }

    /// Single-text mode, first match only.
    pub fn find_one(&mut self, text: &str) -> Option<&S> {
        self.find_all(text).into_iter().next()
    }

    /// Sentence-sequence mode: match against an ordered sequence of
    /// sentences, honoring per-part global vs. local scoping.
    ///
    /// Globally scoped parts may be satisfied anywhere in the document;
    /// locally scoped parts must be satisfied within one sentence. A search
    /// string matches at every sentence whose local scan, merged with the
    /// global baseline, reaches its match target. Matched search strings get
    /// their `matched_sentences` slot overwritten with the rendered window
    /// over all matching sentences.
    pub fn find_all_sentences<T: AsRef<str>>(&mut self, sentences: &[T]) -> Vec<&S> {
        let lowered: Vec<String> = sentences
            .iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        // Document-wide pass: only globally scoped parts may carry over.
        let doc_pairs = scan(&self.index, &lowered.join(" "));
        let baseline: PartSets = collect_parts(&doc_pairs, |slot, part| {
            self.strings[slot as usize].is_global(part)
        });
        debug!(
            document_pairs = doc_pairs.len(),
            global_slots = baseline.len(),
            "document scan"
        );

        // Per-sentence pass: local matches on top of the global baseline.
        let mut matched_indices: FxHashMap<Slot, Vec<usize>> = FxHashMap::default();
        for (sentence_idx, sentence) in lowered.iter().enumerate() {
            let mut acc = baseline.clone();
            for &(slot, part) in &scan(&self.index, sentence) {
                acc.entry(slot).or_default().insert(part);
            }

            for slot in 0..self.strings.len() {
                let Some(parts) = acc.get(&(slot as Slot)) else {
                    continue;
                };
                if is_satisfied(parts, self.strings[slot].match_target()) {
                    matched_indices
                        .entry(slot as Slot)
                        .or_default()
                        .push(sentence_idx);
                }
            }
        }

        let mut hits = Vec::new();
        for slot in 0..self.strings.len() {
            if let Some(indices) = matched_indices.get(&(slot as Slot)) {
                let window = render_window(sentences, indices);
                self.strings[slot].set_matched_sentences(window);
                hits.push(slot);
            }
        }

        hits.into_iter().map(|slot| &self.strings[slot]).collect()
    }

    /// Sentence-sequence mode, first match only.
    pub fn find_one_sentences<T: AsRef<str>>(&mut self, sentences: &[T]) -> Option<&S> {
        self.find_all_sentences(sentences).into_iter().next()
    }
}
