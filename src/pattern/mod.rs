//! Pattern index construction and the scanning automaton.
//!
//! - [`trie`] - character-keyed index built once from a collection of
//!   search strings, read-only afterwards
//! - [`scanner`] - single-pass automaton advancing active trie states over
//!   an input text, emitting `(slot, part_id)` completion pairs

pub mod scanner;
pub mod trie;

pub use scanner::{is_word_break, scan, BOUNDARY};
pub use trie::{split_alternatives, PatternIndex};
