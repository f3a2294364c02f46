//! # phraseset - Multi-Pattern Boolean Phrase Matcher
//!
//! phraseset scans a text exactly once and reports every registered *search
//! string* that matches it. A search string is an AND of *parts*; a part is
//! an OR of *alternative phrases*. Matching is case-insensitive, substring
//! by default, and word-boundary-aware when a phrase is compiled with
//! boundary sentinels.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`pattern`] - Pattern index (trie) construction and the scanning automaton
//! - [`matcher`] - Boolean satisfaction, sentence orchestration, result windows
//! - [`search_string`] - The `SearchString` contract external compilers target
//! - [`search_spec`] - A serde-backed concrete `SearchString` implementation
//!
//! ## Quick Start
//!
//! ```
//! use phraseset::search_spec::SearchSpec;
//! use phraseset::matcher::SearchStringCollection;
//!
//! let spec = SearchSpec::new("animals")
//!     .with_part(1, "quick fox;fast fox")
//!     .with_part(2, "lazy dog");
//!
//! let mut collection = SearchStringCollection::build(vec![spec]).unwrap();
//! let matched = collection.find_all("The quick fox jumped over the lazy dog");
//! assert_eq!(matched.len(), 1);
//! ```
//!
//! ## Matching model
//!
//! All registered phrases are compiled into a single character trie. One
//! left-to-right pass advances a generation of active trie states per input
//! character, so scan cost is proportional to input length times the average
//! number of live states, independent of how many search strings are
//! registered. A search string matches when the sum of its distinct matched
//! part ids equals its declared match target (AND of ORs).

pub mod error;
pub mod matcher;
pub mod pattern;
pub mod search_string;
pub mod search_spec;

pub use error::ConfigError;
pub use matcher::SearchStringCollection;
pub use search_string::{PartId, PhrasePart, SearchString, Slot};
pub use search_spec::SearchSpec;
