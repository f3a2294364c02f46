//! Boolean satisfaction and result orchestration.
//!
//! - [`collection`] - validated [`SearchStringCollection`] with the
//!   `find_all`/`find_one` entry points for both scan modes
//! - [`evaluate`] - reduction of matched `(slot, part_id)` pairs to
//!   satisfied search strings
//! - [`window`] - rendering of human-readable match windows

pub mod collection;
pub mod evaluate;
pub mod window;

pub use collection::SearchStringCollection;
pub use window::{GAP_MARKER, MAX_CONTEXT_CHARS, MAX_SENTENCE_CHARS};
