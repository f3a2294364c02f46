use thiserror::Error;

/// Errors raised while building a search string collection.
///
/// These are configuration errors: the supplied search strings themselves are
/// malformed, so no partially built collection is returned and nothing can be
/// scanned. Scanning itself has no error cases.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A search string was supplied with an empty id.
    #[error("search string at position {index} has an empty id")]
    EmptyId { index: usize },

    /// Two search strings in the same collection share an id.
    #[error("duplicate search string id: {id:?}")]
    DuplicateId { id: String },
}
