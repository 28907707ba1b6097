//! Error types for the scout search engine
//!
//! This module defines all error types surfaced by the public API.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::DocumentId;
use thiserror::Error;

/// Result type alias for scout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the search engine
///
/// All failures are reported synchronously to the caller. No operation
/// partially applies before returning one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Document id is negative or already indexed
    #[error("Invalid document id: {0}")]
    InvalidId(DocumentId),

    /// Document word or stop word contains a control character
    #[error("Invalid word: {0:?}")]
    InvalidWord(String),

    /// Query term is empty, carries a doubled minus, or contains a control character
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    /// Operation references a document that is not indexed
    #[error("Unknown document: {0}")]
    UnknownDocument(DocumentId),

    /// Search configuration was rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
