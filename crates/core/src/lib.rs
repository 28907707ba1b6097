//! Core types for scout
//!
//! This crate defines the foundational types used throughout the system:
//! - DocumentId, DocumentStatus, DocumentRecord: indexed document metadata
//! - Document: ranked search result
//! - Error: Error type hierarchy
//! - Limits: ranking constants shared by every query

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod types;

pub use error::{Error, Result};
pub use limits::{
    relevance_eq, DEFAULT_MAX_PARALLEL_TASKS, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON,
};
pub use types::{average_rating, Document, DocumentId, DocumentRecord, DocumentStatus};
