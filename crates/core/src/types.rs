//! Core types for the scout search engine
//!
//! This module defines the foundational types:
//! - DocumentId: Caller-assigned document identifier
//! - DocumentStatus: Lifecycle status used by ranking predicates
//! - DocumentRecord: Per-document metadata kept by the index
//! - Document: One ranked search result

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned document identifier
///
/// Negative values are representable so that they can be rejected with
/// [`Error::InvalidId`](crate::Error::InvalidId) instead of silently wrapping.
pub type DocumentId = i32;

/// Status of an indexed document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentStatus {
    /// Current document, the default filter for searches
    #[default]
    Actual,
    /// Outdated or off-topic document
    Irrelevant,
    /// Document hidden by moderation
    Banned,
    /// Document marked as removed by the caller
    Removed,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentStatus::Actual => "ACTUAL",
            DocumentStatus::Irrelevant => "IRRELEVANT",
            DocumentStatus::Banned => "BANNED",
            DocumentStatus::Removed => "REMOVED",
        };
        f.write_str(name)
    }
}

/// Metadata stored for every live document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Average of the ratings supplied at insertion, truncated toward zero
    pub rating: i32,
    /// Document status
    pub status: DocumentStatus,
}

impl DocumentRecord {
    /// Create a record from raw ratings
    pub fn new(status: DocumentStatus, ratings: &[i32]) -> Self {
        DocumentRecord {
            rating: average_rating(ratings),
            status,
        }
    }
}

/// Integer average of `ratings`, truncated toward zero; 0 when empty
///
/// The sum is accumulated in `i64` so large rating lists cannot overflow.
pub fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    // |sum / len| <= max |rating|, so the quotient always fits
    (sum / ratings.len() as i64) as i32
}

/// A ranked search result
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier
    pub id: DocumentId,
    /// TF-IDF relevance for the query
    pub relevance: f64,
    /// Document rating
    pub rating: i32,
}

impl Document {
    /// Create a new result entry
    pub fn new(id: DocumentId, relevance: f64, rating: i32) -> Self {
        Document {
            id,
            relevance,
            rating,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_rating_truncates_toward_zero() {
        assert_eq!(average_rating(&[5, 6]), 5);
        assert_eq!(average_rating(&[7, 2, 7]), 5);
        assert_eq!(average_rating(&[-5, -6]), -5);
        assert_eq!(average_rating(&[1, -4]), -1);
    }

    #[test]
    fn test_average_rating_empty_is_zero() {
        assert_eq!(average_rating(&[]), 0);
    }

    #[test]
    fn test_average_rating_no_overflow() {
        assert_eq!(average_rating(&[i32::MAX, i32::MAX]), i32::MAX);
        assert_eq!(average_rating(&[i32::MIN, i32::MIN, i32::MIN]), i32::MIN);
    }

    #[test]
    fn test_document_record_new() {
        let record = DocumentRecord::new(DocumentStatus::Banned, &[1, 2, 3]);
        assert_eq!(record.rating, 2);
        assert_eq!(record.status, DocumentStatus::Banned);
    }

    #[test]
    fn test_status_default_is_actual() {
        assert_eq!(DocumentStatus::default(), DocumentStatus::Actual);
    }

    #[test]
    fn test_document_display() {
        let doc = Document::new(0, 0.0, 5);
        assert_eq!(
            doc.to_string(),
            "{ document_id = 0, relevance = 0, rating = 5 }"
        );
    }

    #[test]
    fn test_document_serde_roundtrip() {
        let doc = Document::new(3, 0.25, -1);
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_status_serializes_by_name() {
        let json = serde_json::to_string(&DocumentStatus::Irrelevant).unwrap();
        assert_eq!(json, "\"Irrelevant\"");
        assert_eq!(DocumentStatus::Irrelevant.to_string(), "IRRELEVANT");
    }
}
