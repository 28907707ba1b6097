//! Forward and inverted TF index
//!
//! This module provides:
//! - IndexStore: term frequencies keyed both ways plus document metadata
//! - Document insertion with validation before any mutation
//! - Document removal without rescanning the vocabulary
//!
//! # Invariants
//!
//! - A `(doc, term, tf)` triple is in the forward index iff it is in the
//!   inverted index
//! - Live ids are exactly the forward index keys (a document without
//!   indexable words keeps an empty forward entry)
//! - No inverted entry is ever left with an empty posting map

use crate::tokenizer::{is_valid_word, split_into_words};
use scout_core::{DocumentId, DocumentRecord, DocumentStatus, Error, Result};
use std::collections::{btree_set, BTreeMap, BTreeSet};
use std::iter::Copied;
use tracing::{debug, warn};

/// Term -> frequency mapping of one document
pub type TermFrequencies = BTreeMap<String, f64>;

/// Document -> frequency mapping of one term
pub type Postings = BTreeMap<DocumentId, f64>;

static EMPTY_FREQUENCIES: TermFrequencies = BTreeMap::new();

/// In-memory index over live documents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexStore {
    /// Words excluded from indexing
    stop_words: BTreeSet<String>,
    /// Term -> (document -> tf)
    inverted: BTreeMap<String, Postings>,
    /// Document -> (term -> tf)
    forward: BTreeMap<DocumentId, TermFrequencies>,
    /// Document -> rating and status
    documents: BTreeMap<DocumentId, DocumentRecord>,
    /// Ids of live documents
    live_ids: BTreeSet<DocumentId>,
}

impl IndexStore {
    /// Create an empty index with the given stop words
    pub fn new(stop_words: BTreeSet<String>) -> Self {
        IndexStore {
            stop_words,
            ..Default::default()
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Index a document
    ///
    /// Fails with `InvalidId` for a negative or already live id and with
    /// `InvalidWord` if any word contains a control character. Nothing is
    /// written unless the whole document validates.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if id < 0 || self.documents.contains_key(&id) {
            warn!(document_id = id, "rejected document id");
            return Err(Error::InvalidId(id));
        }
        let words = self.split_into_words_no_stop(text)?;

        let inv_word_count = 1.0 / words.len() as f64;
        let mut frequencies = TermFrequencies::new();
        for word in &words {
            *frequencies.entry((*word).to_string()).or_default() += inv_word_count;
        }

        for (term, tf) in &frequencies {
            self.inverted.entry(term.clone()).or_default().insert(id, *tf);
        }
        let term_count = frequencies.len();
        self.forward.insert(id, frequencies);
        self.documents.insert(id, DocumentRecord::new(status, ratings));
        self.live_ids.insert(id);

        debug!(
            document_id = id,
            words = words.len(),
            terms = term_count,
            "indexed document"
        );
        Ok(())
    }

    /// Remove a document
    ///
    /// Returns false (and changes nothing) if the id is not live.
    pub fn remove_document(&mut self, id: DocumentId) -> bool {
        let Some(frequencies) = self.forward.remove(&id) else {
            return false;
        };

        for term in frequencies.keys() {
            if let Some(postings) = self.inverted.get_mut(term) {
                postings.remove(&id);
                if postings.is_empty() {
                    self.inverted.remove(term);
                }
            }
        }
        self.documents.remove(&id);
        self.live_ids.remove(&id);

        debug!(document_id = id, terms = frequencies.len(), "removed document");
        true
    }

    // ========================================================================
    // Read Access
    // ========================================================================

    /// Number of live documents
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct indexed terms
    pub fn term_count(&self) -> usize {
        self.inverted.len()
    }

    /// True if `id` is live
    pub fn contains(&self, id: DocumentId) -> bool {
        self.live_ids.contains(&id)
    }

    /// Live ids in ascending order
    pub fn live_ids(&self) -> Copied<btree_set::Iter<'_, DocumentId>> {
        self.live_ids.iter().copied()
    }

    /// Metadata of a live document
    pub fn record(&self, id: DocumentId) -> Option<&DocumentRecord> {
        self.documents.get(&id)
    }

    /// Term frequencies of a document; empty if the id is not live
    pub fn word_frequencies(&self, id: DocumentId) -> &TermFrequencies {
        self.forward.get(&id).unwrap_or(&EMPTY_FREQUENCIES)
    }

    /// Documents containing `term`
    pub fn postings(&self, term: &str) -> Option<&Postings> {
        self.inverted.get(term)
    }

    /// `ln(live documents / documents containing term)`, None if the term is unknown
    pub fn inverse_document_freq(&self, term: &str) -> Option<f64> {
        self.inverted
            .get(term)
            .map(|postings| (self.document_count() as f64 / postings.len() as f64).ln())
    }

    /// The stop-word set
    pub fn stop_words(&self) -> &BTreeSet<String> {
        &self.stop_words
    }

    /// True if `word` is a stop word
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Check the forward/inverted mirror invariants
    ///
    /// Intended for tests and debug assertions; walks the whole index.
    pub fn is_consistent(&self) -> bool {
        let forward_matches = self.forward.iter().all(|(id, frequencies)| {
            frequencies.iter().all(|(term, tf)| {
                self.inverted
                    .get(term)
                    .and_then(|postings| postings.get(id))
                    == Some(tf)
            })
        });
        let inverted_matches = self.inverted.iter().all(|(term, postings)| {
            !postings.is_empty()
                && postings.iter().all(|(id, tf)| {
                    self.forward
                        .get(id)
                        .and_then(|frequencies| frequencies.get(term))
                        == Some(tf)
                })
        });
        let ids_match = self.live_ids.iter().eq(self.forward.keys())
            && self.live_ids.iter().eq(self.documents.keys());

        forward_matches && inverted_matches && ids_match
    }

    fn split_into_words_no_stop<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        let mut words = Vec::new();
        for word in split_into_words(text) {
            if !is_valid_word(word) {
                warn!(word, "rejected document word");
                return Err(Error::InvalidWord(word.to_string()));
            }
            if !self.is_stop_word(word) {
                words.push(word);
            }
        }
        Ok(words)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::make_unique_non_empty_strings;

    fn test_index() -> IndexStore {
        IndexStore::new(make_unique_non_empty_strings(["and", "in", "on"]))
    }

    #[test]
    fn test_empty_index() {
        let index = test_index();
        assert_eq!(index.document_count(), 0);
        assert_eq!(index.term_count(), 0);
        assert_eq!(index.live_ids().count(), 0);
        assert!(index.is_consistent());
    }

    #[test]
    fn test_add_document_frequencies() {
        let mut index = test_index();
        index
            .add_document(0, "a cat and a dog", DocumentStatus::Actual, &[5, 6])
            .unwrap();

        let frequencies = index.word_frequencies(0);
        // "and" is a stop word: 4 indexed words
        assert_eq!(frequencies.len(), 3);
        assert!((frequencies["a"] - 0.5).abs() < 1e-12);
        assert!((frequencies["cat"] - 0.25).abs() < 1e-12);
        assert!((frequencies["dog"] - 0.25).abs() < 1e-12);
        assert!(!frequencies.contains_key("and"));

        let record = index.record(0).unwrap();
        assert_eq!(record.rating, 5);
        assert_eq!(record.status, DocumentStatus::Actual);
        assert!(index.is_consistent());
    }

    #[test]
    fn test_add_negative_id() {
        let mut index = test_index();
        let err = index
            .add_document(-1, "cat", DocumentStatus::Actual, &[])
            .unwrap_err();
        assert_eq!(err, Error::InvalidId(-1));
        assert_eq!(index.document_count(), 0);
    }

    #[test]
    fn test_add_duplicate_id() {
        let mut index = test_index();
        index.add_document(1, "cat", DocumentStatus::Actual, &[1]).unwrap();
        let before = index.clone();

        let err = index
            .add_document(1, "dog", DocumentStatus::Banned, &[9])
            .unwrap_err();
        assert_eq!(err, Error::InvalidId(1));
        assert_eq!(index, before);
    }

    #[test]
    fn test_add_invalid_word_leaves_index_untouched() {
        let mut index = test_index();
        index.add_document(1, "cat", DocumentStatus::Actual, &[1]).unwrap();
        let before = index.clone();

        let err = index
            .add_document(2, "dog ca\u{1}t bird", DocumentStatus::Actual, &[1])
            .unwrap_err();
        assert_eq!(err, Error::InvalidWord("ca\u{1}t".to_string()));
        assert_eq!(index, before);
        assert!(!index.contains(2));
    }

    #[test]
    fn test_add_document_without_words() {
        let mut index = test_index();
        index
            .add_document(3, " and in ", DocumentStatus::Irrelevant, &[])
            .unwrap();

        assert_eq!(index.document_count(), 1);
        assert!(index.contains(3));
        assert!(index.word_frequencies(3).is_empty());
        assert_eq!(index.term_count(), 0);
        assert!(index.is_consistent());
    }

    #[test]
    fn test_inverse_document_freq() {
        let mut index = test_index();
        index.add_document(1, "white cat", DocumentStatus::Actual, &[]).unwrap();
        index.add_document(2, "white dog", DocumentStatus::Actual, &[]).unwrap();

        assert_eq!(index.inverse_document_freq("white"), Some(0.0));
        let idf = index.inverse_document_freq("cat").unwrap();
        assert!((idf - 2f64.ln()).abs() < 1e-12);
        assert_eq!(index.inverse_document_freq("bird"), None);
    }

    #[test]
    fn test_remove_document() {
        let mut index = test_index();
        index.add_document(1, "white cat", DocumentStatus::Actual, &[]).unwrap();
        index.add_document(2, "white dog", DocumentStatus::Actual, &[]).unwrap();

        assert!(index.remove_document(1));
        assert_eq!(index.document_count(), 1);
        assert!(index.postings("cat").is_none());
        assert_eq!(index.postings("white").unwrap().len(), 1);
        assert!(index.word_frequencies(1).is_empty());
        assert!(index.is_consistent());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut index = test_index();
        index.add_document(1, "cat", DocumentStatus::Actual, &[]).unwrap();
        let before = index.clone();

        assert!(!index.remove_document(7));
        assert_eq!(index, before);
    }

    #[test]
    fn test_remove_twice() {
        let mut index = test_index();
        index.add_document(1, "cat", DocumentStatus::Actual, &[]).unwrap();
        index.add_document(2, "dog", DocumentStatus::Actual, &[]).unwrap();

        assert!(index.remove_document(1));
        let once = index.clone();
        assert!(!index.remove_document(1));
        assert_eq!(index, once);
    }

    #[test]
    fn test_add_remove_roundtrip() {
        let mut index = test_index();
        index.add_document(1, "white cat", DocumentStatus::Actual, &[1]).unwrap();
        let before = index.clone();

        index
            .add_document(2, "white cat white dog", DocumentStatus::Banned, &[3])
            .unwrap();
        index.remove_document(2);

        assert_eq!(index, before);
    }

    #[test]
    fn test_live_ids_ascending() {
        let mut index = test_index();
        for id in [5, 1, 3] {
            index.add_document(id, "cat", DocumentStatus::Actual, &[]).unwrap();
        }
        let ids: Vec<DocumentId> = index.live_ids().collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_readd_after_remove() {
        let mut index = test_index();
        index.add_document(1, "cat", DocumentStatus::Actual, &[]).unwrap();
        index.remove_document(1);
        index.add_document(1, "dog", DocumentStatus::Actual, &[]).unwrap();

        assert!(index.word_frequencies(1).contains_key("dog"));
        assert!(index.postings("cat").is_none());
    }
}
