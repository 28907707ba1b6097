//! Search server facade
//!
//! `SearchServer` owns the index and configuration and exposes the public
//! operations: document mutation, top-K ranking, per-document matching and
//! read-only accessors.
//!
//! # Concurrency
//!
//! Queries take `&self` and may run from many threads at once. Mutation
//! takes `&mut self`, so it can never overlap an in-flight query.

use crate::config::SearchConfig;
use crate::index::{IndexStore, TermFrequencies};
use crate::matcher;
use crate::query::Query;
use crate::ranker::{ExecutionMode, Ranker};
use scout_core::{Document, DocumentId, DocumentRecord, DocumentStatus, Error, Result};
use std::collections::btree_set;
use std::iter::Copied;
use tracing::debug;

/// In-memory TF-IDF search server
///
/// # Example
///
/// ```
/// use scout_search::{ExecutionMode, SearchServer};
/// use scout_core::DocumentStatus;
///
/// let mut server = SearchServer::new("and in on").unwrap();
/// server.add_document(0, "a cat and a dog", DocumentStatus::Actual, &[5, 6]).unwrap();
///
/// let docs = server.find_top_documents(ExecutionMode::Sequential, "cat").unwrap();
/// assert_eq!(docs.len(), 1);
/// assert_eq!(docs[0].rating, 5);
/// ```
#[derive(Debug, Clone)]
pub struct SearchServer {
    index: IndexStore,
    config: SearchConfig,
}

impl SearchServer {
    /// Create a server with stop words given as space-separated text
    pub fn new(stop_words_text: &str) -> Result<Self> {
        Self::with_config(SearchConfig::new().with_stop_words_text(stop_words_text))
    }

    /// Create a server with stop words from a container
    pub fn from_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(SearchConfig::new().with_stop_words(stop_words))
    }

    /// Create a server from a full configuration
    ///
    /// Fails with `InvalidWord` for a stop word containing a control character
    /// and with `InvalidConfig` for any other rejected setting.
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            stop_words = config.stop_words.len(),
            max_parallel_tasks = config.max_parallel_tasks,
            "created search server"
        );
        Ok(SearchServer {
            index: IndexStore::new(config.stop_words.clone()),
            config,
        })
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Index a document
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        self.index.add_document(id, text, status, ratings)
    }

    /// Remove a document; unknown ids are ignored
    pub fn remove_document(&mut self, id: DocumentId) {
        self.index.remove_document(id);
    }

    // ========================================================================
    // Ranking
    // ========================================================================

    /// Top documents with status `Actual`
    pub fn find_top_documents(&self, mode: ExecutionMode, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(mode, raw_query, DocumentStatus::Actual)
    }

    /// Top documents with the given status
    pub fn find_top_documents_by_status(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with(mode, raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Top documents accepted by `predicate(id, status, rating)`
    ///
    /// Results are ordered by descending relevance, ties within `1e-6` by
    /// descending rating, and capped at five entries.
    pub fn find_top_documents_with<P>(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = self.parse_query(raw_query)?;
        Ok(self.ranker().find_top_documents(mode, &query, &predicate))
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Plus terms of `raw_query` contained in document `id`, with its status
    ///
    /// The term list is empty if the document contains any minus term. An
    /// unknown id fails with `UnknownDocument` before the query is parsed.
    pub fn match_document(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        if !self.index.contains(id) {
            return Err(Error::UnknownDocument(id));
        }
        let query = self.parse_query(raw_query)?;
        matcher::match_document(&self.index, mode, &query, id)
    }

    // ========================================================================
    // Read Access
    // ========================================================================

    /// Number of live documents
    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Live document ids in ascending order
    pub fn live_ids(&self) -> Copied<btree_set::Iter<'_, DocumentId>> {
        self.index.live_ids()
    }

    /// Term frequencies of a document; empty if the id is not live
    pub fn word_frequencies(&self, id: DocumentId) -> &TermFrequencies {
        self.index.word_frequencies(id)
    }

    /// Rating and status of a live document
    pub fn document(&self, id: DocumentId) -> Option<&DocumentRecord> {
        self.index.record(id)
    }

    /// Parse a query against this server's stop words
    pub fn parse_query(&self, raw_query: &str) -> Result<Query> {
        Query::parse(raw_query, self.index.stop_words())
    }

    /// The underlying index
    pub fn index(&self) -> &IndexStore {
        &self.index
    }

    /// The active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn ranker(&self) -> Ranker<'_> {
        Ranker::new(&self.index, self.config.max_parallel_tasks)
    }
}

impl<'a> IntoIterator for &'a SearchServer {
    type Item = DocumentId;
    type IntoIter = Copied<btree_set::Iter<'a, DocumentId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.live_ids()
    }
}
