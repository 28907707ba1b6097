//! TF-IDF ranking
//!
//! This module provides:
//! - ExecutionMode: caller-selected sequential or parallel execution
//! - Ranker: relevance accumulation over an IndexStore
//! - select_top: ordering and truncation policy
//! - partition: exhaustive contiguous chunking for task fan-out
//!
//! # Parallel Execution
//!
//! Plus terms are split into `min(max_parallel_tasks, |plus|)` chunks and
//! each chunk is scored by one rayon task into a shared `ShardedMap`. Once
//! every plus task has joined, minus terms are chunked the same way and
//! their documents are erased from the map. The merged snapshot then goes
//! through the same ordering policy as the sequential path.

use crate::index::IndexStore;
use crate::query::Query;
use scout_concurrency::ShardedMap;
use scout_core::{
    relevance_eq, Document, DocumentId, DocumentStatus, MAX_RESULT_DOCUMENT_COUNT,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

/// How a ranking or matching call is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExecutionMode {
    /// Single-threaded on the calling thread
    #[default]
    Sequential,
    /// Fanned out over the rayon thread pool; the caller blocks until done
    Parallel,
}

/// Relevance scorer over a borrowed index
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'a> {
    index: &'a IndexStore,
    max_parallel_tasks: usize,
}

impl<'a> Ranker<'a> {
    /// Create a ranker
    ///
    /// `max_parallel_tasks` must be at least 1; `SearchConfig::validate`
    /// rejects zero before a server ever builds a ranker.
    pub fn new(index: &'a IndexStore, max_parallel_tasks: usize) -> Self {
        debug_assert!(max_parallel_tasks > 0, "max_parallel_tasks must be at least 1");
        Ranker {
            index,
            max_parallel_tasks: max_parallel_tasks.max(1),
        }
    }

    /// Top documents for `query`, best first, at most [`MAX_RESULT_DOCUMENT_COUNT`]
    pub fn find_top_documents<P>(
        &self,
        mode: ExecutionMode,
        query: &Query,
        predicate: &P,
    ) -> Vec<Document>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        select_top(
            self.find_all_documents(mode, query, predicate),
            MAX_RESULT_DOCUMENT_COUNT,
        )
    }

    /// Every matching document in ascending id order, unranked
    pub fn find_all_documents<P>(
        &self,
        mode: ExecutionMode,
        query: &Query,
        predicate: &P,
    ) -> Vec<Document>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        if query.is_empty() {
            return Vec::new();
        }
        match mode {
            ExecutionMode::Sequential => self.find_all_sequential(query, predicate),
            ExecutionMode::Parallel => self.find_all_parallel(query, predicate),
        }
    }

    fn find_all_sequential<P>(&self, query: &Query, predicate: &P) -> Vec<Document>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let mut relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();
        for term in &query.plus_terms {
            self.score_term(term, predicate, |id, score| {
                *relevance.entry(id).or_default() += score;
            });
        }
        for term in &query.minus_terms {
            if let Some(postings) = self.index.postings(term) {
                for id in postings.keys() {
                    relevance.remove(id);
                }
            }
        }
        self.collect_documents(relevance)
    }

    fn find_all_parallel<P>(&self, query: &Query, predicate: &P) -> Vec<Document>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let plus_terms: Vec<&str> = query.plus_terms.iter().map(String::as_str).collect();
        if plus_terms.is_empty() {
            return Vec::new();
        }
        let task_count = self.max_parallel_tasks.min(plus_terms.len());
        let relevance: ShardedMap<DocumentId, f64> = ShardedMap::new(task_count);

        trace!(
            plus_terms = plus_terms.len(),
            minus_terms = query.minus_terms.len(),
            tasks = task_count,
            "parallel ranking fan-out"
        );

        rayon::scope(|scope| {
            for chunk in partition(&plus_terms, task_count) {
                let relevance = &relevance;
                scope.spawn(move |_| {
                    for term in chunk {
                        self.score_term(term, predicate, |id, score| {
                            relevance.with(id, |value| *value += score);
                        });
                    }
                });
            }
        });

        // Erasure starts only after every plus task has joined, otherwise a
        // late accumulation could resurrect an excluded document
        let minus_terms: Vec<&str> = query.minus_terms.iter().map(String::as_str).collect();
        if !minus_terms.is_empty() {
            let task_count = self.max_parallel_tasks.min(minus_terms.len());
            rayon::scope(|scope| {
                for chunk in partition(&minus_terms, task_count) {
                    let relevance = &relevance;
                    scope.spawn(move |_| {
                        for term in chunk {
                            if let Some(postings) = self.index.postings(term) {
                                for id in postings.keys() {
                                    relevance.erase(id);
                                }
                            }
                        }
                    });
                }
            });
        }

        self.collect_documents(relevance.snapshot_merge())
    }

    /// Feed `tf * idf` of every predicate-matching posting of `term` to `add`
    fn score_term<P>(&self, term: &str, predicate: &P, mut add: impl FnMut(DocumentId, f64))
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let (Some(postings), Some(idf)) = (
            self.index.postings(term),
            self.index.inverse_document_freq(term),
        ) else {
            return;
        };
        for (&id, &tf) in postings {
            if let Some(record) = self.index.record(id) {
                if predicate(id, record.status, record.rating) {
                    add(id, tf * idf);
                }
            }
        }
    }

    fn collect_documents(&self, relevance: BTreeMap<DocumentId, f64>) -> Vec<Document> {
        relevance
            .into_iter()
            .map(|(id, relevance)| {
                let rating = self.index.record(id).map_or(0, |record| record.rating);
                Document::new(id, relevance, rating)
            })
            .collect()
    }
}

/// True if `lhs` ranks strictly before `rhs`
///
/// Higher relevance first; relevances within `RELEVANCE_EPSILON` are ordered
/// by higher rating.
pub fn ranks_before(lhs: &Document, rhs: &Document) -> bool {
    if relevance_eq(lhs.relevance, rhs.relevance) {
        lhs.rating > rhs.rating
    } else {
        lhs.relevance > rhs.relevance
    }
}

/// Keep the best `limit` documents in ranking order
///
/// Behaves as an insertion sort followed by truncation. The epsilon
/// tie-break is not transitive, so this never hands it to `sort_by`.
pub fn select_top<I>(documents: I, limit: usize) -> Vec<Document>
where
    I: IntoIterator<Item = Document>,
{
    let mut top: Vec<Document> = Vec::with_capacity(limit + 1);
    for document in documents {
        let position = top
            .iter()
            .position(|kept| ranks_before(&document, kept))
            .unwrap_or(top.len());
        if position < limit {
            top.insert(position, document);
            top.truncate(limit);
        }
    }
    top
}

/// Split `items` into `parts` contiguous chunks
///
/// Every chunk but the last has `len / parts` items; the last absorbs the
/// remainder. No item is skipped or repeated. `parts` is clamped to
/// `1..=len`, and an empty slice yields no chunks.
pub fn partition<T>(items: &[T], parts: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }
    let parts = parts.clamp(1, items.len());
    let stride = items.len() / parts;
    (0..parts)
        .map(|i| {
            let start = i * stride;
            let end = if i + 1 == parts {
                items.len()
            } else {
                start + stride
            };
            &items[start..end]
        })
        .collect()
}
