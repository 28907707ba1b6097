//! Per-document query matching
//!
//! Reports which plus terms of a query occur in one document. A document
//! containing any minus term matches nothing, but its status is still
//! reported.

use crate::index::IndexStore;
use crate::query::Query;
use crate::ranker::ExecutionMode;
use rayon::prelude::*;
use scout_core::{DocumentId, DocumentStatus, Error, Result};

/// Plus terms of `query` present in document `id`, in ascending term order
///
/// Fails with `UnknownDocument` if `id` is not live. Both execution modes
/// return identical results; parallel mode only spreads the membership test
/// over the rayon pool.
pub fn match_document(
    index: &IndexStore,
    mode: ExecutionMode,
    query: &Query,
    id: DocumentId,
) -> Result<(Vec<String>, DocumentStatus)> {
    let record = index.record(id).ok_or(Error::UnknownDocument(id))?;
    let frequencies = index.word_frequencies(id);

    if query
        .minus_terms
        .iter()
        .any(|term| frequencies.contains_key(term))
    {
        return Ok((Vec::new(), record.status));
    }

    let matched: Vec<String> = match mode {
        ExecutionMode::Sequential => query
            .plus_terms
            .iter()
            .filter(|term| frequencies.contains_key(*term))
            .cloned()
            .collect(),
        ExecutionMode::Parallel => {
            let plus_terms: Vec<&String> = query.plus_terms.iter().collect();
            plus_terms
                .par_iter()
                .filter(|term| frequencies.contains_key(**term))
                .map(|term| (*term).clone())
                .collect()
        }
    };
    Ok((matched, record.status))
}
