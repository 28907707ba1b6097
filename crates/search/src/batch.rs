//! Batch query execution
//!
//! Runs many queries against one server on the rayon pool. Each query is
//! ranked sequentially; the batch itself is the unit of parallelism.

use crate::ranker::ExecutionMode;
use crate::server::SearchServer;
use rayon::prelude::*;
use scout_core::{Document, Result};
use tracing::trace;

/// Top documents for each query, in query order
///
/// Fails with the first error in query order if any query is malformed.
pub fn process_queries<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<Vec<Document>>>
where
    S: AsRef<str> + Sync,
{
    trace!(queries = queries.len(), "processing query batch");
    queries
        .par_iter()
        .map(|query| server.find_top_documents(ExecutionMode::Sequential, query.as_ref()))
        .collect()
}

/// Results of [`process_queries`] flattened into one list, in query order
pub fn process_queries_joined<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<Document>>
where
    S: AsRef<str> + Sync,
{
    let per_query = process_queries(server, queries)?;
    Ok(per_query.into_iter().flatten().collect())
}
