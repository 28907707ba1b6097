//! Request statistics over a trailing window
//!
//! `RequestQueue` forwards top-K queries to a `SearchServer` and remembers,
//! for the last [`MINUTES_IN_DAY`] requests, whether each one came back empty.

use crate::ranker::ExecutionMode;
use crate::server::SearchServer;
use scout_core::{Document, DocumentId, DocumentStatus, Result};
use std::collections::VecDeque;

/// Size of the trailing window, one request per minute for a day
pub const MINUTES_IN_DAY: usize = 1440;

#[derive(Debug, Clone, Copy)]
struct QueryResult {
    is_empty: bool,
}

/// Query forwarder that counts empty results over the trailing window
#[derive(Debug)]
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    mode: ExecutionMode,
    requests: VecDeque<QueryResult>,
    no_result_requests: usize,
}

impl<'a> RequestQueue<'a> {
    /// Create a queue over `server`, running queries sequentially
    pub fn new(server: &'a SearchServer) -> Self {
        RequestQueue {
            server,
            mode: ExecutionMode::Sequential,
            requests: VecDeque::with_capacity(MINUTES_IN_DAY),
            no_result_requests: 0,
        }
    }

    /// Builder: set the execution mode used for forwarded queries
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Forward a predicate query and record whether it was empty
    ///
    /// Failed queries are not recorded.
    pub fn add_find_request_with<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let result = self
            .server
            .find_top_documents_with(self.mode, raw_query, predicate)?;
        self.record(result.is_empty());
        Ok(result)
    }

    /// Forward a status query and record whether it was empty
    pub fn add_find_request_by_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        let result = self
            .server
            .find_top_documents_by_status(self.mode, raw_query, status)?;
        self.record(result.is_empty());
        Ok(result)
    }

    /// Forward a default (`Actual`) query and record whether it was empty
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let result = self.server.find_top_documents(self.mode, raw_query)?;
        self.record(result.is_empty());
        Ok(result)
    }

    /// Empty results among the recorded requests
    pub fn no_result_requests(&self) -> usize {
        self.no_result_requests
    }

    /// Number of recorded requests, at most [`MINUTES_IN_DAY`]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// True if nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    fn record(&mut self, is_empty: bool) {
        if self.requests.len() == MINUTES_IN_DAY {
            if let Some(oldest) = self.requests.pop_front() {
                if oldest.is_empty {
                    self.no_result_requests -= 1;
                }
            }
        }
        if is_empty {
            self.no_result_requests += 1;
        }
        self.requests.push_back(QueryResult { is_empty });
    }
}
