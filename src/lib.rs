//! Scout - in-memory TF-IDF document search
//!
//! Scout indexes short text documents and answers plus/minus keyword queries
//! with the five most relevant documents, sequentially or fanned out over a
//! thread pool.
//!
//! # Quick Start
//!
//! ```
//! use scout::{DocumentStatus, ExecutionMode, SearchServer};
//!
//! let mut server = SearchServer::new("and in on")?;
//! server.add_document(0, "a cat and a dog", DocumentStatus::Actual, &[5, 6])?;
//!
//! assert!(server.find_top_documents(ExecutionMode::Parallel, "cat -dog")?.is_empty());
//! let docs = server.find_top_documents(ExecutionMode::Sequential, "cat")?;
//! assert_eq!(docs[0].rating, 5);
//! # Ok::<(), scout::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `scout-core`: document types, errors and ranking constants
//! - `scout-concurrency`: the sharded map used as a parallel accumulator
//! - `scout-search`: index, query parsing, ranking and the server facade

pub use scout_concurrency::{Access, ShardedMap};
pub use scout_core::*;
pub use scout_search::*;
