//! In-memory TF-IDF document search
//!
//! This crate provides:
//! - SearchServer: document mutation, top-K ranking and per-document matching
//! - IndexStore: forward and inverted term-frequency indexes
//! - Query: plus/minus term parsing against a stop-word set
//! - Ranker: sequential and parallel relevance accumulation
//! - SearchConfig: stop words and parallelism settings
//! - Paginator, RequestQueue and batch helpers built on the server
//!
//! # Usage
//!
//! ```
//! use scout_search::{ExecutionMode, SearchServer};
//! use scout_core::DocumentStatus;
//!
//! let mut server = SearchServer::new("and in on").unwrap();
//! server.add_document(0, "white cat and fashionable collar", DocumentStatus::Actual, &[8, -3]).unwrap();
//! server.add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7]).unwrap();
//!
//! let docs = server.find_top_documents(ExecutionMode::Parallel, "fluffy cat -collar").unwrap();
//! assert_eq!(docs.len(), 1);
//! assert_eq!(docs[0].id, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod config;
pub mod index;
pub mod matcher;
pub mod paginator;
pub mod query;
pub mod ranker;
pub mod request_queue;
pub mod server;
pub mod tokenizer;

// Re-export commonly used types
pub use batch::{process_queries, process_queries_joined};
pub use config::{ConfigError, SearchConfig};
pub use index::{IndexStore, Postings, TermFrequencies};
pub use paginator::{paginate, Page, Paginator};
pub use query::Query;
pub use ranker::{ExecutionMode, Ranker};
pub use request_queue::{RequestQueue, MINUTES_IN_DAY};
pub use server::SearchServer;
pub use tokenizer::{is_valid_word, make_unique_non_empty_strings, split_into_words};
