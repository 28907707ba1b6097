//! Search server configuration
//!
//! Controls the stop-word set and the degree of parallelism used by
//! parallel ranking.

use crate::tokenizer::{is_valid_word, make_unique_non_empty_strings, split_into_words};
use scout_core::{Error, DEFAULT_MAX_PARALLEL_TASKS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Search server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Words excluded from indexing and from queries
    pub stop_words: BTreeSet<String>,
    /// Upper bound on tasks launched per parallel ranking phase (default: 10)
    pub max_parallel_tasks: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            stop_words: BTreeSet::new(),
            max_parallel_tasks: DEFAULT_MAX_PARALLEL_TASKS,
        }
    }
}

impl SearchConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config for testing
    ///
    /// Uses a small task bound so parallel ranking splits term sets unevenly.
    pub fn for_testing() -> Self {
        SearchConfig {
            max_parallel_tasks: 3,
            ..Default::default()
        }
    }

    /// Set stop words from a container; empty strings and duplicates are dropped
    pub fn with_stop_words<I, S>(mut self, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = make_unique_non_empty_strings(stop_words);
        self
    }

    /// Set stop words from space-separated text
    pub fn with_stop_words_text(self, text: &str) -> Self {
        self.with_stop_words(split_into_words(text))
    }

    /// Set the parallel task bound
    pub fn with_max_parallel_tasks(mut self, tasks: usize) -> Self {
        self.max_parallel_tasks = tasks;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_parallel_tasks == 0 {
            return Err(ConfigError::InvalidParallelism(self.max_parallel_tasks));
        }
        if let Some(word) = self.stop_words.iter().find(|w| !is_valid_word(w)) {
            return Err(ConfigError::InvalidStopWord(word.clone()));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Parallel task bound must be at least 1
    #[error("max_parallel_tasks must be at least 1, got {0}")]
    InvalidParallelism(usize),

    /// Stop word contains a control character
    #[error("Invalid stop word: {0:?}")]
    InvalidStopWord(String),
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::InvalidStopWord(word) => Error::InvalidWord(word),
            other => Error::InvalidConfig(other.to_string()),
        }
    }
}
