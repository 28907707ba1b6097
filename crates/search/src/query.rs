//! Query parsing
//!
//! A raw query is a space-separated list of terms. A leading `-` marks a
//! minus term: documents containing it are excluded. Stop words are dropped
//! from both sets. A term seen in minus form anywhere in the query is never
//! kept as a plus term.

use crate::tokenizer::{is_valid_word, split_into_words};
use scout_core::{Error, Result};
use std::collections::BTreeSet;

/// Parsed query: de-duplicated plus and minus term sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Terms that contribute relevance
    pub plus_terms: BTreeSet<String>,
    /// Terms that exclude a document
    pub minus_terms: BTreeSet<String>,
}

/// One classified query token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueryTerm<'a> {
    data: &'a str,
    is_minus: bool,
    is_stop: bool,
}

impl Query {
    /// Parse `text` against a stop-word set
    ///
    /// # Errors
    ///
    /// `MalformedQuery` if a token is a bare `-`, starts with `--`, or contains
    /// a control character.
    ///
    /// # Example
    ///
    /// ```
    /// use scout_search::Query;
    /// use std::collections::BTreeSet;
    ///
    /// let stop_words: BTreeSet<String> = ["in".to_string()].into();
    /// let query = Query::parse("cat in -dog cat", &stop_words).unwrap();
    /// assert_eq!(query.plus_terms.len(), 1);
    /// assert!(query.minus_terms.contains("dog"));
    /// ```
    pub fn parse(text: &str, stop_words: &BTreeSet<String>) -> Result<Self> {
        let mut query = Query::default();
        for word in split_into_words(text) {
            let term = parse_query_term(word, stop_words)?;
            if term.is_stop {
                continue;
            }
            if term.is_minus {
                query.minus_terms.insert(term.data.to_string());
            } else {
                query.plus_terms.insert(term.data.to_string());
            }
        }
        // Minus wins over plus for the same term
        let minus_terms = &query.minus_terms;
        query.plus_terms.retain(|term| !minus_terms.contains(term));
        Ok(query)
    }

    /// True if neither set holds a term
    pub fn is_empty(&self) -> bool {
        self.plus_terms.is_empty() && self.minus_terms.is_empty()
    }
}

fn parse_query_term<'a>(word: &'a str, stop_words: &BTreeSet<String>) -> Result<QueryTerm<'a>> {
    let (data, is_minus) = match word.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (word, false),
    };
    if data.is_empty() || data.starts_with('-') || !is_valid_word(data) {
        return Err(Error::MalformedQuery(format!("invalid query word {:?}", word)));
    }
    Ok(QueryTerm {
        data,
        is_minus,
        is_stop: stop_words.contains(data),
    })
}
