//! Token types for tokenized search queries.
//!
//! This module defines the structures handed to the query-execution layer:
//!
//! - [`Token`] - one slot in the tokenized sequence: either a single
//!   [`Term`] or a [`TermGroup`] of OR-combined alternatives
//! - [`SearchQuery`] - the result of tokenization: the raw query, the
//!   ordered token sequence, and the full-text eligibility flag
//!
//! Adjacent tokens in the sequence are combined with AND by downstream
//! consumers; the order the user wrote them in is preserved exactly.
//!
//! # Examples
//!
//! ```
//! use quarry::query::{SearchQuery, Term, Token};
//!
//! let tokens = vec![
//!     Token::Term(Term::new("rust")),
//!     Token::Term(Term::new("parser")),
//! ];
//! let query = SearchQuery::new("rust parser", tokens, true);
//!
//! assert_eq!(query.tokens().len(), 2);
//! assert!(query.is_fulltext_eligible());
//! assert_eq!(query.to_string(), "rust parser");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::term::{Term, TermGroup};

/// One slot in a tokenized query sequence.
///
/// Every slot is either a single term or a flat group of OR-combined terms;
/// groups never contain other groups, so the nesting depth of a query is at
/// most one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// A single term.
    Term(Term),
    /// A group of terms combined with OR.
    Group(TermGroup),
}

impl Token {
    /// Whether this token is a single term.
    pub fn is_term(&self) -> bool {
        matches!(self, Token::Term(_))
    }

    /// Whether this token is an OR group.
    pub fn is_group(&self) -> bool {
        matches!(self, Token::Group(_))
    }

    /// The term, if this token is a single term.
    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Token::Term(term) => Some(term),
            Token::Group(_) => None,
        }
    }

    /// The group, if this token is an OR group.
    pub fn as_group(&self) -> Option<&TermGroup> {
        match self {
            Token::Term(_) => None,
            Token::Group(group) => Some(group),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Term(term) => write!(f, "{term}"),
            Token::Group(group) => write!(f, "{group}"),
        }
    }
}

impl From<Term> for Token {
    fn from(term: Term) -> Self {
        Token::Term(term)
    }
}

impl From<TermGroup> for Token {
    fn from(group: TermGroup) -> Self {
        Token::Group(group)
    }
}

/// The result of tokenizing a search query.
///
/// Holds the raw query string as the user typed it, the ordered token
/// sequence, and whether the query as a whole can be executed against a
/// full-text index. The value is immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The raw query string.
    query: String,
    /// The ordered token sequence.
    tokens: Vec<Token>,
    /// Whether every term is long enough and off the stop list.
    fulltext_eligible: bool,
}

impl SearchQuery {
    /// Create a new search query result.
    pub fn new<S: Into<String>>(query: S, tokens: Vec<Token>, fulltext_eligible: bool) -> Self {
        SearchQuery {
            query: query.into(),
            tokens,
            fulltext_eligible,
        }
    }

    /// The raw query string as the user typed it.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The ordered token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consume the result and return the token sequence.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// The number of tokens in the sequence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the query produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the query can be executed against a full-text index as-is.
    ///
    /// False when any retained term is shorter than the configured minimum
    /// word length or appears on the stop-word list; such queries need a
    /// fallback strategy (a slower scan) downstream.
    pub fn is_fulltext_eligible(&self) -> bool {
        self.fulltext_eligible
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
