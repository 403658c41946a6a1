//! Term types for tokenized search queries.
//!
//! This module defines the leaf data structures produced by query
//! tokenization:
//!
//! - [`Term`] - a single atomic search condition: a word or phrase with an
//!   optional exclusion marker and an optional attribute scope
//! - [`TermGroup`] - an ordered, non-empty list of terms combined with OR
//!
//! Terms are immutable once constructed. The tokenizer builds them with the
//! `with_*` methods and downstream consumers read them through accessors.
//!
//! # Examples
//!
//! ```
//! use quarry::query::Term;
//!
//! let term = Term::new("hello").with_exclude(true).with_attribute("title");
//! assert!(term.is_exclude());
//! assert_eq!(term.attribute(), Some("title"));
//! assert_eq!(term.text(), "hello");
//! assert_eq!(term.to_string(), "-title:hello");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single atomic search condition.
///
/// A term carries the normalized text to match, whether the match is negated
/// (the user prefixed the token with `-`), and an optional attribute name the
/// match is scoped to (the user wrote `name:value`). The text is never empty;
/// tokens that normalize to nothing are dropped before a term is built.
///
/// # Examples
///
/// ```
/// use quarry::query::Term;
///
/// let term = Term::new("rust");
/// assert!(!term.is_exclude());
/// assert_eq!(term.attribute(), None);
/// assert_eq!(term.text(), "rust");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Whether matching documents must NOT contain this term.
    exclude: bool,
    /// The attribute this term is scoped to, if any.
    attribute: Option<String>,
    /// The normalized text to match. Never empty.
    text: String,
}

impl Term {
    /// Create a new inclusive, unscoped term with the given text.
    ///
    /// The text should already be normalized; the tokenizer runs every token
    /// through its normalizer before constructing terms.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Term {
            exclude: false,
            attribute: None,
            text: text.into(),
        }
    }

    /// Set whether this term is an exclusion.
    pub fn with_exclude(mut self, exclude: bool) -> Self {
        self.exclude = exclude;
        self
    }

    /// Scope this term to an attribute.
    pub fn with_attribute<S: Into<String>>(mut self, attribute: S) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Whether matching documents must NOT contain this term.
    pub fn is_exclude(&self) -> bool {
        self.exclude
    }

    /// The attribute this term is scoped to, if any.
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// The normalized text to match.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the text is a multi-word phrase.
    pub fn is_phrase(&self) -> bool {
        self.text.contains(' ')
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exclude {
            write!(f, "-")?;
        }
        if let Some(attribute) = &self.attribute {
            write!(f, "{attribute}:")?;
        }
        if self.is_phrase() {
            write!(f, "\"{}\"", self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// An ordered, non-empty list of terms combined with OR.
///
/// A group occupies a single slot in the outer token sequence, so the whole
/// group participates in the surrounding AND combination as one unit. Groups
/// hold plain terms only and never nest.
///
/// # Examples
///
/// ```
/// use quarry::query::{Term, TermGroup};
///
/// let mut group = TermGroup::new(Term::new("cat"));
/// group.push(Term::new("dog"));
///
/// assert_eq!(group.len(), 2);
/// assert_eq!(group.to_string(), "cat OR dog");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermGroup {
    /// The alternatives, in the order the user wrote them.
    terms: Vec<Term>,
}

impl TermGroup {
    /// Create a new group seeded with its first term.
    pub fn new(term: Term) -> Self {
        TermGroup { terms: vec![term] }
    }

    /// Append a term to the group.
    pub fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    /// The terms in this group, in order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The number of terms in this group.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the group holds no terms.
    ///
    /// Groups built by the tokenizer always hold at least one term.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Consume the group and return its terms.
    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }
}

impl fmt::Display for TermGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " OR ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_creation() {
        let term = Term::new("hello");

        assert!(!term.is_exclude());
        assert_eq!(term.attribute(), None);
        assert_eq!(term.text(), "hello");
        assert!(!term.is_phrase());
    }

    #[test]
    fn test_term_with_exclude() {
        let term = Term::new("hello").with_exclude(true);

        assert!(term.is_exclude());
        assert_eq!(term.to_string(), "-hello");
    }

    #[test]
    fn test_term_with_attribute() {
        let term = Term::new("hello").with_attribute("title");

        assert_eq!(term.attribute(), Some("title"));
        assert_eq!(term.to_string(), "title:hello");
    }

    #[test]
    fn test_term_phrase_display() {
        let term = Term::new("red car");

        assert!(term.is_phrase());
        assert_eq!(term.to_string(), "\"red car\"");
    }

    #[test]
    fn test_term_full_display() {
        let term = Term::new("hello").with_exclude(true).with_attribute("body");

        assert_eq!(term.to_string(), "-body:hello");
    }

    #[test]
    fn test_group_creation() {
        let group = TermGroup::new(Term::new("cat"));

        assert_eq!(group.len(), 1);
        assert!(!group.is_empty());
        assert_eq!(group.terms()[0].text(), "cat");
    }

    #[test]
    fn test_group_push_preserves_order() {
        let mut group = TermGroup::new(Term::new("cat"));
        group.push(Term::new("dog"));
        group.push(Term::new("bird"));

        let texts: Vec<_> = group.terms().iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_group_display() {
        let mut group = TermGroup::new(Term::new("cat"));
        group.push(Term::new("dog").with_exclude(true));

        assert_eq!(group.to_string(), "cat OR -dog");
    }

    #[test]
    fn test_group_into_terms() {
        let mut group = TermGroup::new(Term::new("cat"));
        group.push(Term::new("dog"));

        let terms = group.into_terms();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[1].text(), "dog");
    }
}
