//! Search query tokenizer.
//!
//! This module turns a raw, user-typed search string into the ordered token
//! sequence the query-execution layer works with. The tokenizer walks the
//! query left to right, one whitespace-delimited chunk at a time, and
//! recognizes the user-facing query syntax:
//!
//! - `foo bar` - terms combined with AND
//! - `-foo` - exclusion
//! - `attr:foo` - term scoped to an attribute
//! - `"red car"` or `'red car'` - quoted phrase, kept as one term
//! - `foo OR bar` - alternatives collapsed into one [`TermGroup`] slot
//!
//! Malformed input never fails: a bare `-` is dropped, a trailing `OR` ends
//! the parse, and an unterminated phrase absorbs the rest of the query.
//!
//! Every term is cleaned through the configured [`Normalizer`] before it is
//! stored. Alongside the tokens, the tokenizer reports whether the query is
//! eligible for full-text index execution: one term shorter than the
//! configured minimum word length, or found on the stop-word list, downgrades
//! the whole query to a fallback search strategy.
//!
//! # Examples
//!
//! ```
//! use quarry::query::QueryTokenizer;
//!
//! let tokenizer = QueryTokenizer::new();
//! let result = tokenizer.tokenize("body:salty OR sweet").unwrap();
//!
//! assert_eq!(result.tokens().len(), 1);
//! assert!(result.tokens()[0].is_group());
//! assert!(result.is_fulltext_eligible());
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::analysis::normalizer::Normalizer;
use crate::analysis::normalizer::standard::StandardNormalizer;
use crate::error::Result;
use crate::query::stopwords::DEFAULT_FULLTEXT_STOP_WORDS_SET;
use crate::query::term::{Term, TermGroup};
use crate::query::token::{SearchQuery, Token};

/// Default minimum word length for full-text eligibility.
///
/// Full-text indexes commonly skip words shorter than four characters, so a
/// query containing one cannot be answered from the index alone.
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

/// Pattern for attribute-scoped chunks of the form `name:value`.
static ATTRIBUTE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+):(.+)$").expect("attribute pattern should be valid"));

/// Configuration for a [`QueryTokenizer`].
///
/// All knobs are plain values injected at construction time; there are no
/// hidden globals. The defaults match what common full-text engines ship
/// with: no ignore words, the built-in stop-word list, and a minimum word
/// length of four characters.
#[derive(Clone, Debug)]
pub struct QueryTokenizerConfig {
    /// Words stripped from every query entirely, before terms are built.
    pub ignore_words: HashSet<String>,
    /// Words that stay in the query but disqualify full-text eligibility.
    pub stop_words: HashSet<String>,
    /// Minimum term length (in characters) for full-text eligibility.
    pub min_word_len: usize,
}

impl Default for QueryTokenizerConfig {
    fn default() -> Self {
        QueryTokenizerConfig {
            ignore_words: HashSet::new(),
            stop_words: DEFAULT_FULLTEXT_STOP_WORDS_SET.clone(),
            min_word_len: DEFAULT_MIN_WORD_LEN,
        }
    }
}

/// Tokenizer that parses raw search strings into [`SearchQuery`] values.
///
/// Tokenization is a pure function of the input string and the configuration:
/// no state is carried between calls, so one tokenizer instance can serve
/// concurrent callers. The stop-word list is normalized once at construction
/// with the same normalizer the terms go through, keeping eligibility checks
/// consistent however the words were configured.
///
/// # Examples
///
/// ```
/// use quarry::query::QueryTokenizer;
///
/// let tokenizer = QueryTokenizer::new();
/// let result = tokenizer.tokenize("quick \"brown fox\" -jumps").unwrap();
///
/// assert_eq!(result.tokens().len(), 3);
/// assert_eq!(result.tokens()[1].as_term().unwrap().text(), "brown fox");
/// assert!(result.tokens()[2].as_term().unwrap().is_exclude());
/// ```
#[derive(Clone)]
pub struct QueryTokenizer {
    /// The injected configuration.
    config: QueryTokenizerConfig,
    /// The normalizer every term is cleaned through.
    normalizer: Arc<dyn Normalizer>,
    /// Stop words after normalization, compared against normalized term text.
    stop_words: HashSet<String>,
}

impl QueryTokenizer {
    /// Create a new tokenizer with the default configuration and the
    /// standard normalizer.
    pub fn new() -> Self {
        let config = QueryTokenizerConfig::default();
        let normalizer: Arc<dyn Normalizer> = Arc::new(StandardNormalizer::new());
        let stop_words = Self::normalize_stop_words(&config, normalizer.as_ref());

        QueryTokenizer {
            config,
            normalizer,
            stop_words,
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: QueryTokenizerConfig) -> Self {
        self.config = config;
        self.stop_words = Self::normalize_stop_words(&self.config, self.normalizer.as_ref());
        self
    }

    /// Replace the normalizer.
    pub fn with_normalizer(mut self, normalizer: Arc<dyn Normalizer>) -> Self {
        self.normalizer = normalizer;
        self.stop_words = Self::normalize_stop_words(&self.config, self.normalizer.as_ref());
        self
    }

    /// Get the configuration used by this tokenizer.
    pub fn config(&self) -> &QueryTokenizerConfig {
        &self.config
    }

    /// Get the normalizer used by this tokenizer.
    pub fn normalizer(&self) -> &Arc<dyn Normalizer> {
        &self.normalizer
    }

    /// Run the configured stop words through the normalizer so membership
    /// checks compare normalized text with normalized text.
    fn normalize_stop_words(
        config: &QueryTokenizerConfig,
        normalizer: &dyn Normalizer,
    ) -> HashSet<String> {
        let no_ignore = HashSet::new();
        config
            .stop_words
            .iter()
            .map(|word| normalizer.normalize(word, &no_ignore))
            .filter(|word| !word.is_empty())
            .collect()
    }

    /// Tokenize a raw search string.
    ///
    /// Returns the ordered token sequence together with the raw query and
    /// the full-text eligibility flag. Malformed fragments are dropped or
    /// close the parse early; they never produce an error.
    pub fn tokenize(&self, raw: &str) -> Result<SearchQuery> {
        let mut chunks = raw.split(' ').filter(|chunk| !chunk.is_empty());
        let mut tokens: Vec<Token> = Vec::new();
        let mut fulltext_eligible = true;

        while let Some(chunk) = chunks.next() {
            let mut append_to_previous = false;
            let mut working = chunk;

            if working == "OR" {
                // A dangling OR ends the parse; tokens so far are kept.
                let Some(operand) = chunks.next() else {
                    break;
                };
                // The operand is consumed as a plain chunk, never as another
                // operator.
                working = operand;

                // The query may start with OR, in which case there is
                // nothing to group and the operand stands alone.
                if !tokens.is_empty() {
                    let last = tokens.len() - 1;
                    if let Token::Term(term) = &tokens[last] {
                        let group = TermGroup::new(term.clone());
                        tokens[last] = Token::Group(group);
                    }
                    append_to_previous = true;
                }
            }

            let exclude = match working.strip_prefix('-') {
                Some(rest) => {
                    // A bare dash carries no term.
                    if rest.is_empty() {
                        continue;
                    }
                    working = rest;
                    true
                }
                None => false,
            };

            let mut attribute = None;
            if let Some(captures) = ATTRIBUTE_PATTERN.captures(working)
                && let (Some(name), Some(rest)) = (captures.get(1), captures.get(2))
            {
                attribute = Some(name.as_str().to_string());
                working = rest.as_str();
            }

            let term_text = match working.chars().next() {
                Some(quote @ ('"' | '\'')) => {
                    let inner = &working[1..];
                    if inner.is_empty() {
                        // A lone quote opens an empty phrase.
                        String::new()
                    } else if let Some(body) = inner.strip_suffix(quote) {
                        body.to_string()
                    } else {
                        // The phrase spans chunks; it closes at the first
                        // chunk ending with the opening quote character, or
                        // absorbs the rest of the input.
                        let mut phrase = String::from(inner);
                        for part in chunks.by_ref() {
                            phrase.push(' ');
                            if let Some(body) = part.strip_suffix(quote) {
                                phrase.push_str(body);
                                break;
                            }
                            phrase.push_str(part);
                        }
                        phrase
                    }
                }
                _ => working.to_string(),
            };

            let text = self.normalizer.normalize(&term_text, &self.config.ignore_words);
            if text.is_empty() {
                continue;
            }

            // One short or stop-listed term downgrades the whole query;
            // later terms never restore eligibility.
            if fulltext_eligible
                && (text.chars().count() < self.config.min_word_len
                    || self.stop_words.contains(&text))
            {
                fulltext_eligible = false;
            }

            let mut term = Term::new(text).with_exclude(exclude);
            if let Some(attribute) = attribute {
                term = term.with_attribute(attribute);
            }

            match tokens.last_mut() {
                Some(Token::Group(group)) if append_to_previous => group.push(term),
                _ => tokens.push(Token::Term(term)),
            }
        }

        Ok(SearchQuery::new(raw, tokens, fulltext_eligible))
    }
}

impl Default for QueryTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QueryTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryTokenizer")
            .field("config", &self.config)
            .field("normalizer", &self.normalizer.name())
            .finish()
    }
}
