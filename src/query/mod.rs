//! Query tokenization for search strings.
//!
//! This module parses raw search queries into the ordered token structure
//! that downstream matching engines translate into storage-specific filter
//! conditions. See [`QueryTokenizer`] for the syntax and the parsing rules.

pub mod stopwords;
pub mod term;
pub mod token;
pub mod tokenizer;

pub use self::stopwords::{DEFAULT_FULLTEXT_STOP_WORDS, DEFAULT_FULLTEXT_STOP_WORDS_SET};
pub use self::term::{Term, TermGroup};
pub use self::token::{SearchQuery, Token};
pub use self::tokenizer::{DEFAULT_MIN_WORD_LEN, QueryTokenizer, QueryTokenizerConfig};
