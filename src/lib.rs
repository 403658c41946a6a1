//! # Quarry
//!
//! A search query tokenizer for full-text search pipelines.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Single-pass tokenization of user-typed search queries
//! - Exclusions, attribute scopes, quoted phrases, and OR groups
//! - Pluggable keyword normalization
//! - Full-text eligibility detection with configurable stop words

pub mod analysis;
pub mod cli;
pub mod error;
pub mod query;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::analysis::normalizer::Normalizer;
    pub use crate::analysis::normalizer::noop::NoopNormalizer;
    pub use crate::analysis::normalizer::standard::StandardNormalizer;
    pub use crate::error::{QuarryError, Result};
    pub use crate::query::{
        QueryTokenizer, QueryTokenizerConfig, SearchQuery, Term, TermGroup, Token,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
