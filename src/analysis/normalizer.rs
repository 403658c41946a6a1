//! Keyword normalizer implementations.
//!
//! This module provides normalizers that clean up term text before it is
//! stored in a token: case folding, diacritic and punctuation stripping, and
//! removal of configured ignore words. The tokenizer runs every term through
//! its normalizer, so the same implementation must be used for query terms
//! and for any precomputed word lists they are compared against.
//!
//! # Available Normalizers
//!
//! - [`standard::StandardNormalizer`] - the default keyword normalizer
//! - [`noop::NoopNormalizer`] - passes text through unchanged
//!
//! # Examples
//!
//! ```
//! use std::collections::HashSet;
//!
//! use quarry::analysis::normalizer::Normalizer;
//! use quarry::analysis::normalizer::standard::StandardNormalizer;
//!
//! let normalizer = StandardNormalizer::new();
//! let ignore = HashSet::new();
//!
//! assert_eq!(normalizer.normalize("Café!", &ignore), "cafe");
//! ```

use std::collections::HashSet;

/// Trait for normalizers that clean up keyword text.
///
/// Implementations are pure functions: the same input and ignore list always
/// produce the same output, and no state is carried between calls. The
/// returned string may be empty; callers are expected to drop empty results.
pub trait Normalizer: Send + Sync {
    /// Normalize the input text, removing any of the given ignore words.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to normalize
    /// * `ignore_words` - Words to strip from the text entirely; entries may
    ///   be raw (un-normalized) and are matched as whole words
    fn normalize(&self, text: &str, ignore_words: &HashSet<String>) -> String;

    /// Get the name of this normalizer.
    fn name(&self) -> &'static str;
}

pub mod noop;
pub mod standard;
