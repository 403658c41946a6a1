//! No-op normalizer that passes text through unchanged.

use std::collections::HashSet;

use super::Normalizer;

/// A normalizer that doesn't change the text (no-op).
///
/// This is useful for tests that need to observe raw tokenizer behavior.
#[derive(Clone, Debug, Default)]
pub struct NoopNormalizer;

impl NoopNormalizer {
    /// Create a new no-op normalizer.
    pub fn new() -> Self {
        NoopNormalizer
    }
}

impl Normalizer for NoopNormalizer {
    fn normalize(&self, text: &str, _ignore_words: &HashSet<String>) -> String {
        text.to_string()
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
