//! Standard keyword normalizer.

use std::collections::HashSet;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::Normalizer;

/// The default keyword normalizer.
///
/// Normalization lowercases the text, folds diacritics to their ASCII base
/// characters, replaces punctuation and symbols with spaces, strips the
/// configured ignore words, and collapses the remaining whitespace. The
/// result contains only lowercase alphanumeric words separated by single
/// spaces, which makes term comparisons independent of how the user typed
/// the query.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use quarry::analysis::normalizer::Normalizer;
/// use quarry::analysis::normalizer::standard::StandardNormalizer;
///
/// let normalizer = StandardNormalizer::new();
/// let ignore: HashSet<String> = ["the".to_string()].into();
///
/// assert_eq!(normalizer.normalize("The  Déjà-Vu!", &ignore), "deja vu");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StandardNormalizer;

impl StandardNormalizer {
    /// Create a new standard normalizer.
    pub fn new() -> Self {
        StandardNormalizer
    }

    /// Lowercase, fold diacritics, and map punctuation and symbols to spaces.
    fn fold(text: &str) -> String {
        text.to_lowercase()
            .nfkd()
            .filter(|c| !is_combining_mark(*c))
            .map(|c| {
                if c.is_alphanumeric() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    /// Collapse whitespace runs to single spaces and trim.
    fn collapse(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Normalizer for StandardNormalizer {
    fn normalize(&self, text: &str, ignore_words: &HashSet<String>) -> String {
        let mut folded = Self::fold(text);

        for word in ignore_words {
            // Ignore entries may be raw, so they get the same folding before
            // whole-word removal.
            let word = Self::collapse(&Self::fold(word));
            if word.is_empty() {
                continue;
            }
            if let Ok(pattern) = Regex::new(&format!(r"\b{}\b", regex::escape(&word))) {
                folded = pattern.replace_all(&folded, "").into_owned();
            }
        }

        Self::collapse(&folded)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_ignore() -> HashSet<String> {
        HashSet::new()
    }

    fn ignore(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_lowercases() {
        let normalizer = StandardNormalizer::new();
        assert_eq!(normalizer.normalize("Hello World", &no_ignore()), "hello world");
    }

    #[test]
    fn test_folds_diacritics() {
        let normalizer = StandardNormalizer::new();
        assert_eq!(normalizer.normalize("Café", &no_ignore()), "cafe");
        assert_eq!(normalizer.normalize("Zürich", &no_ignore()), "zurich");
        assert_eq!(normalizer.normalize("naïve", &no_ignore()), "naive");
    }

    #[test]
    fn test_strips_punctuation() {
        let normalizer = StandardNormalizer::new();
        assert_eq!(normalizer.normalize("it's", &no_ignore()), "it s");
        assert_eq!(normalizer.normalize("red-car", &no_ignore()), "red car");
        assert_eq!(normalizer.normalize("!!!", &no_ignore()), "");
    }

    #[test]
    fn test_keeps_digits() {
        let normalizer = StandardNormalizer::new();
        assert_eq!(normalizer.normalize("route 66", &no_ignore()), "route 66");
    }

    #[test]
    fn test_collapses_whitespace() {
        let normalizer = StandardNormalizer::new();
        assert_eq!(normalizer.normalize("  a \t b\nc  ", &no_ignore()), "a b c");
    }

    #[test]
    fn test_removes_ignore_words() {
        let normalizer = StandardNormalizer::new();
        assert_eq!(normalizer.normalize("the cat", &ignore(&["the"])), "cat");
        assert_eq!(normalizer.normalize("the", &ignore(&["the"])), "");
    }

    #[test]
    fn test_ignore_words_are_normalized() {
        let normalizer = StandardNormalizer::new();
        // A raw, capitalized ignore entry still matches.
        assert_eq!(normalizer.normalize("the cat", &ignore(&["The"])), "cat");
    }

    #[test]
    fn test_ignore_matches_whole_words_only() {
        let normalizer = StandardNormalizer::new();
        assert_eq!(
            normalizer.normalize("theater tickets", &ignore(&["the"])),
            "theater tickets"
        );
    }

    #[test]
    fn test_empty_input() {
        let normalizer = StandardNormalizer::new();
        assert_eq!(normalizer.normalize("", &no_ignore()), "");
    }

    #[test]
    fn test_name() {
        assert_eq!(StandardNormalizer::new().name(), "standard");
    }
}
