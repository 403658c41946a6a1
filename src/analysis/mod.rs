//! Text analysis module for Quarry.
//!
//! This module provides the keyword normalization used by query
//! tokenization: case folding, diacritic and punctuation stripping, and
//! ignore-word removal behind a pluggable trait.

pub mod normalizer;

// Re-export commonly used types
pub use normalizer::*;
