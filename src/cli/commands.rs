//! Command implementations for the Quarry CLI.

use std::collections::HashSet;

use crate::analysis::normalizer::Normalizer;
use crate::analysis::normalizer::standard::StandardNormalizer;
use crate::cli::args::{Command, NormalizeArgs, QuarryArgs, TokenizeArgs};
use crate::cli::output::{
    NormalizationResult, TokenizationResult, print_normalization, print_tokenization,
};
use crate::error::Result;
use crate::query::{QueryTokenizer, QueryTokenizerConfig};

/// Execute a CLI command.
pub fn execute_command(args: QuarryArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize_query(tokenize_args.clone(), &args),
        Command::Normalize(normalize_args) => normalize_text(normalize_args.clone(), &args),
    }
}

/// Tokenize a query string and print the token sequence.
fn tokenize_query(args: TokenizeArgs, cli_args: &QuarryArgs) -> Result<()> {
    let mut config = QueryTokenizerConfig {
        ignore_words: args.ignore_words.into_iter().collect(),
        min_word_len: args.min_word_len,
        ..Default::default()
    };
    if let Some(stop_words) = args.stop_words {
        config.stop_words = stop_words.into_iter().collect();
    }

    let tokenizer = QueryTokenizer::new().with_config(config);
    let result = tokenizer.tokenize(&args.query)?;

    print_tokenization(&TokenizationResult::from(result), cli_args)
}

/// Normalize keyword text and print the result.
fn normalize_text(args: NormalizeArgs, cli_args: &QuarryArgs) -> Result<()> {
    let normalizer = StandardNormalizer::new();
    let ignore_words: HashSet<String> = args.ignore_words.into_iter().collect();
    let normalized = normalizer.normalize(&args.text, &ignore_words);

    print_normalization(
        &NormalizationResult {
            input: args.text,
            normalized,
        },
        cli_args,
    )
}
