//! Command line argument parsing for the Quarry CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::query::DEFAULT_MIN_WORD_LEN;

/// Quarry - a search query tokenizer
#[derive(Parser, Debug, Clone)]
#[command(name = "quarry")]
#[command(about = "A search query tokenizer for full-text search pipelines")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct QuarryArgs {
    /// Quiet mode (suppress headers in human output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize a search query
    Tokenize(TokenizeArgs),

    /// Normalize keyword text
    Normalize(NormalizeArgs),
}

/// Output formats available in the CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Arguments for tokenizing a query
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Words to strip from the query entirely (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ignore_words: Vec<String>,

    /// Replace the built-in stop-word list (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub stop_words: Option<Vec<String>>,

    /// Minimum word length for full-text eligibility
    #[arg(long, default_value_t = DEFAULT_MIN_WORD_LEN)]
    pub min_word_len: usize,
}

/// Arguments for normalizing text
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Text to normalize
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Words to strip from the text entirely (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ignore_words: Vec<String>,
}
