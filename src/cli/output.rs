//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, QuarryArgs};
use crate::error::Result;
use crate::query::{SearchQuery, Token};

/// Result structure for query tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizationResult {
    pub query: String,
    pub fulltext_eligible: bool,
    pub tokens: Vec<Token>,
}

impl From<SearchQuery> for TokenizationResult {
    fn from(result: SearchQuery) -> Self {
        TokenizationResult {
            query: result.query().to_string(),
            fulltext_eligible: result.is_fulltext_eligible(),
            tokens: result.into_tokens(),
        }
    }
}

/// Result structure for keyword normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizationResult {
    pub input: String,
    pub normalized: String,
}

/// Print a tokenization result in the selected format.
pub fn print_tokenization(result: &TokenizationResult, args: &QuarryArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                println!("query: {}", result.query);
                println!("fulltext eligible: {}", result.fulltext_eligible);
                println!("tokens: {}", result.tokens.len());
            }
            for token in &result.tokens {
                match token {
                    Token::Term(term) => println!("  term   {term}"),
                    Token::Group(group) => println!("  group  {group}"),
                }
            }
            Ok(())
        }
        OutputFormat::Json => print_json(result, args),
    }
}

/// Print a normalization result in the selected format.
pub fn print_normalization(result: &NormalizationResult, args: &QuarryArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                println!("input: {}", result.input);
            }
            println!("{}", result.normalized);
            Ok(())
        }
        OutputFormat::Json => print_json(result, args),
    }
}

/// Print any serializable result as JSON.
fn print_json<T: Serialize>(result: &T, args: &QuarryArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryTokenizer;

    #[test]
    fn test_tokenization_result_from_search_query() {
        let query = QueryTokenizer::new().tokenize("salty OR sweet").unwrap();
        let result = TokenizationResult::from(query);

        assert_eq!(result.query, "salty OR sweet");
        assert!(result.fulltext_eligible);
        assert_eq!(result.tokens.len(), 1);
    }

    #[test]
    fn test_tokenization_result_serializes() {
        let query = QueryTokenizer::new().tokenize("-title:sweet").unwrap();
        let result = TokenizationResult::from(query);

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"fulltext_eligible\":true"));
        assert!(json.contains("sweet"));
    }
}
