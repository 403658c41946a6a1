//! Criterion benchmarks for the Quarry tokenizer.
//!
//! This module contains benchmarks for the major components of the crate:
//! - Query tokenization (plain terms, operators, quoted phrases)
//! - Keyword normalization

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use quarry::analysis::normalizer::Normalizer;
use quarry::analysis::normalizer::standard::StandardNormalizer;
use quarry::query::{QueryTokenizer, QueryTokenizerConfig};
use std::collections::HashSet;
use std::hint::black_box;

/// Generate test queries for benchmarking.
fn generate_test_queries(count: usize) -> Vec<String> {
    let words = vec![
        "search", "engine", "full", "text", "index", "query", "document", "field", "term",
        "phrase", "boolean", "ranking", "relevance", "score", "analysis", "tokenization",
        "normalization", "filtering", "caching", "storage", "retrieval", "performance",
        "elephant", "salty", "sweet", "title", "body", "author",
    ];

    let mut queries = Vec::with_capacity(count);
    for i in 0..count {
        let query_length = 3 + (i % 6);
        let mut parts = Vec::with_capacity(query_length);

        for j in 0..query_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            let word = words[word_idx];

            // Mix in the query syntax the tokenizer has to handle
            match (i + j) % 7 {
                0 => parts.push(format!("-{word}")),
                1 => parts.push(format!("title:{word}")),
                2 => parts.push(format!("\"{} {}\"", word, words[(word_idx + 1) % words.len()])),
                3 if j > 0 => {
                    parts.push("OR".to_string());
                    parts.push(word.to_string());
                }
                _ => parts.push(word.to_string()),
            }
        }

        queries.push(parts.join(" "));
    }

    queries
}

/// Benchmark query tokenization.
fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");

    let tokenizer = QueryTokenizer::new();
    let queries = generate_test_queries(1000);

    // Single query tokenization
    group.bench_function("tokenize_single_query", |b| {
        b.iter(|| {
            let result = tokenizer.tokenize(black_box(&queries[0]));
            black_box(result)
        })
    });

    // Batch query tokenization
    group.throughput(Throughput::Elements(100));
    group.bench_function("tokenize_batch_queries", |b| {
        b.iter(|| {
            for query in queries.iter().take(100) {
                let result = tokenizer.tokenize(black_box(query));
                let _ = black_box(result);
            }
        })
    });

    // Queries with ignore words configured
    let tokenizer_with_ignore = QueryTokenizer::new().with_config(QueryTokenizerConfig {
        ignore_words: ["the".to_string(), "a".to_string(), "of".to_string()].into(),
        ..Default::default()
    });
    group.bench_function("tokenize_with_ignore_words", |b| {
        b.iter(|| {
            let result = tokenizer_with_ignore.tokenize(black_box(&queries[1]));
            black_box(result)
        })
    });

    group.finish();
}

/// Benchmark keyword normalization.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    let normalizer = StandardNormalizer::new();
    let no_ignore = HashSet::new();
    let ignore: HashSet<String> = ["the".to_string(), "a".to_string()].into();

    // Plain ASCII text
    group.bench_function("normalize_ascii", |b| {
        b.iter(|| {
            let result = normalizer.normalize(black_box("The Quick Brown Fox"), &no_ignore);
            black_box(result)
        })
    });

    // Text with diacritics and punctuation
    group.bench_function("normalize_accented", |b| {
        b.iter(|| {
            let result = normalizer.normalize(black_box("Déjà-vu, naïve café!"), &no_ignore);
            black_box(result)
        })
    });

    // Text with ignore words configured
    group.bench_function("normalize_with_ignore_words", |b| {
        b.iter(|| {
            let result = normalizer.normalize(black_box("the speed of a search engine"), &ignore);
            black_box(result)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_normalization);
criterion_main!(benches);
