// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;
use fuzzgram::{normalize, split, NgramIndex};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{format_grams, format_results};
use cli::{load_documents, Cli, Commands, IndexArgs};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fuzzgram=warn")),
        )
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            key,
            index,
            limit,
            json,
        } => run_search(&file, &query, &key, &index, limit, json),
        Commands::Grams { text, index } => run_grams(&text, &index),
    };

    if let Err(e) = outcome {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run_search(
    file: &std::path::Path,
    query: &str,
    key: &str,
    args: &IndexArgs,
    limit: usize,
    json: bool,
) -> Result<()> {
    let options = args.resolve()?;
    let docs = load_documents(file)?;

    let mut index = NgramIndex::with_options(key, options)?;
    index.add_all(&docs)?;
    tracing::info!(
        documents = docs.len(),
        indexed = index.len(),
        grams = index.gram_count(),
        "loaded corpus"
    );

    let results = index.search(query)?;
    if json {
        let shown = &results[..results.len().min(limit)];
        println!("{}", serde_json::to_string_pretty(shown)?);
    } else {
        print!("{}", format_results(query, &results, limit));
    }
    Ok(())
}

fn run_grams(text: &str, args: &IndexArgs) -> Result<()> {
    let options = args.resolve()?;
    options.validate()?;
    let grams = split(&normalize(text), &options);
    print!("{}", format_grams(&grams));
    Ok(())
}
