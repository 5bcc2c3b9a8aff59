// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzzgram command-line interface.
//!
//! Two subcommands: `search` loads a JSON corpus into a fresh index and runs
//! one query against it, and `grams` shows how a string decomposes into
//! n-grams. Both accept the same index options, either as flags or from a
//! JSON options file (flags win).

pub mod display;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fuzzgram::IndexOptions;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "fuzzgram",
    about = "Fuzzy n-gram full-text search over JSON documents",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index a JSON corpus and search it
    Search {
        /// JSON array or JSON-lines file of documents
        file: PathBuf,

        /// Search query
        query: String,

        /// Document field to index
        #[arg(short, long)]
        key: String,

        #[command(flatten)]
        index: IndexArgs,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the n-gram decomposition of a string
    Grams {
        /// Text to split
        text: String,

        #[command(flatten)]
        index: IndexArgs,
    },
}

/// Index options shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct IndexArgs {
    /// JSON file with index options (idKey, minLength, caseSensitive, strict)
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Document field holding the id
    #[arg(long)]
    pub id_key: Option<String>,

    /// N-gram length
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Do not fold case
    #[arg(long)]
    pub case_sensitive: bool,

    /// Treat whitespace as punctuation and sum repeated matches
    #[arg(long)]
    pub strict: bool,
}

impl IndexArgs {
    /// Options file first, then flags on top.
    pub fn resolve(&self) -> Result<IndexOptions> {
        let mut options = match &self.options {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("reading options {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing options {}", path.display()))?
            }
            None => IndexOptions::default(),
        };

        if let Some(id_key) = &self.id_key {
            options.id_key = id_key.clone();
        }
        if let Some(min_length) = self.min_length {
            options.min_length = min_length;
        }
        options.case_sensitive |= self.case_sensitive;
        options.strict |= self.strict;
        Ok(options)
    }
}

/// Read documents from a JSON array or, failing that, JSON lines.
pub fn load_documents(path: &Path) -> Result<Vec<Value>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_documents(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn parse_documents(raw: &str) -> Result<Vec<Value>> {
    if let Ok(Value::Array(docs)) = serde_json::from_str::<Value>(raw) {
        return Ok(docs);
    }

    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str(line).with_context(|| format!("line {}", n + 1))
        })
        .collect()
}
