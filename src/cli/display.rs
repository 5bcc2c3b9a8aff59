// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the fuzzgram CLI.
//!
//! Plain text with a little ANSI emphasis. Color is dropped when stdout is
//! not a terminal or `NO_COLOR` is set.

use fuzzgram::{NGram, SearchResult};
use std::io::IsTerminal;
use std::sync::OnceLock;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
}

use colors::*;

static COLOR: OnceLock<bool> = OnceLock::new();

/// Whether to emit ANSI escapes (cached).
pub fn use_color() -> bool {
    *COLOR.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
    })
}

fn paint(text: &str, style: &str) -> String {
    if use_color() {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}

fn score_style(score: u32) -> &'static str {
    if score >= 75 {
        GREEN
    } else if score >= 40 {
        YELLOW
    } else {
        RED
    }
}

/// Render ranked results, one per line.
pub fn format_results(query: &str, results: &[SearchResult], limit: usize) -> String {
    let mut out = String::new();
    out.push_str(&paint(
        &format!("{} result(s) for \"{}\"", results.len(), query),
        BOLD,
    ));
    out.push('\n');

    for (rank, result) in results.iter().take(limit).enumerate() {
        let indices: Vec<String> = result.indices.iter().map(|i| i.to_string()).collect();
        out.push_str(&format!(
            "{:>3}. {} {} {}\n     {}\n",
            rank + 1,
            paint(&format!("{:>3}", result.score), score_style(result.score)),
            result.id,
            paint(&format!("@ {}", indices.join(",")), DIM),
            result.matched,
        ));
    }

    if results.len() > limit {
        out.push_str(&paint(
            &format!("     ... {} more\n", results.len() - limit),
            DIM,
        ));
    }
    out
}

/// Render an n-gram decomposition as a table.
pub fn format_grams(grams: &[NGram]) -> String {
    let mut out = paint("ordinal  position  token  gram", BOLD);
    out.push('\n');
    for gram in grams {
        out.push_str(&format!(
            "{:>7}  {:>8}  {:>5}  {:?}\n",
            gram.ordinal,
            gram.position,
            if gram.token_start { "yes" } else { "" },
            gram.substring,
        ));
    }
    out
}
