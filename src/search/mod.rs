// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query resolution: intersect, then merge and rank.
//!
//! ```text
//! query ─▶ normalize ─▶ split ─▶ filter ─▶ dedupe ─▶ ranked results
//!                                 (runs)    (per doc)
//! ```

pub mod dedup;
pub mod filter;

pub use dedup::{dedupe, ResultMerger};
pub use filter::filter;

use crate::inverted::InvertedIndex;
use crate::types::{DocumentId, NGram, SearchResult, StoredDocument};
use std::collections::HashMap;

/// Resolve already-split subqueries against an index.
///
/// `query_len` is the normalized length of the whole query, the numerator
/// of every score.
pub fn search_grams(
    inverted: &InvertedIndex,
    store: &HashMap<DocumentId, StoredDocument>,
    subqueries: &[NGram],
    query_len: usize,
    strict: bool,
) -> Vec<SearchResult> {
    let matches = filter(inverted, subqueries);
    tracing::trace!(
        subqueries = subqueries.len(),
        matches = matches.len(),
        "filtered query"
    );
    dedupe(store, query_len, &matches, strict)
}
