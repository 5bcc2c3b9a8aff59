// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Length-ratio relevance and result ordering.
//!
//! A match is worth the share of the stored value the query covers:
//! `round(query_len / value_len * 100)`, both lengths counted in normalized
//! characters. An exact whole-value match scores 100; "bar" in "barb" scores 75.
//!
//! # Key Invariant: Ordering
//!
//! ```text
//! score descending, then first index ascending, then insertion order
//! ```
//!
//! The sort is stable, so documents with equal score and first index keep
//! the order in which their matches were found.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Upper bound of a score.
pub const MAX_SCORE: u32 = 100;

/// Score one match of a query against a stored value.
///
/// Rounds half up and clamps to [`MAX_SCORE`]: a multi-token query may be
/// longer than the value it matches.
#[inline]
pub fn length_ratio_score(query_len: usize, value_len: usize) -> u32 {
    if value_len == 0 {
        return 0;
    }
    let ratio = query_len as f64 / value_len as f64;
    ((ratio * 100.0).round() as u32).min(MAX_SCORE)
}

/// Add a further run's score to a running strict-mode total.
#[inline]
pub fn accumulate(total: u32, score: u32) -> u32 {
    total.saturating_add(score).min(MAX_SCORE)
}

/// Ranking comparator: higher score first, then earlier first match.
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| first_index(a).cmp(&first_index(b)))
}

#[inline]
fn first_index(result: &SearchResult) -> usize {
    result.indices.first().copied().unwrap_or(usize::MAX)
}

/// Sort results into ranking order, in place and stably.
pub fn rank(results: &mut [SearchResult]) {
    results.sort_by(compare_results);
}
