// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for index and result invariants.
//!
//! Debug-mode assertions that:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                          |
//! |----------------------------|---------------------------------------------------|
//! | `check_index_consistent`   | entries reference stored docs, no empty buckets   |
//! | `check_results_sorted`     | score descending, then first index ascending      |
//! | `check_results_unique`     | each document at most once                        |
//!
//! The index calls these after every mutation and search. The full scans
//! are only compiled into debug builds.

use crate::inverted::InvertedIndex;
use crate::scoring::MAX_SCORE;
use crate::types::{DocumentId, SearchResult, StoredDocument};
use std::collections::HashMap;

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that the inverted index and canonical store agree.
///
/// # Panics (debug builds only)
/// Panics if a bucket is empty, a key has the wrong length, or an entry
/// references a document that is not stored.
#[inline]
pub fn check_index_consistent(
    store: &HashMap<DocumentId, StoredDocument>,
    inverted: &InvertedIndex,
    min_length: usize,
) {
    if !cfg!(debug_assertions) {
        return;
    }

    for (key, entries) in inverted.iter() {
        debug_assert!(
            !entries.is_empty(),
            "Contract violation: bucket '{}' is empty",
            key
        );
        debug_assert_eq!(
            key.chars().count(),
            min_length,
            "Contract violation: key '{}' is not {} characters",
            key,
            min_length
        );
        for entry in entries {
            debug_assert!(
                store.contains_key(&entry.doc),
                "Contract violation: bucket '{}' references unknown document {}",
                key,
                entry.doc
            );
        }
    }

    if store.is_empty() {
        debug_assert!(
            inverted.is_empty(),
            "Contract violation: empty store but {} buckets",
            inverted.len()
        );
    }
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that results are in ranking order with scores in range.
///
/// # Panics (debug builds only)
/// Panics if a result scores above 100, has no indices, or is out of order.
#[inline]
pub fn check_results_sorted(results: &[SearchResult]) {
    for result in results {
        debug_assert!(
            result.score <= MAX_SCORE,
            "Contract violation: score {} > {}",
            result.score,
            MAX_SCORE
        );
        debug_assert!(
            !result.indices.is_empty(),
            "Contract violation: result {} has no indices",
            result.id
        );
    }

    for i in 1..results.len() {
        let prev = &results[i - 1];
        let curr = &results[i];
        debug_assert!(
            prev.score > curr.score
                || (prev.score == curr.score && prev.indices[0] <= curr.indices[0]),
            "Contract violation: results not ranked at position {}: \
             (score {}, index {}) before (score {}, index {})",
            i,
            prev.score,
            prev.indices[0],
            curr.score,
            curr.indices[0]
        );
    }
}

/// Check that no document appears twice.
#[inline]
pub fn check_results_unique(results: &[SearchResult]) {
    if !cfg!(debug_assertions) {
        return;
    }
    let mut seen = std::collections::HashSet::new();
    for result in results {
        debug_assert!(
            seen.insert(result.id.to_string()),
            "Contract violation: document {} appears twice",
            result.id
        );
    }
}
