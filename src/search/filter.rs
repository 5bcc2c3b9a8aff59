// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positional intersection of a query's n-grams against the index.
//!
//! A query is processed in runs. A run starts with one subquery whose whole
//! bucket (optionally narrowed to one document) forms the candidate set. Each
//! following subquery keeps only candidates that continue the run: the
//! subquery's bucket must hold the same document at `ordinal + step`, where
//! `step` is the subquery's offset from the run start. That is contiguous
//! adjacency within one token, punctuation skips included.
//!
//! A subquery flagged `token_start` (non-strict queries only) closes the run.
//! Its candidates are emitted as matches, and a new run begins at that
//! subquery, restricted to the document of the first surviving candidate.
//! Later tokens must therefore occur in the same document as the first
//! token, but not next to it.
//!
//! ```text
//! query  "kin arm"   runs: [kin]  [arm]
//!                            │      └─ restricted to doc of first "kin" hit
//!                            └─ all "kin" hits
//! ```
//!
//! When a run's candidate set empties, filtering stops and the matches of
//! earlier runs are returned as they are.

use crate::inverted::InvertedIndex;
use crate::types::{DocumentId, NGram, NGramEntry};
use std::collections::HashSet;

/// Find the occurrences that satisfy the query's adjacency requirements.
///
/// Matches are returned run by run, in bucket (insertion) order within a run.
pub fn filter(index: &InvertedIndex, subqueries: &[NGram]) -> Vec<NGramEntry> {
    let mut matches = Vec::new();
    let mut restrict: Option<DocumentId> = None;
    let mut run = subqueries;

    while let Some((first, rest)) = run.split_first() {
        let mut candidates: Vec<NGramEntry> = index
            .bucket(&first.substring)
            .iter()
            .filter(|e| restrict.as_ref().map_or(true, |doc| &e.doc == doc))
            .cloned()
            .collect();

        let mut next_run = None;
        for (offset, subquery) in rest.iter().enumerate() {
            if candidates.is_empty() {
                break;
            }
            if subquery.token_start {
                restrict = Some(candidates[0].doc.clone());
                next_run = Some(&rest[offset..]);
                break;
            }

            let step = offset + 1;
            let following: HashSet<(&DocumentId, usize)> = index
                .bucket(&subquery.substring)
                .iter()
                .map(|e| (&e.doc, e.ordinal))
                .collect();
            candidates.retain(|c| following.contains(&(&c.doc, c.ordinal + step)));
        }

        matches.append(&mut candidates);
        match next_run {
            Some(next) => run = next,
            None => break,
        }
    }

    matches
}
