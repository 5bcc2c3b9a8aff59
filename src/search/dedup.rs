// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collapsing raw occurrences into one result per document.
//!
//! A document can match many times: the same n-gram twice, or once per query
//! token. The filter hands back every occurrence; this module folds them so
//! a document appears at most once.
//!
//! **Invariant**: Each document appears at most once in search results.
//!
//! `ResultMerger` keys strictly by `DocumentId`. The first occurrence creates
//! the result; later ones only append their position to `indices`. In strict
//! mode later occurrences also add their score, since each is an independent
//! exact run. In non-strict mode the tokens of a query describe one fuzzy
//! match, so the first run's score stands.

use crate::scoring::{accumulate, length_ratio_score, rank};
use crate::types::{DocumentId, NGramEntry, SearchResult, StoredDocument};
use std::collections::HashMap;

/// Merges occurrences into per-document results, keyed by document only.
pub struct ResultMerger<'a> {
    store: &'a HashMap<DocumentId, StoredDocument>,
    query_len: usize,
    strict: bool,
    slots: HashMap<DocumentId, usize>,
    results: Vec<SearchResult>,
}

impl<'a> ResultMerger<'a> {
    pub fn new(
        store: &'a HashMap<DocumentId, StoredDocument>,
        query_len: usize,
        strict: bool,
    ) -> Self {
        Self {
            store,
            query_len,
            strict,
            slots: HashMap::new(),
            results: Vec::new(),
        }
    }

    /// Fold one occurrence into its document's result.
    pub fn merge(&mut self, entry: &NGramEntry) {
        let Some(stored) = self.store.get(&entry.doc) else {
            // Entries always reference stored documents; see contracts.
            return;
        };
        let score = length_ratio_score(self.query_len, stored.normalized_len);

        match self.slots.get(&entry.doc) {
            Some(&slot) => {
                let result = &mut self.results[slot];
                result.indices.push(entry.position);
                if self.strict {
                    result.score = accumulate(result.score, score);
                }
            }
            None => {
                self.slots.insert(entry.doc.clone(), self.results.len());
                self.results.push(SearchResult {
                    id: stored.id.clone(),
                    matched: stored.value.clone(),
                    indices: vec![entry.position],
                    score,
                });
            }
        }
    }

    pub fn merge_all<'e>(&mut self, entries: impl IntoIterator<Item = &'e NGramEntry>) {
        for entry in entries {
            self.merge(entry);
        }
    }

    /// Number of distinct documents merged so far.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Finish merging and return results in ranking order.
    pub fn into_sorted(mut self) -> Vec<SearchResult> {
        rank(&mut self.results);
        self.results
    }
}

/// Merge `matches` and rank them.
pub fn dedupe(
    store: &HashMap<DocumentId, StoredDocument>,
    query_len: usize,
    matches: &[NGramEntry],
    strict: bool,
) -> Vec<SearchResult> {
    let mut merger = ResultMerger::new(store, query_len, strict);
    merger.merge_all(matches);
    merger.into_sorted()
}
