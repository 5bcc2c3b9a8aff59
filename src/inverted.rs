// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index from n-gram to occurrences.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **INSERTION_ORDER**: Each bucket lists entries in the order documents
//!    were added. Ranking ties fall back on this order, so never sort a bucket.
//! 2. **NON_EMPTY**: Every key has at least one entry. Removing the last
//!    entry removes the key.
//! 3. **KEY_LENGTH**: Every key is exactly `min_length` folded characters.

use crate::types::{DocumentId, NGram, NGramEntry};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    buckets: HashMap<String, Vec<NGramEntry>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry per n-gram of `doc`.
    pub fn insert(&mut self, doc: &DocumentId, grams: Vec<NGram>) {
        for gram in grams {
            self.buckets
                .entry(gram.substring)
                .or_default()
                .push(NGramEntry {
                    doc: doc.clone(),
                    position: gram.position,
                    ordinal: gram.ordinal,
                });
        }
    }

    /// Drop every entry of `doc` from the buckets named by `grams`.
    ///
    /// `grams` must be the document's own split, so only buckets that can
    /// hold its entries are visited.
    pub fn remove(&mut self, doc: &DocumentId, grams: &[NGram]) {
        for gram in grams {
            if let Some(entries) = self.buckets.get_mut(&gram.substring) {
                entries.retain(|e| &e.doc != doc);
                // INVARIANT: NON_EMPTY
                if entries.is_empty() {
                    self.buckets.remove(&gram.substring);
                }
            }
        }
    }

    /// Entries for an n-gram, empty if the n-gram is not indexed.
    #[inline]
    pub fn bucket(&self, substring: &str) -> &[NGramEntry] {
        self.buckets.get(substring).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NGramEntry])> {
        self.buckets
            .iter()
            .map(|(key, entries)| (key.as_str(), entries.as_slice()))
    }
}
