// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries at a small fixed index to verify search never
//! panics and never returns malformed or mis-ranked results.

#![no_main]

use fuzzgram::{Error, IndexOptions, NgramIndex};
use libfuzzer_sys::fuzz_target;
use serde_json::json;
use std::collections::HashSet;
use std::sync::OnceLock;

const CORPUS: &[&str] = &[
    "The King's Arms",
    "The Red Lion",
    "Kings Head",
    "Queen's Arms Hotel",
    "mañana",
    "東京タワー",
    "ﬁnance ＡＢＣＤ",
    "a-b-c d.e.f",
];

fn build(strict: bool) -> NgramIndex {
    let options = IndexOptions {
        strict,
        ..IndexOptions::default()
    };
    let mut index = NgramIndex::with_options("name", options).expect("valid options");
    for (id, name) in CORPUS.iter().enumerate() {
        index
            .add(&json!({ "_id": id, "name": name }))
            .expect("valid document");
    }
    index
}

fuzz_target!(|query: &[u8]| {
    static INDEXES: OnceLock<[NgramIndex; 2]> = OnceLock::new();
    let indexes = INDEXES.get_or_init(|| [build(false), build(true)]);

    let query = String::from_utf8_lossy(query);
    // Cap query length to avoid timeout
    let query: String = query.chars().take(200).collect();

    for index in indexes {
        let results = match index.search(&query) {
            Ok(results) => results,
            // INVARIANT 1: the only rejection is a too-short query
            Err(Error::InvalidArgument(_)) => continue,
            Err(e) => panic!("unexpected error {:?}", e),
        };

        // INVARIANT 2: results are well formed
        for result in &results {
            assert!(result.score <= 100);
            assert!(!result.indices.is_empty());
            assert!(index.contains(&result.id));
        }

        // INVARIANT 3: score descending, then first index ascending
        for pair in results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.score > b.score || (a.score == b.score && a.indices[0] <= b.indices[0]));
        }

        // INVARIANT 4: no duplicate documents
        let mut seen = HashSet::new();
        for result in &results {
            assert!(seen.insert(result.id.to_string()), "duplicate id {}", result.id);
        }
    }
});
