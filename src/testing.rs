// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::NgramIndex;
use crate::types::{IndexOptions, SearchResult};
use serde_json::{json, Value};

/// Field every test document stores its text under.
pub const TEST_FIELD: &str = "foo";

/// Create a test document `{ "_id": id, "foo": text }`.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: impl Into<Value>, text: &str) -> Value {
    let id: Value = id.into();
    json!({ "_id": id, "foo": text })
}

/// Build an index over `texts`, using each text's position as its id.
pub fn build_test_index(texts: &[&str], options: IndexOptions) -> NgramIndex {
    let mut index = NgramIndex::with_options(TEST_FIELD, options)
        .expect("test options must be valid");
    for (id, text) in texts.iter().enumerate() {
        index
            .add(&make_doc(id, text))
            .expect("test documents must be valid");
    }
    index
}

/// Options with strict mode on.
pub fn strict_options() -> IndexOptions {
    IndexOptions {
        strict: true,
        ..IndexOptions::default()
    }
}

/// The ids of `results`, in ranking order.
pub fn result_ids(results: &[SearchResult]) -> Vec<Value> {
    results.iter().map(|r| r.id.clone()).collect()
}
