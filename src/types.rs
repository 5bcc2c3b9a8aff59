// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of an n-gram index.
//!
//! | Type           | Purpose                                              |
//! |----------------|------------------------------------------------------|
//! | `DocumentId`   | Hashable identity of a coerced document id           |
//! | `NGram`        | One unit produced by the splitter (also a subquery)  |
//! | `NGramEntry`   | One occurrence of an n-gram inside a document        |
//! | `SearchResult` | One ranked hit per matching document                 |
//! | `IndexOptions` | Fixed-for-life configuration of an index             |
//!
//! # Invariants
//!
//! - **NGramEntry**: `position` indexes the document's normalized characters;
//!   `ordinal` counts emitted n-grams. They diverge once punctuation is skipped,
//!   and the filter relies on `ordinal` for adjacency.
//! - **SearchResult**: `indices` is non-empty and in match order; `score <= 100`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

// =============================================================================
// DOCUMENT IDENTITY
// =============================================================================

/// Comparable identity of a document, derived from its coerced id.
///
/// JSON values are not `Hash`, so the key is the canonical serialization of
/// the coerced value. `serde_json::Map` keeps keys sorted, which makes object
/// ids canonical too. Cloning is cheap: every n-gram entry holds one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(Arc<str>);

impl DocumentId {
    /// Key a coerced id. Returns `None` for `null`, which is never a valid id.
    pub fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }
        Some(DocumentId(Arc::from(value.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// N-GRAMS
// =============================================================================

/// A fixed-length run of significant, folded characters.
///
/// Produced by [`crate::split`] for documents and queries alike. For a query,
/// each `NGram` is a subquery handed to the intersection filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NGram {
    /// The folded characters, `min_length` of them.
    pub substring: String,
    /// 0-based count of n-grams emitted before this one.
    pub ordinal: usize,
    /// Index into the normalized character sequence where the window starts.
    pub position: usize,
    /// Non-strict only: this n-gram begins a new whitespace-separated token.
    pub token_start: bool,
}

/// One occurrence of an n-gram in an indexed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGramEntry {
    pub doc: DocumentId,
    pub position: usize,
    pub ordinal: usize,
}

/// What the canonical store keeps for an indexed document.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// The coerced id, echoed back in results.
    pub id: Value,
    /// The original, un-normalized value.
    pub value: String,
    /// Character count of `value` after normalization; the score denominator.
    pub normalized_len: usize,
}

// =============================================================================
// RESULTS
// =============================================================================

/// A ranked search hit. Each document appears at most once per search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The coerced document id.
    pub id: Value,
    /// The original, un-normalized indexed value.
    #[serde(rename = "match")]
    pub matched: String,
    /// Character positions where each matched run began, in match order.
    pub indices: Vec<usize>,
    /// Length-ratio relevance in `0..=100`.
    pub score: u32,
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Index configuration. Fixed for the lifetime of an index.
///
/// Deserializes from camelCase JSON with every field optional:
///
/// ```
/// let options: fuzzgram::IndexOptions =
///     serde_json::from_str(r#"{ "minLength": 4, "strict": true }"#).unwrap();
/// assert_eq!(options.id_key, "_id");
/// assert_eq!(options.min_length, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexOptions {
    /// Document field holding the id.
    pub id_key: String,
    /// N-gram length, and the minimum searchable length.
    pub min_length: usize,
    /// Disable case folding.
    pub case_sensitive: bool,
    /// Disable whitespace token splitting; sum scores of repeated runs.
    pub strict: bool,
}

pub const DEFAULT_ID_KEY: &str = "_id";
pub const DEFAULT_MIN_LENGTH: usize = 3;

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            id_key: DEFAULT_ID_KEY.to_string(),
            min_length: DEFAULT_MIN_LENGTH,
            case_sensitive: false,
            strict: false,
        }
    }
}

impl IndexOptions {
    pub fn validate(&self) -> Result<()> {
        if self.id_key.is_empty() {
            return Err(Error::InvalidArgument("idKey must not be empty".into()));
        }
        if self.min_length == 0 {
            return Err(Error::InvalidArgument(
                "minLength must be a positive integer".into(),
            ));
        }
        Ok(())
    }
}
