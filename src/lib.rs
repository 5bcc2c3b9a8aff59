// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-process fuzzy full-text search over fixed-length character n-grams.
//!
//! Documents are decomposed into n-grams and stored in an inverted index.
//! Queries are decomposed the same way and resolved by positional
//! intersection, so a query matches any document holding it as a
//! (punctuation-tolerant) substring. Results carry a length-ratio score.
//!
//! The index is a secondary structure. The host application owns the system
//! of record and is solely responsible for keeping the index in sync with it,
//! including repopulating it after a restart: nothing is persisted.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   utils.rs   │────▶│   ngram.rs   │────▶│ inverted.rs  │
//! │ (normalize,  │     │   (split)    │     │  (buckets)   │
//! │  fold, skip) │     └──────────────┘     └──────────────┘
//! └──────────────┘            │                    │
//!                             ▼                    ▼
//! ┌──────────────┐     ┌─────────────────────────────────┐
//! │   index.rs   │────▶│ search/filter ─▶ search/dedup   │
//! │ (NgramIndex) │     │            scoring.rs           │
//! └──────────────┘     └─────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use fuzzgram::NgramIndex;
//! use serde_json::json;
//!
//! let mut index = NgramIndex::new("foo").unwrap();
//! index.add(&json!({ "_id": 0, "foo": "bar" })).unwrap();
//! index.add(&json!({ "_id": 1, "foo": "barb" })).unwrap();
//!
//! let results = index.search("bar").unwrap();
//! assert_eq!(results[0].id, json!(0));
//! assert_eq!(results[0].score, 100);
//! assert_eq!(results[1].score, 75);
//! ```
//!
//! # Modes
//!
//! | Option           | Effect                                                      |
//! |------------------|-------------------------------------------------------------|
//! | `min_length`     | n-gram length and shortest searchable text (default 3)      |
//! | `case_sensitive` | no case folding                                             |
//! | `strict`         | whitespace is plain punctuation; repeated runs add scores   |
//!
//! In the default (non-strict) mode whitespace separates query tokens. The
//! first token is matched anywhere; later tokens must occur somewhere in the
//! same document as the first token's first hit.

// Module declarations
pub mod contracts;
mod error;
mod index;
mod inverted;
mod ngram;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use error::{Error, Result};
pub use index::{IdCoercion, IndexBuilder, NgramIndex};
pub use inverted::InvertedIndex;
pub use ngram::split;
pub use types::{
    DocumentId, IndexOptions, NGram, NGramEntry, SearchResult, StoredDocument, DEFAULT_ID_KEY,
    DEFAULT_MIN_LENGTH,
};
pub use utils::{fold, is_insignificant, is_token_break, normalize, normalized_len};
