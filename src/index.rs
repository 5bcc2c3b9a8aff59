// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The n-gram index: canonical store plus inverted index.
//!
//! `NgramIndex` owns all state. There are no globals, so any number of
//! indexes can coexist, each with its own fixed configuration.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **STORED_IFF_SEARCHABLE**: A document is in the store iff it was added,
//!    not deleted since, and its normalized value has at least `min_length`
//!    characters. Shorter values are accepted but leave no trace, so their
//!    id stays free.
//! 2. **ENTRIES_REFERENCE_STORE**: Every inverted-index entry names a stored
//!    document. `delete` removes all of a document's entries and any bucket
//!    left empty.
//! 3. **FIXED_CONFIG**: Target key, options and id coercion are set once by
//!    [`IndexBuilder::build`] and never change.
//!
//! # Lifecycle
//!
//! ```text
//! add ──▶ stored ──delete──▶ gone
//!           │
//!           └─update = delete, then add (no rollback if add fails)
//! ```
//!
//! # Threading
//!
//! All operations are synchronous. Mutation takes `&mut self`; wrap the
//! index in a lock to share it between threads.

use crate::contracts::{check_index_consistent, check_results_sorted, check_results_unique};
use crate::error::{Error, Result};
use crate::inverted::InvertedIndex;
use crate::ngram::split;
use crate::search::search_grams;
use crate::types::{DocumentId, IndexOptions, NGram, SearchResult, StoredDocument};
use crate::utils::normalize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Maps a raw document id to the id that is stored, compared and returned.
pub type IdCoercion = Box<dyn Fn(&Value) -> Value + Send + Sync>;

/// Configures and creates an [`NgramIndex`].
///
/// ```
/// use fuzzgram::NgramIndex;
/// use serde_json::json;
///
/// let mut index = NgramIndex::builder("name")
///     .id_key("id")
///     .min_length(2)
///     .build()
///     .unwrap();
/// index.add(&json!({ "id": 1, "name": "Ada" })).unwrap();
/// assert_eq!(index.search("ad").unwrap()[0].id, json!(1));
/// ```
pub struct IndexBuilder {
    target_key: String,
    options: IndexOptions,
    coerce_id: Option<IdCoercion>,
}

impl IndexBuilder {
    /// Replace all options at once, e.g. with values loaded from a config file.
    pub fn options(mut self, options: IndexOptions) -> Self {
        self.options = options;
        self
    }

    pub fn id_key(mut self, id_key: impl Into<String>) -> Self {
        self.options.id_key = id_key.into();
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.options.min_length = min_length;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.options.case_sensitive = case_sensitive;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Coerce every id crossing the API: on add, delete, update and lookup.
    pub fn coerce_id<F>(mut self, coerce: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.coerce_id = Some(Box::new(coerce));
        self
    }

    pub fn build(self) -> Result<NgramIndex> {
        if self.target_key.is_empty() {
            return Err(Error::InvalidArgument(
                "target key must not be empty".into(),
            ));
        }
        self.options.validate()?;

        Ok(NgramIndex {
            target_key: self.target_key,
            options: self.options,
            coerce_id: self.coerce_id.unwrap_or_else(|| Box::new(|id: &Value| id.clone())),
            documents: HashMap::new(),
            inverted: InvertedIndex::new(),
        })
    }
}

/// A document that passed validation and is ready to be inserted.
struct Pending {
    key: DocumentId,
    stored: StoredDocument,
    grams: Vec<NGram>,
}

/// Fuzzy full-text index over one string field of JSON documents.
pub struct NgramIndex {
    target_key: String,
    options: IndexOptions,
    coerce_id: IdCoercion,
    documents: HashMap<DocumentId, StoredDocument>,
    inverted: InvertedIndex,
}

impl fmt::Debug for NgramIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NgramIndex")
            .field("target_key", &self.target_key)
            .field("options", &self.options)
            .field("documents", &self.documents.len())
            .field("grams", &self.inverted.len())
            .finish_non_exhaustive()
    }
}

impl NgramIndex {
    /// Index `target_key` with default options.
    pub fn new(target_key: impl Into<String>) -> Result<Self> {
        Self::builder(target_key).build()
    }

    pub fn with_options(target_key: impl Into<String>, options: IndexOptions) -> Result<Self> {
        Self::builder(target_key).options(options).build()
    }

    pub fn builder(target_key: impl Into<String>) -> IndexBuilder {
        IndexBuilder {
            target_key: target_key.into(),
            options: IndexOptions::default(),
            coerce_id: None,
        }
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Index a document.
    ///
    /// An absent, null or empty value is silently ignored. A value shorter
    /// than `min_length` (after normalization) is accepted but not stored.
    pub fn add(&mut self, doc: &Value) -> Result<()> {
        match self.prepare(doc)? {
            Some(pending) => self.commit(pending),
            None => Ok(()),
        }
    }

    /// Add documents in order, stopping at the first error.
    ///
    /// Documents before the failing one stay indexed. With the `parallel`
    /// feature, normalization and splitting run on the rayon pool; insertion
    /// is always sequential, so the outcome equals calling [`add`] in a loop.
    ///
    /// [`add`]: NgramIndex::add
    pub fn add_all<'a, I>(&mut self, docs: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let docs: Vec<&Value> = docs.into_iter().collect();

        #[cfg(feature = "parallel")]
        let prepared: Vec<Result<Option<Pending>>> =
            docs.par_iter().map(|doc| self.prepare(doc)).collect();
        #[cfg(not(feature = "parallel"))]
        let prepared: Vec<Result<Option<Pending>>> =
            docs.iter().map(|doc| self.prepare(doc)).collect();

        for pending in prepared {
            if let Some(pending) = pending? {
                self.commit(pending)?;
            }
        }
        Ok(())
    }

    /// Remove a document and all of its n-grams.
    pub fn delete(&mut self, id: &Value) -> Result<()> {
        let coerced = (self.coerce_id)(id);
        let key = DocumentId::from_value(&coerced)
            .ok_or_else(|| Error::UnknownDocumentId(coerced.to_string()))?;
        let stored = self
            .documents
            .remove(&key)
            .ok_or_else(|| Error::UnknownDocumentId(key.to_string()))?;

        // Re-splitting the stored value names exactly the buckets to visit.
        let grams = split(&normalize(&stored.value), &self.options);
        self.inverted.remove(&key, &grams);

        tracing::debug!(id = %key, grams = grams.len(), "deleted document");
        check_index_consistent(&self.documents, &self.inverted, self.options.min_length);
        Ok(())
    }

    /// Replace a document: `delete` by its id, then `add`.
    ///
    /// Not atomic. If `add` fails the document stays deleted.
    pub fn update(&mut self, doc: &Value) -> Result<()> {
        let id = self.raw_id(doc);
        self.delete(id)?;
        self.add(doc)
    }

    /// Remove every document.
    pub fn clear(&mut self) {
        tracing::debug!(documents = self.documents.len(), "cleared index");
        self.documents.clear();
        self.inverted.clear();
    }

    // =========================================================================
    // QUERY
    // =========================================================================

    /// Find documents containing a fuzzy match of `query`, best first.
    ///
    /// Fails with `InvalidArgument` if the normalized query is shorter than
    /// `min_length`.
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let chars = normalize(query);
        if chars.len() < self.options.min_length {
            return Err(Error::InvalidArgument(format!(
                "query must be at least {} characters long",
                self.options.min_length
            )));
        }

        let subqueries = split(&chars, &self.options);
        let results = search_grams(
            &self.inverted,
            &self.documents,
            &subqueries,
            chars.len(),
            self.options.strict,
        );

        tracing::trace!(query, results = results.len(), "searched");
        check_results_sorted(&results);
        check_results_unique(&results);
        Ok(results)
    }

    /// Whether a document with this id is stored.
    pub fn contains(&self, id: &Value) -> bool {
        self.key_for(id)
            .is_some_and(|key| self.documents.contains_key(&key))
    }

    /// The original value stored for an id.
    pub fn get(&self, id: &Value) -> Option<&str> {
        let key = self.key_for(id)?;
        self.documents.get(&key).map(|stored| stored.value.as_str())
    }

    /// Number of stored (searchable) documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of distinct n-grams in the inverted index.
    pub fn gram_count(&self) -> usize {
        self.inverted.len()
    }

    pub fn target_key(&self) -> &str {
        &self.target_key
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn raw_id<'d>(&self, doc: &'d Value) -> &'d Value {
        doc.get(&self.options.id_key).unwrap_or(&Value::Null)
    }

    fn key_for(&self, id: &Value) -> Option<DocumentId> {
        DocumentId::from_value(&(self.coerce_id)(id))
    }

    /// Validate, normalize and split a document without touching the index.
    ///
    /// Returns `None` when there is nothing to index (absent or empty value).
    fn prepare(&self, doc: &Value) -> Result<Option<Pending>> {
        let value = match doc.get(&self.target_key) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::String(value)) if value.is_empty() => return Ok(None),
            Some(Value::String(value)) => value,
            Some(_) => {
                return Err(Error::InvalidProperty {
                    key: self.target_key.clone(),
                })
            }
        };

        let id = (self.coerce_id)(self.raw_id(doc));
        let key = DocumentId::from_value(&id).ok_or(Error::InvalidDocumentId)?;

        let chars = normalize(value);
        let grams = if chars.len() < self.options.min_length {
            Vec::new()
        } else {
            split(&chars, &self.options)
        };

        Ok(Some(Pending {
            key,
            stored: StoredDocument {
                id,
                value: value.clone(),
                normalized_len: chars.len(),
            },
            grams,
        }))
    }

    fn commit(&mut self, pending: Pending) -> Result<()> {
        let Pending { key, stored, grams } = pending;

        if self.documents.contains_key(&key) {
            return Err(Error::DuplicateDocumentId(key.to_string()));
        }
        // INVARIANT: STORED_IFF_SEARCHABLE
        if stored.normalized_len < self.options.min_length {
            tracing::debug!(id = %key, "value shorter than min length, not indexed");
            return Ok(());
        }

        tracing::debug!(id = %key, grams = grams.len(), "indexed document");
        self.inverted.insert(&key, grams);
        self.documents.insert(key, stored);

        check_index_consistent(&self.documents, &self.inverted, self.options.min_length);
        Ok(())
    }
}
