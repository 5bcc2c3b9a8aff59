// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by index construction, mutation and search.
//!
//! Every error is raised synchronously at the call that caused it. Nothing
//! is retried and nothing is rolled back: in particular a failed `add`
//! inside `update` leaves the document deleted.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Bad constructor argument, option value or query.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The indexed field is present on the document but is not a string.
    #[error("property '{key}' must be a string")]
    InvalidProperty { key: String },

    /// The (coerced) document id is missing or null.
    #[error("document id is missing or null")]
    InvalidDocumentId,

    /// A document with this id is already indexed.
    #[error("duplicate document id {0}")]
    DuplicateDocumentId(String),

    /// No document with this id is indexed.
    #[error("unknown document id {0}")]
    UnknownDocumentId(String),
}
