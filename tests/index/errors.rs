//! Every error kind, raised by the call that caused it.

use super::common::{make_doc, pubs_index, search};
use fuzzgram::{Error, IndexOptions, NgramIndex};
use serde_json::json;

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn bad_configuration_is_invalid_argument() {
    assert!(matches!(NgramIndex::new(""), Err(Error::InvalidArgument(_))));
    assert!(matches!(
        NgramIndex::builder("foo").min_length(0).build(),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        NgramIndex::builder("foo").id_key("").build(),
        Err(Error::InvalidArgument(_))
    ));
}

// ============================================================================
// MUTATION
// ============================================================================

#[test]
fn non_string_values_are_invalid_property() {
    let mut index = NgramIndex::new("foo").unwrap();
    for value in [json!(1), json!(true), json!(["bar"]), json!({ "bar": 1 })] {
        let err = index.add(&json!({ "_id": 0, "foo": value })).unwrap_err();
        assert_eq!(err, Error::InvalidProperty { key: "foo".into() });
    }
    assert!(index.is_empty());
}

#[test]
fn missing_id_is_invalid_document_id() {
    let mut index = NgramIndex::new("foo").unwrap();
    assert_eq!(
        index.add(&json!({ "foo": "bar" })),
        Err(Error::InvalidDocumentId)
    );
    // Nothing to index, so the id is never looked at.
    assert_eq!(index.add(&json!({ "foo": "" })), Ok(()));
}

#[test]
fn duplicate_is_checked_before_length() {
    let mut index = NgramIndex::new("foo").unwrap();
    index.add(&make_doc(0, "abc")).unwrap();

    assert!(matches!(
        index.add(&make_doc(0, "ab")),
        Err(Error::DuplicateDocumentId(_))
    ));
    assert_eq!(index.get(&json!(0)), Some("abc"));
}

#[test]
fn delete_twice_is_unknown_document_id() {
    let mut index = pubs_index(IndexOptions::default());
    index.delete(&json!(2)).unwrap();
    assert_eq!(
        index.delete(&json!(2)),
        Err(Error::UnknownDocumentId("2".into()))
    );
}

#[test]
fn update_of_unknown_id_fails_without_adding() {
    let mut index = pubs_index(IndexOptions::default());
    let err = index.update(&make_doc(99, "The Swan")).unwrap_err();

    assert!(matches!(err, Error::UnknownDocumentId(_)));
    assert!(!index.contains(&json!(99)));
    assert!(search(&index, "swan").is_empty());
}

#[test]
fn failed_update_leaves_document_deleted() {
    let mut index = pubs_index(IndexOptions::default());
    let err = index.update(&json!({ "_id": 1, "foo": 12 })).unwrap_err();

    assert!(matches!(err, Error::InvalidProperty { .. }));
    assert!(!index.contains(&json!(1)));
    assert!(search(&index, "lion").is_empty());
}

// ============================================================================
// SEARCH
// ============================================================================

#[test]
fn short_query_is_invalid_argument() {
    let index = pubs_index(IndexOptions::default());
    assert!(matches!(index.search("ab"), Err(Error::InvalidArgument(_))));
    assert!(matches!(index.search(""), Err(Error::InvalidArgument(_))));
}

#[test]
fn query_length_is_measured_after_normalization() {
    let index = pubs_index(IndexOptions::default());
    // "ﬁ" is one character that normalizes to two.
    assert!(matches!(index.search("ﬁ"), Err(Error::InvalidArgument(_))));
    assert!(index.search("ﬁx").is_ok());
}

#[test]
fn query_without_grams_finds_nothing() {
    let index = pubs_index(IndexOptions::default());
    // Long enough, but no token is.
    assert!(search(&index, "a b").is_empty());
    assert!(search(&index, "...").is_empty());
}

#[test]
fn errors_display() {
    let mut index = NgramIndex::new("foo").unwrap();
    let err = index.delete(&json!("x")).unwrap_err();
    assert_eq!(err.to_string(), "unknown document id \"x\"");
}
