//! Add, delete, update and clear, observed through search.

use super::common::{build_test_index, make_doc, pubs_index, result_ids, search, PUBS};
use fuzzgram::{IndexOptions, NgramIndex};
use serde_json::{json, Value};

#[test]
fn deleted_document_is_no_longer_found() {
    let mut index = pubs_index(IndexOptions::default());
    assert_eq!(result_ids(&search(&index, "lion")), vec![json!(1)]);

    index.delete(&json!(1)).unwrap();
    assert!(search(&index, "lion").is_empty());
    assert!(!index.contains(&json!(1)));
    assert_eq!(index.len(), PUBS.len() - 1);
}

#[test]
fn delete_then_add_restores_results() {
    let mut index = pubs_index(IndexOptions::default());
    let last = PUBS.len() - 1;
    let before = search(&index, "arms");

    index.delete(&json!(last)).unwrap();
    index.add(&make_doc(last, PUBS[last])).unwrap();

    assert_eq!(search(&index, "arms"), before);
}

#[test]
fn update_replaces_the_value() {
    let mut index = pubs_index(IndexOptions::default());
    index.update(&make_doc(3, "The Crown")).unwrap();

    assert!(search(&index, "oak").is_empty());
    let results = search(&index, "crown");
    assert_eq!(result_ids(&results), vec![json!(3)]);
    assert_eq!(results[0].matched, "The Crown");
    assert_eq!(index.get(&json!(3)), Some("The Crown"));
    assert_eq!(index.len(), PUBS.len());
}

#[test]
fn update_equals_delete_then_add() {
    let mut updated = pubs_index(IndexOptions::default());
    let mut replaced = pubs_index(IndexOptions::default());
    let doc = make_doc(0, "The King's Head");

    updated.update(&doc).unwrap();
    replaced.delete(&json!(0)).unwrap();
    replaced.add(&doc).unwrap();

    for query in ["king", "head", "the", "kings head"] {
        assert_eq!(search(&updated, query), search(&replaced, query));
    }
}

#[test]
fn update_to_short_value_unindexes() {
    let mut index = build_test_index(&["alpha"], IndexOptions::default());
    index.update(&make_doc(0, "al")).unwrap();

    assert!(index.is_empty());
    assert_eq!(index.gram_count(), 0);
}

#[test]
fn short_value_can_be_retried_with_same_id() {
    let mut index = NgramIndex::new("foo").unwrap();
    index.add(&make_doc(0, "ab")).unwrap();
    assert!(index.is_empty());

    index.add(&make_doc(0, "abc")).unwrap();
    assert_eq!(result_ids(&search(&index, "abc")), vec![json!(0)]);
}

#[test]
fn clear_then_reuse() {
    let mut index = pubs_index(IndexOptions::default());
    index.clear();

    assert!(index.is_empty());
    assert!(search(&index, "the").is_empty());

    index.add(&make_doc(0, "The Plough")).unwrap();
    assert_eq!(result_ids(&search(&index, "plough")), vec![json!(0)]);
}

#[test]
fn add_all_matches_sequential_adds() {
    let docs: Vec<Value> = PUBS
        .iter()
        .enumerate()
        .map(|(id, text)| make_doc(id, text))
        .collect();
    let mut batched = NgramIndex::new("foo").unwrap();
    batched.add_all(&docs).unwrap();
    let sequential = pubs_index(IndexOptions::default());

    assert_eq!(batched.len(), sequential.len());
    assert_eq!(batched.gram_count(), sequential.gram_count());
    for query in ["the", "kings", "king arms", "queen"] {
        assert_eq!(search(&batched, query), search(&sequential, query));
    }
}

#[test]
fn ids_are_coerced_everywhere() {
    let mut index = NgramIndex::builder("name")
        .id_key("key")
        .coerce_id(|id| match id {
            Value::String(s) => s.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
            other => other.clone(),
        })
        .build()
        .unwrap();

    index.add(&json!({ "key": "7", "name": "Seven Stars" })).unwrap();
    assert!(index.contains(&json!(7)));
    assert!(index.contains(&json!("7")));

    let results = search(&index, "stars");
    assert_eq!(results[0].id, json!(7));

    index.update(&json!({ "key": 7, "name": "Seven Dials" })).unwrap();
    assert_eq!(index.get(&json!("7")), Some("Seven Dials"));

    index.delete(&json!("7")).unwrap();
    assert!(index.is_empty());
}

#[test]
fn indexes_are_independent() {
    let mut names = NgramIndex::new("name").unwrap();
    let mut cities = NgramIndex::builder("city").strict(true).build().unwrap();
    let doc = json!({ "_id": 1, "name": "Ada Lovelace", "city": "London" });

    names.add(&doc).unwrap();
    cities.add(&doc).unwrap();

    assert_eq!(search(&names, "love").len(), 1);
    assert!(search(&cities, "love").is_empty());
    assert_eq!(search(&cities, "london").len(), 1);

    names.clear();
    assert_eq!(cities.len(), 1);
}

#[test]
fn options_from_json() {
    let options: IndexOptions =
        serde_json::from_str(r#"{ "idKey": "uid", "minLength": 2, "caseSensitive": true }"#)
            .unwrap();
    let mut index = NgramIndex::with_options("title", options).unwrap();

    index.add(&json!({ "uid": "a", "title": "Go" })).unwrap();
    assert_eq!(result_ids(&search(&index, "Go")), vec![json!("a")]);
    assert!(search(&index, "go").is_empty());
    assert_eq!(index.target_key(), "title");
    assert_eq!(index.options().min_length, 2);
}

#[test]
fn results_serialize_with_match_field() {
    let index = build_test_index(&["bar"], IndexOptions::default());
    let results = search(&index, "bar");
    let value = serde_json::to_value(&results).unwrap();

    assert_eq!(
        value,
        json!([{ "id": 0, "match": "bar", "indices": [0], "score": 100 }])
    );
}
