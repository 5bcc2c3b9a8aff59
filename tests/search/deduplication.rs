//! Each document appears once per search, however often it matches.

use super::common::{build_test_index, result_ids, search, strict_options};
use fuzzgram::IndexOptions;
use serde_json::json;
use std::collections::HashSet;

#[test]
fn repeated_gram_yields_one_result() {
    let index = build_test_index(&["banana"], IndexOptions::default());
    let results = search(&index, "ana");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].indices, vec![1, 3]);
    // Non-strict: the first occurrence's score stands.
    assert_eq!(results[0].score, 50);
}

#[test]
fn strict_mode_sums_repeated_matches() {
    let index = build_test_index(&["banana"], strict_options());
    let results = search(&index, "ana");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].indices, vec![1, 3]);
    assert_eq!(results[0].score, 100);
}

#[test]
fn repeated_word_across_whitespace() {
    let loose = build_test_index(&["abc abc"], IndexOptions::default());
    let results = search(&loose, "abc");
    assert_eq!(results[0].indices, vec![0, 4]);
    assert_eq!(results[0].score, 43);

    let strict = build_test_index(&["abc abc"], strict_options());
    let results = search(&strict, "abc");
    assert_eq!(results[0].indices, vec![0, 4]);
    assert_eq!(results[0].score, 86);
}

#[test]
fn summed_score_is_capped() {
    let index = build_test_index(&["aaaa"], strict_options());
    let results = search(&index, "aaa");

    // 75 + 75, capped.
    assert_eq!(results[0].indices, vec![0, 1]);
    assert_eq!(results[0].score, 100);
}

#[test]
fn overlapping_matches_non_strict() {
    let index = build_test_index(&["aaaa"], IndexOptions::default());
    let results = search(&index, "aaa");

    assert_eq!(results[0].indices, vec![0, 1]);
    assert_eq!(results[0].score, 75);
}

#[test]
fn multi_token_hits_share_a_result() {
    let index = build_test_index(&["red lion inn"], IndexOptions::default());
    let results = search(&index, "red inn");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].indices, vec![0, 9]);
}

#[test]
fn ids_are_unique_across_many_documents() {
    let texts = ["banana", "bandana", "cabana", "ananas", "banana split"];
    for options in [IndexOptions::default(), strict_options()] {
        let index = build_test_index(&texts, options);
        let results = search(&index, "ana");
        let ids = result_ids(&results);
        let unique: HashSet<String> = ids.iter().map(|id| id.to_string()).collect();

        assert_eq!(ids.len(), texts.len());
        assert_eq!(unique.len(), ids.len());
    }
}

#[test]
fn equal_ids_of_different_types_stay_apart() {
    let mut index = fuzzgram::NgramIndex::new("foo").unwrap();
    index.add(&json!({ "_id": 1, "foo": "banana" })).unwrap();
    index.add(&json!({ "_id": "1", "foo": "banana" })).unwrap();

    let results = search(&index, "banana");
    assert_eq!(result_ids(&results), vec![json!(1), json!("1")]);
}
