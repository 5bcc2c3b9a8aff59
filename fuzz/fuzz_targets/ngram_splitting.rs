// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the n-gram splitter.
//!
//! Arbitrary text, any window length, both modes. The splitter must never
//! panic and every n-gram it emits must be well formed.

#![no_main]

use arbitrary::Arbitrary;
use fuzzgram::{is_insignificant, normalize, split, IndexOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    min_length: u8,
    strict: bool,
    case_sensitive: bool,
}

fuzz_target!(|input: Input| {
    let options = IndexOptions {
        min_length: (input.min_length % 8) as usize + 1,
        strict: input.strict,
        case_sensitive: input.case_sensitive,
        ..IndexOptions::default()
    };
    let chars = normalize(&input.text);
    let grams = split(&chars, &options);

    // INVARIANT 1: ordinals count emitted n-grams
    for (i, gram) in grams.iter().enumerate() {
        assert_eq!(gram.ordinal, i);
    }

    // INVARIANT 2: every window holds exactly min_length characters
    for gram in &grams {
        assert_eq!(gram.substring.chars().count(), options.min_length);
    }

    // INVARIANT 3: windows open on significant characters, in order
    for gram in &grams {
        assert!(!is_insignificant(chars[gram.position]));
    }
    for pair in grams.windows(2) {
        assert!(pair[0].position < pair[1].position);
    }

    // INVARIANT 4: strict mode has no tokens
    if options.strict {
        assert!(grams.iter().all(|g| !g.token_start));
    }
});
