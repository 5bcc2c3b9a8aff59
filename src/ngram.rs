// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Decomposition of normalized text into fixed-length n-grams.
//!
//! The splitter walks the character sequence once and opens a window at every
//! significant character. A window collects `min_length` significant, folded
//! characters, stepping over punctuation without counting it.
//!
//! # Window rules
//!
//! | Mode       | Whitespace inside a window               |
//! |------------|------------------------------------------|
//! | non-strict | aborts the window, ordinal not advanced  |
//! | strict     | skipped like punctuation                 |
//!
//! Running out of characters ends the split: there are no partial trailing
//! n-grams.
//!
//! # Why two counters
//!
//! `position` is where the window opened in the normalized sequence.
//! `ordinal` is how many n-grams were emitted before it. Consecutive
//! n-grams of one token always have consecutive ordinals, even when their
//! positions jump over an apostrophe. The intersection filter checks
//! adjacency with ordinals for exactly that reason.

use crate::types::{IndexOptions, NGram};
use crate::utils::{fold, is_insignificant, is_token_break};

/// Split normalized characters into n-grams according to `options`.
///
/// ```
/// use fuzzgram::{normalize, split, IndexOptions};
///
/// let grams = split(&normalize("Kings"), &IndexOptions::default());
/// let substrings: Vec<_> = grams.iter().map(|g| g.substring.as_str()).collect();
/// assert_eq!(substrings, ["kin", "ing", "ngs"]);
/// ```
pub fn split(chars: &[char], options: &IndexOptions) -> Vec<NGram> {
    let min_length = options.min_length;
    let strict = options.strict;
    let mut grams = Vec::with_capacity(chars.len().saturating_sub(min_length) + 1);
    let mut ordinal = 0;
    let mut start = 0;

    'scan: while start < chars.len() {
        if is_insignificant(chars[start]) {
            start += 1;
            continue;
        }

        let mut substring = String::with_capacity(min_length);
        let mut taken = 0;
        let mut cursor = start;
        while taken < min_length {
            let Some(&c) = chars.get(cursor) else {
                break 'scan;
            };
            cursor += 1;
            if !strict && is_token_break(c) {
                start += 1;
                continue 'scan;
            }
            if is_insignificant(c) {
                continue;
            }
            substring.push(fold(c, options.case_sensitive));
            taken += 1;
        }

        grams.push(NGram {
            substring,
            ordinal,
            position: start,
            token_start: !strict && starts_token(chars, start),
        });
        ordinal += 1;
        start += 1;
    }

    grams
}

/// True when the nearest character before `start` that is not skipped
/// punctuation is whitespace: `'bar` in `foo 'bar` opens a token.
fn starts_token(chars: &[char], start: usize) -> bool {
    chars[..start]
        .iter()
        .rev()
        .find(|&&c| is_token_break(c) || !is_insignificant(c))
        .is_some_and(|&c| is_token_break(c))
}
