// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character-level normalization shared by indexing and querying.
//!
//! Documents and queries go through exactly the same steps, so "mañana"
//! typed with a precomposed `ñ` matches "mañana" stored as `n` + combining
//! tilde, and "KING" matches "king" unless the index is case sensitive.

use unicode_normalization::UnicodeNormalization;

/// NFKC-normalize a string and return its characters.
///
/// Positions reported by the index are offsets into this sequence, not
/// byte offsets and not grapheme clusters.
pub fn normalize(value: &str) -> Vec<char> {
    value.nfkc().collect()
}

/// Number of characters `value` has after normalization.
pub fn normalized_len(value: &str) -> usize {
    value.nfkc().count()
}

/// Lowercase a single character unless the index is case sensitive.
///
/// Characters whose lowercase form is more than one character (`İ`) are
/// left as they are so every n-gram keeps exactly `min_length` characters.
#[inline]
pub fn fold(c: char, case_sensitive: bool) -> char {
    if case_sensitive {
        return c;
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Whitespace ends a token in non-strict mode.
#[inline]
pub fn is_token_break(c: char) -> bool {
    c.is_whitespace()
}

/// Characters the splitter skips: ASCII controls and punctuation (space
/// included), C1 controls, Latin-1 punctuation, `×` and `÷`.
///
/// Skipped characters never start an n-gram and never count towards one,
/// so "King's" and "Kings" produce the same n-grams.
#[inline]
pub fn is_insignificant(c: char) -> bool {
    matches!(c,
        '\u{0000}'..='\u{002F}' |  // controls, space, !"#$%&'()*+,-./
        '\u{003A}'..='\u{0040}' |  // :;<=>?@
        '\u{005B}'..='\u{0060}' |  // [\]^_`
        '\u{007B}'..='\u{00BF}' |  // {|}~, DEL, C1 controls, Latin-1 punctuation
        '\u{00D7}' |               // ×
        '\u{00F7}'                 // ÷
    )
}
