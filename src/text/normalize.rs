// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding and ASCII folding.
//!
//! Titles and alt texts carry accents, ligatures, curly quotes and the odd
//! Greek letter. Users type whatever their keyboard gives them. Both sides go
//! through [`normalize`] so "Café" and "cafe" compare as the same word.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::translit::transliterate;

/// Normalize a string for search: lowercase, then fold to ASCII.
///
/// - "Café" → "cafe"
/// - "Straße" → "strasse"
/// - "Œuvre" → "oeuvre"
/// - "“quoted”" → "\"quoted\""
///
/// # Algorithm
///
/// 1. Lowercase
/// 2. NFKD normalize (decompose into base + combining marks, unfold
///    compatibility forms like `ﬁ` and full-width letters)
/// 3. Drop combining marks
/// 4. Transliterate whatever is still non-ASCII; drop what has no approximation
/// 5. ASCII-lowercase (NFKD can surface capitals, e.g. `ℌ` → `H`)
///
/// The output is always lowercase ASCII, which makes the function idempotent.
/// Whitespace is left alone; the fuzzy processor deals with it.
pub fn normalize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());

    for c in value.to_lowercase().nfkd() {
        if c.is_ascii() {
            out.push(c.to_ascii_lowercase());
        } else if is_combining_mark(c) {
            continue;
        } else if let Some(folded) = transliterate(c) {
            out.extend(folded.chars().map(|f| f.to_ascii_lowercase()));
        }
    }

    out
}
