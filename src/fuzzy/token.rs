// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-order-insensitive comparisons.
//!
//! Token sort compares the words after sorting them, so "hello world" equals
//! "world hello". Token set goes further and sets aside the words both sides
//! share: a short query whose words all appear in a long title scores as if it
//! were the title.

use super::blocks::{partial_ratio, ratio};
use super::process::Prepared;

/// [`ratio`] over sorted tokens.
pub fn token_sort_ratio(a: &Prepared, b: &Prepared) -> u8 {
    ratio(a.sorted(), b.sorted())
}

/// [`partial_ratio`] over sorted tokens.
pub fn partial_token_sort_ratio(a: &Prepared, b: &Prepared) -> u8 {
    partial_ratio(a.sorted(), b.sorted())
}

/// Shared-token comparison scored with [`ratio`].
pub fn token_set_ratio(a: &Prepared, b: &Prepared) -> u8 {
    token_set(a, b, ratio)
}

/// Shared-token comparison scored with [`partial_ratio`].
pub fn partial_token_set_ratio(a: &Prepared, b: &Prepared) -> u8 {
    token_set(a, b, partial_ratio)
}

fn token_set(a: &Prepared, b: &Prepared, scorer: fn(&str, &str) -> u8) -> u8 {
    if a.text() == b.text() {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let sect = join(a.tokens().intersection(b.tokens()));
    let only_a = join(a.tokens().difference(b.tokens()));
    let only_b = join(b.tokens().difference(a.tokens()));

    let combined_a = concat(&sect, &only_a);
    let combined_b = concat(&sect, &only_b);

    scorer(&sect, &combined_a)
        .max(scorer(&sect, &combined_b))
        .max(scorer(&combined_a, &combined_b))
}

fn join<'a>(tokens: impl Iterator<Item = &'a String>) -> String {
    tokens.map(String::as_str).collect::<Vec<_>>().join(" ")
}

fn concat(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{} {}", head, tail),
    }
}
