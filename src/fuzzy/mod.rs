// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy similarity: how closely a query matches a candidate, on a 0..=100 scale.
//!
//! Plain edit distance punishes the common case badly. Someone typing "bobby
//! tables" is looking for "Exploits of a Mom", whose alt text mentions little
//! Bobby Tables somewhere in the middle. So the score is the best of several
//! views of the same pair:
//!
//! - whole-string similarity ([`ratio`])
//! - best-aligned substring window ([`partial_ratio`])
//! - word-order-insensitive comparisons ([`token_sort_ratio`], [`token_set_ratio`])
//!
//! [`weighted_ratio`] picks between them based on how different the two
//! lengths are. All scores are integers so equal-quality matches tie exactly,
//! which lets the ranker fall back to corpus order.

mod blocks;
mod process;
mod token;
mod weighted;

pub use blocks::{matching_blocks, partial_ratio, ratio, Block};
pub use process::{full_process, Prepared};
pub use token::{
    partial_token_set_ratio, partial_token_sort_ratio, token_set_ratio, token_sort_ratio,
};
pub use weighted::*;

/// Round to the nearest integer score, ties to even.
fn round_score(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 100.0) as u8
}
