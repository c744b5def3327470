// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The combined score the ranker uses.
//!
//! When both strings have similar lengths, whole-string and token comparisons
//! are meaningful. When one is much longer (a three-word query against a
//! title plus a sentence of alt text), the partial variants take over, scaled
//! down so a full-length match still beats a substring hit.
//!
//! # Constants
//!
//! | Name                  | Value | Role |
//! |-----------------------|-------|------|
//! | `UNBASE_SCALE`        | 0.95  | Token comparisons never quite reach an exact match |
//! | `PARTIAL_SCALE`       | 0.90  | Substring hits when lengths differ by 1.5x to 8x |
//! | `LONG_PARTIAL_SCALE`  | 0.60  | Substring hits when lengths differ by more than 8x |

use super::blocks::{partial_ratio, ratio};
use super::process::Prepared;
use super::round_score;
use super::token::{
    partial_token_set_ratio, partial_token_sort_ratio, token_set_ratio, token_sort_ratio,
};

/// Scale applied to token-based scores.
pub const UNBASE_SCALE: f64 = 0.95;

/// Scale applied to partial scores for moderately different lengths.
pub const PARTIAL_SCALE: f64 = 0.9;

/// Scale applied to partial scores for very different lengths.
pub const LONG_PARTIAL_SCALE: f64 = 0.6;

/// Length ratio at which partial matching kicks in.
pub const PARTIAL_LENGTH_RATIO: f64 = 1.5;

/// Length ratio above which [`LONG_PARTIAL_SCALE`] applies.
pub const LONG_LENGTH_RATIO: f64 = 8.0;

/// Best of the whole-string, token and partial views, 0..=100.
///
/// 0 when either side processes to the empty string.
pub fn weighted_ratio(query: &Prepared, candidate: &Prepared) -> u8 {
    let (p1, p2) = (query.text(), candidate.text());
    if p1.is_empty() || p2.is_empty() {
        return 0;
    }

    let base = f64::from(ratio(p1, p2));
    let (l1, l2) = (p1.len() as f64, p2.len() as f64);
    let len_ratio = l1.max(l2) / l1.min(l2);

    let best = if len_ratio < PARTIAL_LENGTH_RATIO {
        let sort = f64::from(token_sort_ratio(query, candidate)) * UNBASE_SCALE;
        let set = f64::from(token_set_ratio(query, candidate)) * UNBASE_SCALE;
        base.max(sort).max(set)
    } else {
        let scale = if len_ratio > LONG_LENGTH_RATIO {
            LONG_PARTIAL_SCALE
        } else {
            PARTIAL_SCALE
        };
        let partial = f64::from(partial_ratio(p1, p2)) * scale;
        let sort = f64::from(partial_token_sort_ratio(query, candidate)) * UNBASE_SCALE * scale;
        let set = f64::from(partial_token_set_ratio(query, candidate)) * UNBASE_SCALE * scale;
        base.max(partial).max(sort).max(set)
    };

    round_score(best)
}
