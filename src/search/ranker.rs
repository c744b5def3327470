// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Top-K fuzzy ranking over the whole corpus.
//!
//! There is no candidate pruning: every entry is scored. A few thousand
//! entries of a few hundred bytes each is cheap, and an exhaustive scan is the
//! only way a query that only matches deep inside alt text still surfaces.
//!
//! Ties are broken by corpus order. Scores are integers and the sort is
//! stable, so two runs over the same index always agree.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::fuzzy::{weighted_ratio, Prepared};
use crate::types::{ComicId, SearchEntry};

/// Best `limit` entries for an already-normalized query, with their scores.
///
/// Empty when `limit` is 0, there are no entries, or the query has no
/// alphanumeric content left after processing.
pub fn rank_scored(normalized_query: &str, entries: &[SearchEntry], limit: usize) -> Vec<(ComicId, u8)> {
    if limit == 0 || entries.is_empty() {
        return Vec::new();
    }
    let query = Prepared::new(normalized_query);
    if query.is_empty() {
        return Vec::new();
    }

    #[cfg(feature = "parallel")]
    let mut scored: Vec<(ComicId, u8)> = entries
        .par_iter()
        .map(|entry| (entry.id, weighted_ratio(&query, &entry.comparison)))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let mut scored: Vec<(ComicId, u8)> = entries
        .iter()
        .map(|entry| (entry.id, weighted_ratio(&query, &entry.comparison)))
        .collect();

    // Stable: equal scores stay in corpus order
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored
}

/// Ids of the best `limit` entries, best first.
pub fn rank(normalized_query: &str, entries: &[SearchEntry], limit: usize) -> Vec<ComicId> {
    rank_scored(normalized_query, entries, limit)
        .into_iter()
        .map(|(id, _)| id)
        .collect()
}
