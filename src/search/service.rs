// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query entry point transports call.
//!
//! ```text
//! raw query ──▶ normalize ──▶ rank (top `limit`) ──▶ numeric override ──▶ ids
//! ```
//!
//! The numeric override exists because people who know the number type the
//! number. `"327"` should return Exploits of a Mom first whatever the fuzzy
//! scores say, followed by the fuzzy results with 327 removed so it appears
//! exactly once. A number that is not in the corpus changes nothing.

use crate::fuzzy::{weighted_ratio, Prepared};
use crate::index::CorpusIndex;
use crate::text::normalize;
use crate::types::ComicId;

use super::ranker::rank_scored;

/// Number of fuzzy results returned when no limit is configured.
pub const DEFAULT_LIMIT: usize = 10;

/// One search result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub id: ComicId,
    pub score: u8,
    /// Placed first because the query was its number.
    pub pinned: bool,
}

/// Answers queries against a loaded [`CorpusIndex`].
///
/// Immutable after construction: share it behind an `Arc` or a reference.
#[derive(Debug)]
pub struct SearchService {
    index: CorpusIndex,
    limit: usize,
}

impl SearchService {
    pub fn new(index: CorpusIndex) -> Self {
        Self {
            index,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Number of fuzzy results to keep. The numeric override may add one more.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Result ids, best first. At most `limit + 1` of them.
    pub fn search(&self, raw_query: &str) -> Vec<ComicId> {
        self.search_hits(raw_query)
            .into_iter()
            .map(|hit| hit.id)
            .collect()
    }

    /// Like [`search`](Self::search), with scores.
    pub fn search_hits(&self, raw_query: &str) -> Vec<SearchHit> {
        let query = normalize(raw_query);
        let mut hits: Vec<SearchHit> = rank_scored(&query, self.index.entries(), self.limit)
            .into_iter()
            .map(|(id, score)| SearchHit {
                id,
                score,
                pinned: false,
            })
            .collect();

        let Some(requested) = numeric_query(raw_query) else {
            return hits;
        };

        let ranked = hits
            .iter()
            .position(|hit| i64::from(hit.id) == requested)
            .map(|pos| hits.remove(pos));

        let Some(id) = ComicId::try_from(requested).ok().filter(|id| self.index.contains(*id)) else {
            return hits;
        };

        let score = match ranked {
            Some(hit) => hit.score,
            None => self.score_of(&query, id),
        };
        hits.insert(
            0,
            SearchHit {
                id,
                score,
                pinned: true,
            },
        );
        hits
    }

    fn score_of(&self, normalized_query: &str, id: ComicId) -> u8 {
        self.index
            .entry(id)
            .map_or(0, |entry| weighted_ratio(&Prepared::new(normalized_query), &entry.comparison))
    }
}

/// The integer a query spells, if it is nothing but one (surrounding whitespace allowed).
fn numeric_query(raw_query: &str) -> Option<i64> {
    raw_query.trim().parse().ok()
}
