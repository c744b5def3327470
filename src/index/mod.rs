// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The in-memory corpus: records plus their search entries.
//!
//! Loaded once at startup and never mutated afterwards, so it can be shared
//! between any number of concurrent searches without locking.

mod snapshot;

pub use snapshot::CorpusSnapshot;

use std::collections::HashMap;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{CorruptSnapshot, SnapshotError};
use crate::types::{ComicId, ComicRecord, SearchEntry};

/// Validated records in snapshot order, with a search entry for each.
#[derive(Debug)]
pub struct CorpusIndex {
    records: Vec<ComicRecord>,
    entries: Vec<SearchEntry>,
    positions: HashMap<ComicId, usize>,
}

impl CorpusIndex {
    /// Validate a snapshot and derive its search entries.
    ///
    /// Every key must be the canonical decimal id of the record it holds and
    /// ids must be positive. Keys are already unique after parsing, so each
    /// id appears once.
    pub fn load(snapshot: CorpusSnapshot) -> Result<Self, SnapshotError> {
        let mut records = Vec::with_capacity(snapshot.len());
        let mut positions = HashMap::with_capacity(snapshot.len());

        for (key, record) in snapshot.into_entries() {
            if key.parse::<ComicId>().is_err() {
                return Err(CorruptSnapshot::InvalidKey(key).into());
            }
            if record.num == 0 {
                return Err(CorruptSnapshot::ZeroId.into());
            }
            // Keys are canonical: "7", never "007" or "+7"
            if key != record.num.to_string() {
                return Err(CorruptSnapshot::KeyMismatch {
                    key,
                    num: record.num,
                }
                .into());
            }
            positions.insert(record.num, records.len());
            records.push(record);
        }

        #[cfg(feature = "parallel")]
        let entries = records.par_iter().map(SearchEntry::from_record).collect();
        #[cfg(not(feature = "parallel"))]
        let entries = records.iter().map(SearchEntry::from_record).collect();

        tracing::debug!(records = records.len(), "corpus index loaded");

        Ok(Self {
            records,
            entries,
            positions,
        })
    }

    /// Read, parse and load a snapshot file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        Self::load(CorpusSnapshot::read(path)?)
    }

    pub fn get_by_id(&self, id: ComicId) -> Option<&ComicRecord> {
        self.positions.get(&id).map(|&pos| &self.records[pos])
    }

    /// The search entry derived from record `id`.
    pub fn entry(&self, id: ComicId) -> Option<&SearchEntry> {
        self.positions.get(&id).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, id: ComicId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Search entries in snapshot order. The order is stable for the life of the index.
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Records in snapshot order.
    pub fn records(&self) -> impl Iterator<Item = &ComicRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest id in the corpus.
    pub fn max_id(&self) -> Option<ComicId> {
        self.positions.keys().copied().max()
    }

    /// Ids between 1 and [`max_id`](Self::max_id) with no record, ascending.
    pub fn missing_ids(&self) -> Vec<ComicId> {
        let max = self.max_id().unwrap_or(0);
        (1..=max).filter(|id| !self.contains(*id)).collect()
    }
}
