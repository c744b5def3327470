// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The persisted corpus: one JSON object mapping id strings to records.
//!
//! ```text
//! {
//!   "1": { "num": 1, "title": "Barrel - Part 1", "safe_title": "Barrel - Part 1", "alt": "Don't we all." },
//!   "2": { "num": 2, "title": "Petit Trees (sketch)", "alt": "'Petit' being a reference to ..." },
//!   ...
//! }
//! ```
//!
//! Key order in the file is the corpus order, and the ranker breaks score
//! ties by it, so parsing keeps it. Duplicate keys are rejected rather than
//! silently collapsed.

use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{CorruptSnapshot, SnapshotError};
use crate::types::ComicRecord;

/// Ordered mapping from id string to record, exactly as stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CorpusSnapshot {
    records: IndexMap<String, ComicRecord>,
}

impl CorpusSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot keyed by each record's own `num`, in iteration order.
    pub fn from_records(records: impl IntoIterator<Item = ComicRecord>) -> Self {
        let mut snapshot = Self::new();
        for record in records {
            snapshot.insert(record);
        }
        snapshot
    }

    /// Insert a record under its id string. Returns the record it replaced.
    pub fn insert(&mut self, record: ComicRecord) -> Option<ComicRecord> {
        self.records.insert(record.num.to_string(), record)
    }

    pub fn get(&self, key: &str) -> Option<&ComicRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Entries in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComicRecord)> {
        self.records.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (String, ComicRecord)> {
        self.records.into_iter()
    }

    /// Parse snapshot JSON.
    pub fn parse(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json)
            .map_err(|e| SnapshotError::CorruptSnapshot(CorruptSnapshot::Malformed(e)))
    }

    /// Read and parse a snapshot file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json)
    }

    /// Pretty-printed JSON, UTF-8 left unescaped.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<'de> Deserialize<'de> for CorpusSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = CorpusSnapshot;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from comic id to comic record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut records = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, record)) = map.next_entry::<String, ComicRecord>()? {
                    if records.contains_key(&key) {
                        return Err(de::Error::custom(format_args!("duplicate key {key:?}")));
                    }
                    records.insert(key, record);
                }
                Ok(CorpusSnapshot { records })
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}
