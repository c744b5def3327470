// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: comic records and the search entries derived from them.

use serde::{Deserialize, Serialize};

use crate::fuzzy::Prepared;
use crate::text::normalize;

/// Primary key of the corpus. Always positive.
pub type ComicId = u32;

/// One comic's metadata, as fetched from the remote source and stored in the snapshot.
///
/// Decoding ignores fields the remote source sends that we don't keep
/// (transcript, publication date, link, news).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ComicRecord {
    pub num: ComicId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_title: Option<String>,
    pub alt: String,
    /// Image URL, kept so transports can attach a thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

impl ComicRecord {
    pub fn new(num: ComicId, title: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            num,
            title: title.into(),
            safe_title: None,
            alt: alt.into(),
            img: None,
        }
    }

    /// The title to show users: `safe_title` when present, `title` otherwise.
    pub fn display_title(&self) -> &str {
        self.safe_title.as_deref().unwrap_or(&self.title)
    }
}

/// Searchable form of a [`ComicRecord`].
///
/// The id is the result key and takes no part in text comparison. `comparison`
/// is the normalized title and alt joined by a space, already run through the
/// fuzzy processor so ranking never re-tokenizes the corpus.
#[derive(Clone, Debug)]
pub struct SearchEntry {
    pub id: ComicId,
    pub normalized_title: String,
    pub normalized_alt: String,
    pub comparison: Prepared,
}

impl SearchEntry {
    pub fn from_record(record: &ComicRecord) -> Self {
        let normalized_title = normalize(&record.title);
        let normalized_alt = normalize(&record.alt);
        let comparison = Prepared::new(&format!("{} {}", normalized_title, normalized_alt));
        Self {
            id: record.num,
            normalized_title,
            normalized_alt,
            comparison,
        }
    }
}
