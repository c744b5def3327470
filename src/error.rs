// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Loading a corrupt snapshot is fatal; fetching a single comic is not. The
//! split shows up here: [`SnapshotError`] and [`BuildError`] propagate to the
//! operator, while [`FetchError`] values end up as gaps in a build report.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::types::ComicId;

/// Why a snapshot could not be turned into well-formed records.
#[derive(Debug, Error)]
pub enum CorruptSnapshot {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("key {0:?} is not a comic id")]
    InvalidKey(String),

    #[error("key {key:?} holds comic {num}")]
    KeyMismatch { key: String, num: ComicId },

    #[error("comic ids start at 1, found 0")]
    ZeroId,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(#[from] CorruptSnapshot),

    #[error("failed to access snapshot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single comic fetch that did not produce a record.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{url}: request failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url}: timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("{url}: unexpected HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("{url}: malformed comic metadata: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("asked for comic {expected}, got comic {got}")]
    Mismatch { expected: ComicId, got: ComicId },
}

/// Failures that abort a whole build run.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to set up HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("could not determine the latest comic: {0}")]
    Latest(#[source] FetchError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
}
