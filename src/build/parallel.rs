// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded-concurrency crawl of the whole id range.
//!
//! A full crawl is a few thousand small HTTP requests, each dominated by
//! latency. They are independent, so the builder keeps up to `concurrency` of
//! them in flight with `buffer_unordered` and reassembles the results by id
//! afterwards. Completion order never shows up in the output.
//!
//! A failed id is logged, reported and left out. The only failure that aborts
//! a build is not knowing where the range ends.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};
#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use crate::error::{BuildError, FetchError};
use crate::index::CorpusSnapshot;
use crate::types::{ComicId, ComicRecord};

use super::audit;
use super::source::ComicSource;

/// Default number of requests in flight.
pub const DEFAULT_CONCURRENCY: usize = 32;

/// Ids that exist in the numbering but are never served.
pub const DEFAULT_PLACEHOLDER_IDS: &[ComicId] = &[404];

/// The record synthesized for a placeholder id. Its title is the id itself.
pub fn placeholder_record(num: ComicId) -> ComicRecord {
    let mut record = ComicRecord::new(num, num.to_string(), "");
    record.safe_title = Some(num.to_string());
    record
}

/// What happened to one id.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(ComicRecord),
    Placeholder(ComicRecord),
    Failed { num: ComicId, error: FetchError },
}

impl FetchOutcome {
    pub fn num(&self) -> ComicId {
        match self {
            FetchOutcome::Fetched(record) | FetchOutcome::Placeholder(record) => record.num,
            FetchOutcome::Failed { num, .. } => *num,
        }
    }

    pub fn record(&self) -> Option<&ComicRecord> {
        match self {
            FetchOutcome::Fetched(record) | FetchOutcome::Placeholder(record) => Some(record),
            FetchOutcome::Failed { .. } => None,
        }
    }
}

/// Result of a crawl: the snapshot plus everything that went missing.
#[derive(Debug)]
pub struct BuildReport {
    /// Records in ascending id order.
    pub snapshot: CorpusSnapshot,
    /// Highest id requested.
    pub max_id: ComicId,
    /// Ids filled in without a request.
    pub placeholders: Vec<ComicId>,
    /// Ids that produced no record, ascending.
    pub failures: Vec<(ComicId, FetchError)>,
}

impl BuildReport {
    pub fn failed_ids(&self) -> Vec<ComicId> {
        self.failures.iter().map(|(num, _)| *num).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Write the snapshot as pretty JSON, creating parent directories.
    pub fn write_snapshot(&self, path: impl AsRef<Path>) -> Result<(), BuildError> {
        let path = path.as_ref();
        let io_error = |source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let json = self.snapshot.to_json().map_err(BuildError::Serialize)?;
        std::fs::write(path, json).map_err(io_error)?;

        tracing::info!(path = %path.display(), records = self.snapshot.len(), "snapshot written");
        Ok(())
    }
}

/// Crawls a [`ComicSource`] into a [`CorpusSnapshot`].
pub struct CorpusBuilder<S> {
    source: S,
    concurrency: usize,
    placeholder_ids: BTreeSet<ComicId>,
    audit_dir: Option<PathBuf>,
    #[cfg(feature = "parallel")]
    progress: Option<ProgressBar>,
}

impl<S: ComicSource> CorpusBuilder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            concurrency: DEFAULT_CONCURRENCY,
            placeholder_ids: DEFAULT_PLACEHOLDER_IDS.iter().copied().collect(),
            audit_dir: None,
            #[cfg(feature = "parallel")]
            progress: None,
        }
    }

    /// Maximum requests in flight. Values below 1 are raised to 1.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Ids to synthesize instead of fetching. Replaces the default `{404}`.
    pub fn placeholder_ids(mut self, ids: impl IntoIterator<Item = ComicId>) -> Self {
        self.placeholder_ids = ids.into_iter().collect();
        self
    }

    /// Write an audit file per obtained record into `dir`.
    pub fn audit_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.audit_dir = Some(dir.into());
        self
    }

    /// Tick `progress` once per completed id.
    #[cfg(feature = "parallel")]
    pub fn progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Ask the source for its latest comic number.
    pub async fn latest_num(&self) -> Result<ComicId, BuildError> {
        let latest = self.source.fetch(None).await.map_err(BuildError::Latest)?;
        tracing::info!(latest = latest.num, "latest comic");
        Ok(latest.num)
    }

    /// Crawl every id from 1 to the latest comic.
    pub async fn build(&self) -> Result<BuildReport, BuildError> {
        let latest = self.latest_num().await?;
        self.build_up_to(latest).await
    }

    /// Crawl every id from 1 to `max_id`.
    ///
    /// Only a failure to create the audit directory is an error here.
    /// Individual fetch failures are collected in the report.
    pub async fn build_up_to(&self, max_id: ComicId) -> Result<BuildReport, BuildError> {
        if let Some(dir) = &self.audit_dir {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| BuildError::Io {
                    path: dir.clone(),
                    source,
                })?;
        }

        #[cfg(feature = "parallel")]
        if let Some(progress) = &self.progress {
            progress.set_length(u64::from(max_id));
        }

        let mut outcomes: Vec<FetchOutcome> = stream::iter(1..=max_id)
            .map(|num| self.obtain(num))
            .buffer_unordered(self.concurrency)
            .inspect(|_| self.tick())
            .collect()
            .await;
        outcomes.sort_by_key(FetchOutcome::num);

        let mut snapshot = CorpusSnapshot::new();
        let mut placeholders = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                FetchOutcome::Fetched(record) => {
                    snapshot.insert(record);
                }
                FetchOutcome::Placeholder(record) => {
                    placeholders.push(record.num);
                    snapshot.insert(record);
                }
                FetchOutcome::Failed { num, error } => failures.push((num, error)),
            }
        }

        tracing::info!(
            max_id,
            records = snapshot.len(),
            failed = failures.len(),
            "crawl finished"
        );

        Ok(BuildReport {
            snapshot,
            max_id,
            placeholders,
            failures,
        })
    }

    #[cfg(feature = "parallel")]
    fn tick(&self) {
        if let Some(progress) = &self.progress {
            progress.inc(1);
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn tick(&self) {}

    async fn obtain(&self, num: ComicId) -> FetchOutcome {
        let outcome = if self.placeholder_ids.contains(&num) {
            tracing::debug!(num, "synthesizing placeholder");
            FetchOutcome::Placeholder(placeholder_record(num))
        } else {
            match self.source.fetch(Some(num)).await {
                Ok(record) if record.num == num => FetchOutcome::Fetched(record),
                Ok(record) => {
                    let error = FetchError::Mismatch {
                        expected: num,
                        got: record.num,
                    };
                    tracing::warn!(num, %error, "fetch returned the wrong comic");
                    FetchOutcome::Failed { num, error }
                }
                Err(error) => {
                    tracing::warn!(num, %error, "fetch failed");
                    FetchOutcome::Failed { num, error }
                }
            }
        };

        if let (Some(dir), Some(record)) = (&self.audit_dir, outcome.record()) {
            if let Err(error) = audit::write_audit(dir, record).await {
                tracing::warn!(num, %error, "could not write audit file");
            }
        }

        outcome
    }
}
