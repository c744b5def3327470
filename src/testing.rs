//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::build::ComicSource;
use crate::error::FetchError;
use crate::index::{CorpusIndex, CorpusSnapshot};
use crate::types::{ComicId, ComicRecord};

/// Create a record with no safe title or image.
pub fn make_record(num: ComicId, title: &str, alt: &str) -> ComicRecord {
    ComicRecord::new(num, title, alt)
}

/// Create a snapshot from `(id, title, alt)` triples, in the given order.
pub fn make_snapshot(records: &[(ComicId, &str, &str)]) -> CorpusSnapshot {
    CorpusSnapshot::from_records(
        records
            .iter()
            .map(|&(num, title, alt)| make_record(num, title, alt)),
    )
}

/// Create a loaded index from `(id, title, alt)` triples.
///
/// Panics if the triples repeat an id or use id 0.
pub fn make_index(records: &[(ComicId, &str, &str)]) -> CorpusIndex {
    CorpusIndex::load(make_snapshot(records)).expect("test corpus should be well-formed")
}

/// An in-memory [`ComicSource`] with scripted failures.
///
/// Serves `Comic {n}` for every id in `1..=latest`, records every request,
/// and tracks how many requests were in flight at once.
pub struct ScriptedSource {
    records: HashMap<ComicId, ComicRecord>,
    latest: ComicId,
    failing: HashSet<ComicId>,
    latest_fails: bool,
    delay: Duration,
    requested: Mutex<Vec<Option<ComicId>>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl ScriptedSource {
    pub fn with_range(latest: ComicId) -> Self {
        let records = (1..=latest)
            .map(|num| (num, make_record(num, &format!("Comic {}", num), &format!("Alt {}", num))))
            .collect();
        Self {
            records,
            latest,
            failing: HashSet::new(),
            latest_fails: false,
            delay: Duration::ZERO,
            requested: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    /// Make these ids fail with HTTP 500.
    pub fn failing(mut self, ids: impl IntoIterator<Item = ComicId>) -> Self {
        self.failing.extend(ids);
        self
    }

    /// Answer a request for `num` with `record`, whatever its own number.
    pub fn answering(mut self, num: ComicId, record: ComicRecord) -> Self {
        self.records.insert(num, record);
        self
    }

    /// Make the latest-comic request fail.
    pub fn fail_latest(mut self) -> Self {
        self.latest_fails = true;
        self
    }

    /// Hold every request open for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Every request made so far, in order. `None` is the latest-comic request.
    pub fn requested(&self) -> Vec<Option<ComicId>> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Highest number of requests that were in flight at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn error(num: Option<ComicId>, status: u16) -> FetchError {
        FetchError::Status {
            url: format!("scripted://{}", num.map_or("latest".to_string(), |n| n.to_string())),
            status,
        }
    }
}

impl ComicSource for ScriptedSource {
    async fn fetch(&self, num: Option<ComicId>) -> Result<ComicRecord, FetchError> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(num);

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        } else {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let target = match num {
            Some(n) if self.failing.contains(&n) => return Err(Self::error(num, 500)),
            Some(n) => n,
            None if self.latest_fails => return Err(Self::error(num, 503)),
            None => self.latest,
        };
        self.records
            .get(&target)
            .cloned()
            .ok_or_else(|| Self::error(num, 404))
    }
}
