// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search over xkcd comic metadata, plus the crawler that collects it.
//!
//! Two halves share one data model. Offline, [`build`] crawls the remote
//! source and writes a snapshot file. Online, [`index`] loads that snapshot
//! once and [`search`] answers free-text queries against it, entirely in
//! memory.
//!
//! # Architecture
//!
//! ```text
//!   remote source                                   snapshot file
//! ┌──────────────┐    ┌────────────────┐          ┌──────────────┐
//! │ ComicSource  │───▶│ CorpusBuilder  │─────────▶│  xkcd.json   │
//! │ (HttpSource) │    │ (bounded pool) │          │ + comics/*.txt│
//! └──────────────┘    └────────────────┘          └──────┬───────┘
//!                                                        │ load once
//!                                                        ▼
//! ┌──────────────┐    ┌────────────────┐          ┌──────────────┐
//! │    render    │◀───│ SearchService  │◀─────────│ CorpusIndex  │
//! │(InlineArticle)│   │ (rank+override)│          │(SearchEntry) │
//! └──────────────┘    └────────────────┘          └──────────────┘
//! ```
//!
//! # Modules
//!
//! | Module    | Role                                                      |
//! |-----------|-----------------------------------------------------------|
//! | `text`    | Case folding, accent stripping, transliteration           |
//! | `fuzzy`   | 0..=100 similarity scores                                 |
//! | `index`   | Snapshot format and the validated in-memory corpus        |
//! | `search`  | Top-K ranking and the numeric-id override                 |
//! | `build`   | Remote source, crawl pool, audit files                    |
//! | `render`  | Inline articles for chat transports                       |
//!
//! # Usage
//!
//! ```no_run
//! use comicdex::{CorpusIndex, SearchService};
//!
//! let index = CorpusIndex::open("xkcd.json").expect("snapshot should load");
//! let service = SearchService::new(index);
//! for id in service.search("bobby tables") {
//!     let record = service.index().get_by_id(id).expect("results resolve");
//!     println!("{} {}", id, record.display_title());
//! }
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod logging;
pub mod render;
pub mod search;
pub mod text;
pub mod types;

pub mod testing;

// Re-exports for public API
pub use build::{BuildReport, ComicSource, CorpusBuilder, FetchOutcome, HttpSource};
pub use config::{BuildConfig, SearchConfig, Settings};
pub use error::{BuildError, CorruptSnapshot, FetchError, SnapshotError};
pub use index::{CorpusIndex, CorpusSnapshot};
pub use render::{render_article, render_results, InlineArticle};
pub use search::{rank, rank_scored, SearchHit, SearchService};
pub use text::normalize;
pub use types::{ComicId, ComicRecord, SearchEntry};
