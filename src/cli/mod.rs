// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the comicdex command-line interface.
//!
//! Three subcommands: `build` to crawl the remote source into a snapshot,
//! `search` to query a snapshot, and `inspect` to summarize one. Every flag
//! that is left out falls back to the config file (`--config`), then to the
//! built-in defaults.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use comicdex::config::{BuildConfig, SearchConfig};
use comicdex::ComicId;

#[derive(Parser)]
#[command(
    name = "comicdex",
    about = "Offline fuzzy search over xkcd comic metadata",
    version
)]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides it
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON file with "build" and "search" defaults
    #[arg(long, global = true, env = "COMICDEX_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Crawl every comic and write a snapshot
    Build {
        /// Output directory for xkcd.json and the per-comic audit files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Remote base URL
        #[arg(long, env = "COMICDEX_BASE_URL")]
        base_url: Option<String>,

        /// Maximum requests in flight
        #[arg(short, long, env = "COMICDEX_CONCURRENCY")]
        concurrency: Option<usize>,

        /// Per-request timeout in seconds
        #[arg(long, env = "COMICDEX_TIMEOUT_SECS")]
        timeout_secs: Option<u64>,

        /// Stop at this id instead of asking for the latest comic
        #[arg(long)]
        max_id: Option<ComicId>,

        /// Skip the per-comic audit files
        #[arg(long)]
        no_audit: bool,
    },

    /// Search a snapshot and display results
    Search {
        /// Search query. A bare comic number pins that comic first
        query: String,

        /// Snapshot file
        #[arg(short, long, env = "COMICDEX_SNAPSHOT")]
        snapshot: Option<PathBuf>,

        /// Maximum number of fuzzy results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON inline articles
        #[arg(long)]
        json: bool,
    },

    /// Summarize a snapshot: record count, id range, gaps
    Inspect {
        /// Snapshot file
        file: PathBuf,
    },
}

/// Build flags layered over a base config. Unset flags keep the base value.
pub struct BuildOverrides {
    pub output: Option<PathBuf>,
    pub base_url: Option<String>,
    pub concurrency: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub max_id: Option<ComicId>,
    pub no_audit: bool,
}

impl BuildOverrides {
    pub fn apply(self, mut config: BuildConfig) -> BuildConfig {
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        if self.max_id.is_some() {
            config.max_id = self.max_id;
        }
        if self.no_audit {
            config.audit = false;
        }
        config
    }
}

/// Search flags layered over a base config.
pub struct SearchOverrides {
    pub snapshot: Option<PathBuf>,
    pub limit: Option<usize>,
}

impl SearchOverrides {
    pub fn apply(self, mut config: SearchConfig) -> SearchConfig {
        if let Some(snapshot) = self.snapshot {
            config.snapshot = snapshot;
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        config
    }
}
