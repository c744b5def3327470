// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build and search settings.
//!
//! Defaults live here. A JSON config file can replace any of them, and CLI
//! flags (or their `COMICDEX_*` environment variables) replace those in turn.
//!
//! ```text
//! {
//!   "build":  { "base_url": "https://xkcd.com", "concurrency": 32, "timeout_secs": 30,
//!               "placeholder_ids": [404], "output_dir": ".", "audit": true },
//!   "search": { "snapshot": "xkcd.json", "limit": 10, "permalink_base": "https://xkcd.com" }
//! }
//! ```
//!
//! Missing keys take their defaults; unknown keys are rejected.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::build::{DEFAULT_BASE_URL, DEFAULT_CONCURRENCY, DEFAULT_PLACEHOLDER_IDS, DEFAULT_TIMEOUT};
use crate::search::DEFAULT_LIMIT;
use crate::types::ComicId;

/// File name of the consolidated snapshot inside the output directory.
pub const SNAPSHOT_FILE_NAME: &str = "xkcd.json";

/// Directory name of the audit files inside the output directory.
pub const AUDIT_DIR_NAME: &str = "comics";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub base_url: String,
    pub concurrency: usize,
    pub timeout_secs: u64,
    pub placeholder_ids: Vec<ComicId>,
    pub output_dir: PathBuf,
    /// Crawl up to here instead of asking for the latest comic.
    pub max_id: Option<ComicId>,
    /// Write per-comic audit files next to the snapshot.
    pub audit: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            placeholder_ids: DEFAULT_PLACEHOLDER_IDS.to_vec(),
            output_dir: PathBuf::from("."),
            max_id: None,
            audit: true,
        }
    }
}

impl BuildConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.output_dir.join(SNAPSHOT_FILE_NAME)
    }

    /// Where audit files go, or `None` when they are disabled.
    pub fn audit_dir(&self) -> Option<PathBuf> {
        self.audit.then(|| self.output_dir.join(AUDIT_DIR_NAME))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base URL must not be empty"));
        }
        if self.concurrency == 0 {
            return Err(ConfigError::Invalid("concurrency must be greater than zero"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout must be at least one second"));
        }
        if self.max_id == Some(0) {
            return Err(ConfigError::Invalid("max id must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub snapshot: PathBuf,
    pub limit: usize,
    /// Comic `n` links to `{permalink_base}/{n}/`.
    pub permalink_base: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from(SNAPSHOT_FILE_NAME),
            limit: DEFAULT_LIMIT,
            permalink_base: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Everything a config file can set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub build: BuildConfig,
    pub search: SearchConfig,
}

impl Settings {
    pub fn parse(json: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json, path)
    }
}
