// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Offline corpus construction: crawl the remote source, write a snapshot.

pub mod audit;
pub mod parallel;
pub mod source;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::BuildConfig;
use crate::error::BuildError;

pub use parallel::*;
pub use source::*;

/// Create a progress style for the crawl progress bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Crawl according to `config` and write the snapshot into its output directory.
///
/// Returns the report so callers can surface failed ids.
pub async fn run_build(config: &BuildConfig) -> Result<BuildReport, BuildError> {
    let source =
        HttpSource::new(config.base_url.clone(), config.timeout()).map_err(BuildError::Client)?;

    let mut builder = CorpusBuilder::new(source)
        .concurrency(config.concurrency)
        .placeholder_ids(config.placeholder_ids.iter().copied());
    if let Some(dir) = config.audit_dir() {
        builder = builder.audit_dir(dir);
    }

    // 1. Find the end of the range
    let max_id = match config.max_id {
        Some(max_id) => max_id,
        None => builder.latest_num().await?,
    };

    // 2. Crawl with progress
    #[cfg(feature = "parallel")]
    let progress = {
        let pb = ProgressBar::new(u64::from(max_id));
        pb.set_style(create_progress_style());
        pb.set_prefix("Fetching");
        pb.set_message("comics...");
        pb
    };
    #[cfg(feature = "parallel")]
    {
        builder = builder.progress(progress.clone());
    }

    let report = builder.build_up_to(max_id).await?;

    #[cfg(feature = "parallel")]
    progress.finish_with_message(format!("fetched {} comics", report.snapshot.len()));

    // 3. Persist
    report.write_snapshot(config.snapshot_path())?;

    Ok(report)
}
