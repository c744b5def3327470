// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use comicdex::config::{BuildConfig, SearchConfig, Settings};
use comicdex::{build, logging, render_results, CorpusIndex, SearchService};

mod cli;
use cli::display::*;
use cli::{BuildOverrides, Cli, Commands, SearchOverrides};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(error) = run(cli) {
        eprintln!("❌ {:#}", error);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    match cli.command {
        Commands::Build {
            output,
            base_url,
            concurrency,
            timeout_secs,
            max_id,
            no_audit,
        } => {
            let config = BuildOverrides {
                output,
                base_url,
                concurrency,
                timeout_secs,
                max_id,
                no_audit,
            }
            .apply(settings.build);
            config.validate()?;
            run_build(&config)
        }
        Commands::Search {
            query,
            snapshot,
            limit,
            json,
        } => {
            let config = SearchOverrides { snapshot, limit }.apply(settings.search);
            run_search(&config, &query, json)
        }
        Commands::Inspect { file } => inspect_snapshot(&file),
    }
}

fn run_build(config: &BuildConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let started = Instant::now();
    let report = runtime
        .block_on(build::run_build(config))
        .context("build failed")?;

    eprintln!();
    eprintln!("✅ Build complete");
    eprintln!(
        "   {} comics │ {} placeholders │ {} failed │ {:.1}s",
        report.snapshot.len(),
        report.placeholders.len(),
        failure_count(report.failures.len()),
        started.elapsed().as_secs_f64()
    );
    eprintln!("   snapshot: {}", config.snapshot_path().display());
    if !report.is_complete() {
        eprintln!("   failed ids: {}", id_ranges(&report.failed_ids()));
    }

    Ok(())
}

fn run_search(config: &SearchConfig, query: &str, json: bool) -> Result<()> {
    let index = CorpusIndex::open(&config.snapshot)
        .with_context(|| format!("failed to load {}", config.snapshot.display()))?;
    let service = SearchService::new(index).with_limit(config.limit);
    let hits = service.search_hits(query);

    if json {
        let ids: Vec<_> = hits.iter().map(|hit| hit.id).collect();
        let articles = render_results(service.index(), &ids, &config.permalink_base);
        println!("{}", serde_json::to_string_pretty(&articles)?);
        return Ok(());
    }

    section_top(&format!("{} results for {:?}", hits.len(), query));
    if hits.is_empty() {
        row(&themed(GRAY, &[], " no results"));
    }
    for hit in &hits {
        let Some(record) = service.index().get_by_id(hit.id) else {
            continue;
        };
        let title = truncate(record.display_title(), 31);
        let alt = truncate(&record.alt.replace(['\n', '\r'], " "), 35);
        row(&format!(
            " {} {} {} {}",
            id_label(hit.id, hit.pinned),
            score_value(hit.score),
            pad_right(&themed(BRIGHT_GREEN, &[BOLD], &title), 32),
            themed(GRAY, &[DIM], &alt)
        ));
    }
    section_bot();

    Ok(())
}

fn inspect_snapshot(file: &Path) -> Result<()> {
    let index =
        CorpusIndex::open(file).with_context(|| format!("failed to load {}", file.display()))?;
    let missing = index.missing_ids();

    section_top("SNAPSHOT");
    row(&format!(" file      {}", truncate(&file.display().to_string(), 68)));
    row(&format!(" records   {}", index.len()));
    match (index.records().map(|r| r.num).min(), index.max_id()) {
        (Some(min), Some(max)) => row(&format!(" ids       {}-{}", min, max)),
        _ => row(&themed(GRAY, &[], " ids       (empty)")),
    }
    row(&format!(" gaps      {}", failure_count(missing.len())));
    if !missing.is_empty() {
        row(&format!(" missing   {}", truncate(&id_ranges(&missing), 68)));
    }
    section_bot();

    Ok(())
}
