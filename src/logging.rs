// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Log setup for the binary.
//!
//! Logs go to stderr so `search --json` output stays clean on stdout.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "comicdex=info",
        1 => "comicdex=debug",
        _ => "comicdex=trace",
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, wins over `verbosity`.
///
/// Calling it twice is harmless: the second call leaves the first subscriber in place.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
