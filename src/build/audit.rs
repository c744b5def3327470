// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-comic audit files.
//!
//! One plain-text file per obtained record, named `xkcd_{num:05}.txt`:
//!
//! ```text
//! 353
//! Python
//! I wrote 20 short programs in Python yesterday.  It was wonderful. ...
//! ```
//!
//! They exist for humans diffing crawls. Nothing reads them back.

use std::path::{Path, PathBuf};

use crate::types::{ComicId, ComicRecord};

pub fn audit_file_name(num: ComicId) -> String {
    format!("xkcd_{:05}.txt", num)
}

pub fn audit_contents(record: &ComicRecord) -> String {
    format!("{}\n{}\n{}\n", record.num, record.title, record.alt)
}

/// Write the audit file for `record` into `dir`, returning its path.
pub async fn write_audit(dir: &Path, record: &ComicRecord) -> std::io::Result<PathBuf> {
    let path = dir.join(audit_file_name(record.num));
    tokio::fs::write(&path, audit_contents(record)).await?;
    Ok(path)
}
