// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query answering: fuzzy ranking plus the numeric-id shortcut.
//!
//! Two layers. [`ranker`] scores a normalized query against every entry and
//! keeps the best `limit`. [`service`] wraps that with query normalization and
//! the rule that a query which *is* a comic number pins that comic to the top.

pub mod ranker;
pub mod service;

pub use ranker::*;
pub use service::*;
