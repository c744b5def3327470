// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: everything that turns user or corpus text into the
//! lowercase ASCII form the fuzzy scorer compares.

mod normalize;
mod translit;

pub use normalize::*;
pub use translit::transliterate;
