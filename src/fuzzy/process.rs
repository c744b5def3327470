// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String preprocessing shared by every scorer.

use std::collections::BTreeSet;

/// Reduce a string to lowercase ASCII words separated by spaces.
///
/// Every character that is not an ASCII letter, digit or underscore becomes a
/// space; non-ASCII characters are removed outright. Leading and trailing
/// spaces are trimmed. Interior runs of spaces are kept as they are, since
/// they count towards the character-level similarity.
pub fn full_process(value: &str) -> String {
    let processed: String = value
        .chars()
        .filter(char::is_ascii)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    processed.trim().to_string()
}

/// A processed string together with its token views.
///
/// Corpus entries are prepared once at index load; queries once per search.
/// Scoring then only compares bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Prepared {
    text: String,
    sorted: String,
    tokens: BTreeSet<String>,
}

impl Prepared {
    pub fn new(raw: &str) -> Self {
        let text = full_process(raw);
        let mut words: Vec<&str> = text.split_whitespace().collect();
        words.sort_unstable();
        let sorted = words.join(" ");
        let tokens = words.into_iter().map(str::to_owned).collect();

        Self {
            text,
            sorted,
            tokens,
        }
    }

    /// The processed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tokens sorted and joined by single spaces.
    pub fn sorted(&self) -> &str {
        &self.sorted
    }

    /// Distinct tokens, in sorted order.
    pub fn tokens(&self) -> &BTreeSet<String> {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
