// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matching blocks and the character-level ratios built on them.
//!
//! The decomposition is Ratcliff/Obershelp: find the longest common substring,
//! then recurse on whatever is left of it and right of it. The total size of
//! the blocks is the number of characters the two strings share "in order".
//!
//! Inputs are processed text (ASCII), so everything works on bytes.

use super::round_score;

/// A run of `size` equal bytes at `a[a..a + size]` and `b[b..b + size]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Block {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Among equally long candidates, the one starting earliest in `a` wins, then
/// the one starting earliest in `b`. Returns a zero-size block at `(alo, blo)`
/// when nothing matches.
fn longest_match(a: &[u8], b: &[u8], alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
    let mut best = Block {
        a: alo,
        b: blo,
        size: 0,
    };

    // prev[k] = length of the common suffix ending at a[i - 1], b[blo + k - 1]
    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];
    let mut curr = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let k = j - blo + 1;
            if a[i] == b[j] {
                let run = prev[k - 1] + 1;
                curr[k] = run;
                if run > best.size {
                    best = Block {
                        a: i + 1 - run,
                        b: j + 1 - run,
                        size: run,
                    };
                }
            } else {
                curr[k] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// All matching blocks of `a` and `b`, in order, adjacent blocks merged.
///
/// The last element is always the zero-size sentinel `(a.len(), b.len(), 0)`.
pub fn matching_blocks(a: &str, b: &str) -> Vec<Block> {
    blocks_of(a.as_bytes(), b.as_bytes())
}

fn blocks_of(a: &[u8], b: &[u8]) -> Vec<Block> {
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut found = Vec::new();

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let m = longest_match(a, b, alo, ahi, blo, bhi);
        if m.size == 0 {
            continue;
        }
        found.push(m);
        if alo < m.a && blo < m.b {
            pending.push((alo, m.a, blo, m.b));
        }
        if m.a + m.size < ahi && m.b + m.size < bhi {
            pending.push((m.a + m.size, ahi, m.b + m.size, bhi));
        }
    }

    found.sort_unstable();

    let mut merged: Vec<Block> = Vec::with_capacity(found.len() + 1);
    for m in found {
        if let Some(last) = merged.last_mut() {
            if last.a + last.size == m.a && last.b + last.size == m.b {
                last.size += m.size;
                continue;
            }
        }
        merged.push(m);
    }

    merged.push(Block {
        a: a.len(),
        b: b.len(),
        size: 0,
    });
    merged
}

/// `2 * matched / total`, in `0.0..=1.0`. Two empty strings are identical.
fn raw_ratio(a: &[u8], b: &[u8]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched: usize = blocks_of(a, b).iter().map(|m| m.size).sum();
    2.0 * matched as f64 / total as f64
}

/// Whole-string similarity.
///
/// 100 for equal strings, 0 when either side is empty.
pub fn ratio(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    round_score(100.0 * raw_ratio(a.as_bytes(), b.as_bytes()))
}

/// Similarity of the shorter string against its best-aligned window in the longer one.
///
/// Each matching block proposes an alignment: the window of the longer string
/// that would put the block's bytes on top of each other. A window that is a
/// near-exact copy short-circuits to 100.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (shorter, longer) = if a.len() <= b.len() {
        (a.as_bytes(), b.as_bytes())
    } else {
        (b.as_bytes(), a.as_bytes())
    };

    let mut best = 0.0f64;
    for block in blocks_of(shorter, longer) {
        let start = block.b.saturating_sub(block.a);
        let end = (start + shorter.len()).min(longer.len());
        let score = raw_ratio(shorter, &longer[start..end]);
        if score > 0.995 {
            return 100;
        }
        best = best.max(score);
    }

    round_score(100.0 * best)
}
