//! Textual similarity between a task description and a capability label.
//!
//! Ratcliff/Obershelp "gestalt" ratio: find the longest common substring,
//! then recurse into the unmatched regions on either side. The ratio is
//! `2 * M / T` where M is the total length of all matching blocks and T
//! is the combined length of both strings.
//!
//! Operates on Unicode scalar values. Case folding is the caller's job;
//! everything reaching this module has already been through
//! `types::canonical`.

/// Normalized closeness of `a` and `b` in [0.0, 1.0].
///
/// `similarity("", "") == 1.0`; `similarity("", x) == 0.0` for non-empty x.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matched_len(&a, &b);
    2.0 * matched as f64 / total as f64
}

/// A contiguous run shared by both sequences: `a[a_start..a_start+len] == b[b_start..b_start+len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len:     usize,
}

/// All matching blocks, ordered by position in `a`.
pub fn matching_blocks(a: &[char], b: &[char]) -> Vec<MatchBlock> {
    let mut blocks = Vec::new();
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = longest_match(a, b, alo, ahi, blo, bhi);
        if block.len == 0 {
            continue;
        }
        if alo < block.a_start && blo < block.b_start {
            pending.push((alo, block.a_start, blo, block.b_start));
        }
        let a_end = block.a_start + block.len;
        let b_end = block.b_start + block.len;
        if a_end < ahi && b_end < bhi {
            pending.push((a_end, ahi, b_end, bhi));
        }
        blocks.push(block);
    }

    blocks.sort_by_key(|m| (m.a_start, m.b_start));
    blocks
}

fn matched_len(a: &[char], b: &[char]) -> usize {
    matching_blocks(a, b).iter().map(|m| m.len).sum()
}

/// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties go to the earliest start in `a`, then the earliest start in `b`,
/// so the result is fully deterministic.
fn longest_match(
    a:   &[char],
    b:   &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> MatchBlock {
    let mut best = MatchBlock { a_start: alo, b_start: blo, len: 0 };
    let width = bhi - blo;
    // run[j + 1] = length of the common suffix ending at a[i-1], b[blo + j].
    let mut prev = vec![0usize; width + 1];
    let mut curr = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in 0..width {
            curr[j + 1] = if a[i] == b[blo + j] { prev[j] + 1 } else { 0 };
            let k = curr[j + 1];
            if k > best.len {
                best = MatchBlock {
                    a_start: i + 1 - k,
                    b_start: blo + j + 1 - k,
                    len:     k,
                };
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}
