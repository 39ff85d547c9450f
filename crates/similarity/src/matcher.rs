//! Contiguous block matching over character sequences.
//!
//! The classic greedy alignment: find the longest common contiguous block,
//! recurse into the unmatched regions on both sides, then merge adjacent
//! blocks. Ties prefer the earliest position in the first sequence, so the
//! resulting block list is deterministic. No junk heuristics; academic
//! passages are short enough that the quadratic worst case does not bite.

use std::collections::HashMap;

/// One matched block: `len` characters starting at `a` in the first
/// sequence and `b` in the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Block {
    pub a: usize,
    pub b: usize,
    pub len: usize,
}

/// All matched blocks between `a` and `b`, sorted by position in `a`,
/// adjacent blocks merged.
pub(crate) fn matching_blocks(a: &[char], b: &[char]) -> Vec<Block> {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    let mut regions = vec![(0usize, a.len(), 0usize, b.len())];
    let mut raw: Vec<Block> = Vec::new();
    while let Some((alo, ahi, blo, bhi)) = regions.pop() {
        let best = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if best.len == 0 {
            continue;
        }
        if alo < best.a && blo < best.b {
            regions.push((alo, best.a, blo, best.b));
        }
        if best.a + best.len < ahi && best.b + best.len < bhi {
            regions.push((best.a + best.len, ahi, best.b + best.len, bhi));
        }
        raw.push(best);
    }

    raw.sort_by_key(|blk| (blk.a, blk.b));

    let mut blocks: Vec<Block> = Vec::new();
    for blk in raw {
        if let Some(last) = blocks.last_mut() {
            if last.a + last.len == blk.a && last.b + last.len == blk.b {
                last.len += blk.len;
                continue;
            }
        }
        blocks.push(blk);
    }
    blocks
}

/// Longest common contiguous block within `a[alo..ahi]` / `b[blo..bhi]`.
///
/// Classic rolling-table formulation: `j2len[j]` holds the length of the
/// match ending at `a[i]`/`b[j]`; each row only needs the previous row.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> Block {
    let mut best = Block {
        a: alo,
        b: blo,
        len: 0,
    };
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for i in alo..ahi {
        let mut next_j2len: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let run = match j.checked_sub(1) {
                    Some(prev) => j2len.get(&prev).copied().unwrap_or(0) + 1,
                    None => 1,
                };
                next_j2len.insert(j, run);
                if run > best.len {
                    best = Block {
                        a: i + 1 - run,
                        b: j + 1 - run,
                        len: run,
                    };
                }
            }
        }
        j2len = next_j2len;
    }
    best
}
