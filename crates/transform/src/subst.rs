//! Occurrence scanning and splicing shared by the rewrite stages.
//!
//! Offsets are byte positions into the scanned text. Latin needles are held
//! to word boundaries so `use` never fires inside `because`; CJK needles
//! match as substrings, which is how the language works.

use std::ops::Range;

/// Byte offsets of the occurrences of `needle` in `text` that sit on valid
/// word boundaries and do not overlap any protected span. Ascending order.
pub(crate) fn eligible_occurrences(
    text: &str,
    needle: &str,
    protected: &[Range<usize>],
) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    text.match_indices(needle)
        .filter(|&(start, found)| {
            boundary_ok(text, start, found) && !overlaps(protected, start, start + found.len())
        })
        .map(|(start, _)| start)
        .collect()
}

/// True when `[start, end)` intersects any protected span.
pub(crate) fn overlaps(spans: &[Range<usize>], start: usize, end: usize) -> bool {
    spans.iter().any(|span| span.start < end && start < span.end)
}

/// Boundary rule: an edge of the needle that is ASCII alphanumeric must not
/// touch another alphanumeric character in the surrounding text.
fn boundary_ok(text: &str, start: usize, found: &str) -> bool {
    let before_ok = match found.chars().next() {
        Some(c) if c.is_ascii_alphanumeric() => text[..start]
            .chars()
            .next_back()
            .map_or(true, |prev| !prev.is_ascii_alphanumeric()),
        _ => true,
    };
    let after_ok = match found.chars().next_back() {
        Some(c) if c.is_ascii_alphanumeric() => text[start + found.len()..]
            .chars()
            .next()
            .map_or(true, |next| !next.is_ascii_alphanumeric()),
        _ => true,
    };
    before_ok && after_ok
}

/// Splices `replacement` over the needle occurrences at `starts` (ascending
/// byte offsets; each occurrence is `needle_len` bytes long).
pub(crate) fn replace_at(
    text: &str,
    needle_len: usize,
    starts: &[usize],
    replacement: &str,
) -> String {
    let mut out = String::with_capacity(text.len() + replacement.len());
    let mut cursor = 0;
    for &start in starts {
        out.push_str(&text[cursor..start]);
        out.push_str(replacement);
        cursor = start + needle_len;
    }
    out.push_str(&text[cursor..]);
    out
}
