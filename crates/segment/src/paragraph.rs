//! Paragraph boundaries.
//!
//! Paragraphs are separated by a literal blank line. Splitting keeps empty
//! pieces so that rejoining with the same separator reproduces the input
//! byte for byte, whatever the run of newlines looked like.

/// The separator recognized between paragraphs.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Splits on [`PARAGRAPH_SEPARATOR`], preserving empty pieces.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_SEPARATOR).collect()
}

/// Joins paragraphs with [`PARAGRAPH_SEPARATOR`]; the inverse of
/// [`split_paragraphs`].
pub fn join_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> String {
    paragraphs
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}
