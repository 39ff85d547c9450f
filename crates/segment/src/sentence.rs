//! Sentence boundary detection.
//!
//! The splitter walks the text once, closing a sentence whenever it sees a
//! run of terminal punctuation. Runs like `?!` or `。。` stay attached as one
//! suffix rather than producing degenerate one-character sentences.

use crate::TextUnit;

/// Sentence-terminal punctuation, fullwidth and ASCII conventions.
pub const TERMINAL_MARKS: [char; 6] = ['。', '！', '？', '.', '!', '?'];

/// True when `c` closes a sentence.
pub fn is_terminal(c: char) -> bool {
    TERMINAL_MARKS.contains(&c)
}

/// Splits `text` into sentences, keeping every character.
///
/// Each sentence ends with the terminal-mark run that closed it. Whitespace
/// between sentences is carried as the prefix of the following sentence, so
/// `segment(text).reassemble() == text` whenever the text does not end in a
/// whitespace-only tail. A tail without any terminal mark is kept as the
/// final sentence if it contains non-whitespace, and dropped otherwise.
///
/// # Examples
///
/// ```rust
/// use segment::segment;
///
/// let unit = segment("首先，提出假设。其次，检验假设。");
/// assert_eq!(unit.sentences(), ["首先，提出假设。", "其次，检验假设。"]);
///
/// let unit = segment("No terminal here");
/// assert_eq!(unit.sentences(), ["No terminal here"]);
/// ```
pub fn segment(text: &str) -> TextUnit {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if is_terminal(c) {
            // Absorb the rest of the terminal run so "?!" closes one
            // sentence, not two.
            while let Some(&next) = chars.peek() {
                if !is_terminal(next) {
                    break;
                }
                current.push(next);
                chars.next();
            }
            sentences.push(std::mem::take(&mut current));
        }
    }

    if !current.trim().is_empty() {
        sentences.push(current);
    }

    TextUnit::new(sentences)
}
