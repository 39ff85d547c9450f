//! # Text Segmentation
//!
//! Splits academic prose into sentences and paragraphs without losing a
//! single character, so downstream rewriting stages can operate on small
//! units and splice their output back into the surrounding document.
//!
//! ## What we do
//!
//! - **Sentence segmentation** ([`segment`]): split on sentence-terminal
//!   punctuation from both the fullwidth (。！？) and ASCII (.!?) conventions,
//!   keeping each terminal run attached to the sentence it closes.
//! - **Paragraph splitting** ([`split_paragraphs`]): literal blank-line
//!   boundaries, round-trippable via [`join_paragraphs`].
//! - **Word counting** ([`count_words`]): CJK characters count individually,
//!   Latin letter runs count as one word each.
//!
//! ## Invariants worth knowing
//!
//! - [`segment`] is lossless: concatenating the returned sentences
//!   reproduces the input exactly, except that a trailing fragment
//!   containing only whitespace is dropped.
//! - Inter-sentence whitespace is never discarded; it stays attached as the
//!   prefix of the sentence that follows it.
//! - Text with no terminal mark at all comes back as a single sentence.

mod paragraph;
mod script;
mod sentence;
mod stats;

pub use paragraph::{join_paragraphs, split_paragraphs, PARAGRAPH_SEPARATOR};
pub use script::is_cjk;
pub use sentence::{is_terminal, segment, TERMINAL_MARKS};
pub use stats::count_words;

use serde::{Deserialize, Serialize};

/// An ordered run of sentences produced by [`segment`].
///
/// The unit owns its sentences; [`TextUnit::reassemble`] restores the
/// original text (minus a whitespace-only tail, see crate docs).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextUnit {
    sentences: Vec<String>,
}

impl TextUnit {
    /// Wraps an already-split sentence list.
    pub fn new(sentences: Vec<String>) -> Self {
        TextUnit { sentences }
    }

    /// Borrows the sentences in document order.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Number of sentences in the unit.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// True when the unit holds no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Concatenates the sentences back into a single string.
    pub fn reassemble(&self) -> String {
        self.sentences.concat()
    }

    /// Consumes the unit, yielding the owned sentence list.
    pub fn into_sentences(self) -> Vec<String> {
        self.sentences
    }

    /// Iterates over the sentences in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.sentences.iter()
    }
}

impl From<TextUnit> for Vec<String> {
    fn from(unit: TextUnit) -> Self {
        unit.sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reassemble_concatenates_in_order() {
        let unit = TextUnit::new(vec!["第一句。".into(), "第二句。".into()]);
        assert_eq!(unit.reassemble(), "第一句。第二句。");
        assert_eq!(unit.len(), 2);
        assert!(!unit.is_empty());
    }

    #[test]
    fn empty_unit_reassembles_to_empty_string() {
        let unit = TextUnit::default();
        assert_eq!(unit.reassemble(), "");
        assert!(unit.is_empty());
    }
}
