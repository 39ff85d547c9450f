//! Script classification shared by segmentation and tokenization.

/// True for CJK unified ideographs in the Basic Multilingual Plane.
///
/// The range matches the ideographs that appear in Chinese academic prose;
/// kana, hangul, and supplementary-plane ideographs are deliberately out of
/// scope for this engine.
pub fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FA5}')
}
