//! Word counting for mixed Chinese/English text.

use crate::script::is_cjk;

/// Counts words the way the revision reports expect: each CJK character is
/// one word, each maximal run of Latin letters is one word, everything else
/// (digits, punctuation, whitespace) only separates runs.
///
/// ```rust
/// use segment::count_words;
///
/// assert_eq!(count_words("面板数据"), 4);
/// assert_eq!(count_words("panel data"), 2);
/// assert_eq!(count_words("采用 DID 方法"), 5);
/// ```
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_latin_run = false;
    for c in text.chars() {
        if is_cjk(c) {
            count += 1;
            in_latin_run = false;
        } else if c.is_ascii_alphabetic() {
            if !in_latin_run {
                count += 1;
                in_latin_run = true;
            }
        } else {
            in_latin_run = false;
        }
    }
    count
}
