//! Script-aware token and n-gram extraction.

use std::collections::BTreeSet;

use segment::is_cjk;

/// Tokens for the Jaccard overlap metric.
///
/// Cleaning keeps CJK ideographs, ASCII alphanumerics, and whitespace;
/// everything else is removed before splitting. Within each whitespace
/// chunk, maximal same-script runs are taken separately: CJK runs slide a
/// `window`-wide gram over the run (runs shorter than the window survive
/// whole), Latin/digit runs are kept as single tokens.
pub(crate) fn token_set(text: &str, window: usize) -> BTreeSet<String> {
    let cleaned: String = text
        .chars()
        .filter(|&c| is_cjk(c) || c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    let mut tokens = BTreeSet::new();
    for chunk in cleaned.split_whitespace() {
        let chars: Vec<char> = chunk.chars().collect();
        let mut run_start = 0;
        for idx in 1..=chars.len() {
            let at_boundary = idx == chars.len() || is_cjk(chars[idx]) != is_cjk(chars[run_start]);
            if at_boundary {
                push_run(&chars[run_start..idx], window, &mut tokens);
                run_start = idx;
            }
        }
    }
    tokens
}

fn push_run(run: &[char], window: usize, tokens: &mut BTreeSet<String>) {
    if run.is_empty() {
        return;
    }
    if is_cjk(run[0]) && run.len() >= window {
        for gram in run.windows(window) {
            tokens.insert(gram.iter().collect());
        }
    } else {
        tokens.insert(run.iter().collect());
    }
}

/// Character `n`-grams over the whitespace-stripped text. Text shorter than
/// `n` degrades to a single whole-string gram, so short inputs still
/// produce a comparable set.
pub(crate) fn ngram_set(text: &str, n: usize) -> BTreeSet<String> {
    let stripped: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut grams = BTreeSet::new();
    if stripped.is_empty() {
        return grams;
    }
    if stripped.len() < n {
        grams.insert(stripped.iter().collect());
    } else {
        for gram in stripped.windows(n) {
            grams.insert(gram.iter().collect());
        }
    }
    grams
}

/// Jaccard overlap of two sets.
///
/// Two empty sets count as identical: that only happens when neither text
/// produced tokens (for example punctuation-only inputs), and the caller
/// has already ruled out empty text.
pub(crate) fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => {
            let intersection = a.intersection(b).count();
            let union = a.union(b).count();
            intersection as f64 / union as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ==================== Token Tests ====================

    #[test]
    fn cjk_runs_become_bigrams() {
        let tokens = token_set("面板数据", 2);
        assert_eq!(tokens, set(&["面板", "板数", "数据"]));
    }

    #[test]
    fn short_cjk_run_survives_whole() {
        let tokens = token_set("好", 2);
        assert_eq!(tokens, set(&["好"]));
    }

    #[test]
    fn latin_runs_stay_whole_words() {
        let tokens = token_set("panel data", 2);
        assert_eq!(tokens, set(&["panel", "data"]));
    }

    #[test]
    fn mixed_chunk_splits_at_script_boundary() {
        let tokens = token_set("面板data", 2);
        assert_eq!(tokens, set(&["面板", "data"]));
    }

    #[test]
    fn punctuation_is_cleaned_before_tokenizing() {
        let tokens = token_set("面板数据！(panel)", 2);
        assert!(tokens.contains("面板"));
        assert!(tokens.contains("panel"));
        assert!(!tokens.iter().any(|t| t.contains('！') || t.contains('(')));
    }

    #[test]
    fn punctuation_only_text_has_no_tokens() {
        assert!(token_set("！？。，", 2).is_empty());
    }

    // ==================== N-gram Tests ====================

    #[test]
    fn ngrams_ignore_whitespace() {
        assert_eq!(ngram_set("a b c d", 3), ngram_set("abcd", 3));
    }

    #[test]
    fn short_text_becomes_single_gram() {
        assert_eq!(ngram_set("ab", 3), set(&["ab"]));
    }

    #[test]
    fn empty_text_has_no_grams() {
        assert!(ngram_set("   ", 3).is_empty());
    }

    // ==================== Jaccard Tests ====================

    #[test]
    fn jaccard_of_equal_sets_is_one() {
        let s = set(&["a", "b"]);
        assert!((jaccard(&s, &s) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn jaccard_of_disjoint_sets_is_zero() {
        assert_eq!(jaccard(&set(&["a"]), &set(&["b"])), 0.0);
    }

    #[test]
    fn jaccard_with_one_empty_set_is_zero() {
        assert_eq!(jaccard(&set(&[]), &set(&["a"])), 0.0);
    }

    #[test]
    fn jaccard_of_two_empty_sets_is_one() {
        assert_eq!(jaccard(&set(&[]), &set(&[])), 1.0);
    }

    #[test]
    fn jaccard_of_partial_overlap() {
        // {a, b} vs {b, c}: intersection 1, union 3.
        let value = jaccard(&set(&["a", "b"]), &set(&["b", "c"]));
        assert!((value - 1.0 / 3.0).abs() < 1e-12);
    }
}
