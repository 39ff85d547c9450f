//! Protected-term tracking.
//!
//! A [`TermGuard`] knows the full vocabulary that must never be rewritten;
//! [`TermGuard::observe`] narrows that to the terms actually present in one
//! input, producing the [`ProtectedTermSet`] that travels with the rewrite.

use std::collections::BTreeSet;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Watches a base vocabulary of protected terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermGuard {
    terms: Vec<String>,
}

impl TermGuard {
    /// A guard over `terms`; typically the lexicon's built-in list.
    pub fn new(terms: Vec<String>) -> Self {
        TermGuard { terms }
    }

    /// The base vocabulary, before observing any text.
    pub fn base_terms(&self) -> &[String] {
        &self.terms
    }

    /// Builds the protected set for one input: the base vocabulary plus
    /// `extras`, filtered to terms literally present in `text`. Duplicates
    /// collapse; ordering is deterministic (lexicographic).
    pub fn observe(&self, text: &str, extras: &[String]) -> ProtectedTermSet {
        let present = self
            .terms
            .iter()
            .chain(extras.iter())
            .filter(|term| !term.is_empty() && text.contains(term.as_str()))
            .cloned()
            .collect();
        ProtectedTermSet { terms: present }
    }
}

/// The protected terms found in one concrete input.
///
/// Everything downstream of the guard treats this set as read-only: the
/// transformer consults [`ProtectedTermSet::spans`] to leave occurrences
/// untouched, and the orchestrators consult [`ProtectedTermSet::missing_from`]
/// to reject generated rewrites that dropped a term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedTermSet {
    terms: BTreeSet<String>,
}

impl ProtectedTermSet {
    /// Builds a set directly from terms; mostly useful in tests.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProtectedTermSet {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Owned, sorted copy of the terms.
    pub fn to_vec(&self) -> Vec<String> {
        self.terms.iter().cloned().collect()
    }

    /// Byte ranges of every occurrence of every protected term in `text`,
    /// sorted by start offset. Ranges may overlap when one protected term
    /// contains another.
    pub fn spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans: Vec<Range<usize>> = Vec::new();
        for term in &self.terms {
            for (start, found) in text.match_indices(term.as_str()) {
                spans.push(start..start + found.len());
            }
        }
        spans.sort_by_key(|r| (r.start, r.end));
        spans
    }

    /// Protected terms that `text` no longer contains.
    pub fn missing_from<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.terms
            .iter()
            .filter(|term| !text.contains(term.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// True when every protected term still appears in `text`.
    pub fn all_present_in(&self, text: &str) -> bool {
        self.terms.iter().all(|term| text.contains(term.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> TermGuard {
        TermGuard::new(vec![
            "面板数据".to_string(),
            "固定效应".to_string(),
            "panel data".to_string(),
        ])
    }

    // ==================== Observation Tests ====================

    #[test]
    fn observe_keeps_only_present_terms() {
        let set = guard().observe("本文采用面板数据模型。", &[]);
        assert!(set.contains("面板数据"));
        assert!(!set.contains("固定效应"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn observe_merges_extras() {
        let extras = vec!["格兰杰因果".to_string()];
        let set = guard().observe("面板数据与格兰杰因果检验。", &extras);
        assert!(set.contains("面板数据"));
        assert!(set.contains("格兰杰因果"));
    }

    #[test]
    fn observe_deduplicates_and_ignores_empty_terms() {
        let extras = vec!["面板数据".to_string(), String::new()];
        let set = guard().observe("面板数据", &extras);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn observe_nothing_present_yields_empty_set() {
        let set = guard().observe("完全无关的文本", &[]);
        assert!(set.is_empty());
    }

    // ==================== Span Tests ====================

    #[test]
    fn spans_cover_every_occurrence() {
        let set = ProtectedTermSet::from_terms(["面板数据"]);
        let text = "面板数据很常用，面板数据也有局限。";
        let spans = set.spans(text);
        assert_eq!(spans.len(), 2);
        for span in &spans {
            assert_eq!(&text[span.clone()], "面板数据");
        }
    }

    #[test]
    fn spans_are_sorted_by_start() {
        let set = ProtectedTermSet::from_terms(["数据", "面板数据"]);
        let spans = set.spans("面板数据");
        assert!(spans.windows(2).all(|w| w[0].start <= w[1].start));
    }

    // ==================== Verification Tests ====================

    #[test]
    fn missing_from_reports_dropped_terms() {
        let set = ProtectedTermSet::from_terms(["面板数据", "固定效应"]);
        let missing = set.missing_from("只剩面板数据了。");
        assert_eq!(missing, ["固定效应"]);
        assert!(!set.all_present_in("只剩面板数据了。"));
        assert!(set.all_present_in("面板数据与固定效应都在。"));
    }
}
