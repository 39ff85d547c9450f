//! Rewrite results and their report rendering.

use serde::{Deserialize, Serialize};

use crate::report::EMPTY_INPUT_NOTE;

/// Which pipeline produced a [`RewriteResult`].
///
/// The two pipelines score different things (pairwise similarity on a 0-1
/// scale versus a generative-style likelihood on a 0-100 scale), so the
/// report rendering needs to know where a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteKind {
    Dedup,
    Destyle,
}

/// Outcome of one rewrite run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteResult {
    /// Input text, untouched.
    pub original: String,
    /// Rewritten text. Equals `original` when nothing fired.
    pub rewritten: String,
    /// Score before the rewrite. Similarity pipelines report 1.0 here by
    /// definition; style pipelines report the input's 0-100 likelihood.
    pub before_score: f64,
    /// Score after the rewrite, same scale as `before_score`.
    pub after_score: f64,
    /// Protected terms that actually occurred in the input, sorted.
    pub preserved_terms: Vec<String>,
    /// Human-readable notes describing what changed.
    pub changes: Vec<String>,
    /// Sentence count of the rewritten text.
    pub sentence_count: usize,
    /// Which pipeline produced this result.
    pub kind: RewriteKind,
}

impl RewriteResult {
    /// Degenerate result for empty or whitespace-only input.
    pub(crate) fn empty_input(text: &str, kind: RewriteKind) -> Self {
        Self {
            original: text.to_string(),
            rewritten: text.to_string(),
            before_score: 0.0,
            after_score: 0.0,
            preserved_terms: Vec::new(),
            changes: vec![EMPTY_INPUT_NOTE.to_string()],
            sentence_count: 0,
            kind,
        }
    }

    /// Renders the result as a Chinese-language markdown report.
    pub fn to_markdown(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        match self.kind {
            RewriteKind::Dedup => {
                lines.push("# 📊 降重处理报告\n".to_string());
                let reduction = (self.before_score - self.after_score) * 100.0;
                lines.push("## 相似度变化".to_string());
                lines.push(format!(
                    "- 处理前相似度：{:.1}%",
                    self.before_score * 100.0
                ));
                lines.push(format!("- 处理后相似度：{:.1}%", self.after_score * 100.0));
                lines.push(format!("- 降重幅度：**{reduction:.1}%**\n"));

                if !self.preserved_terms.is_empty() {
                    lines.push("## 保留的专业术语".to_string());
                    lines.push(self.preserved_terms.join(", "));
                    lines.push(String::new());
                }
            }
            RewriteKind::Destyle => {
                lines.push("# 🤖 降AI处理报告\n".to_string());
                let reduction = self.before_score - self.after_score;
                lines.push("## AI概率变化".to_string());
                lines.push(format!("- 处理前AI概率：{:.1}%", self.before_score));
                lines.push(format!("- 处理后AI概率：{:.1}%", self.after_score));
                lines.push(format!("- 降低幅度：**{reduction:.1}%**\n"));
            }
        }

        lines.push("## 主要变化".to_string());
        for change in &self.changes {
            lines.push(format!("- {change}"));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: RewriteKind) -> RewriteResult {
        RewriteResult {
            original: "原文。".to_string(),
            rewritten: "改写。".to_string(),
            before_score: 1.0,
            after_score: 0.65,
            preserved_terms: vec!["面板数据".to_string()],
            changes: vec!["进行了同义词替换和表达重构".to_string()],
            sentence_count: 1,
            kind,
        }
    }

    #[test]
    fn empty_input_carries_the_placeholder_note() {
        let result = RewriteResult::empty_input("   ", RewriteKind::Dedup);
        assert_eq!(result.original, "   ");
        assert_eq!(result.rewritten, "   ");
        assert_eq!(result.before_score, 0.0);
        assert_eq!(result.after_score, 0.0);
        assert_eq!(result.sentence_count, 0);
        assert_eq!(result.changes, [EMPTY_INPUT_NOTE]);
        assert!(result.preserved_terms.is_empty());
    }

    #[test]
    fn dedup_report_shows_similarity_percentages() {
        let report = sample(RewriteKind::Dedup).to_markdown();
        assert!(report.starts_with("# 📊 降重处理报告"));
        assert!(report.contains("- 处理前相似度：100.0%"));
        assert!(report.contains("- 处理后相似度：65.0%"));
        assert!(report.contains("- 降重幅度：**35.0%**"));
        assert!(report.contains("## 保留的专业术语"));
        assert!(report.contains("面板数据"));
        assert!(report.contains("- 进行了同义词替换和表达重构"));
    }

    #[test]
    fn dedup_report_omits_terms_section_when_none_found() {
        let mut result = sample(RewriteKind::Dedup);
        result.preserved_terms.clear();
        assert!(!result.to_markdown().contains("保留的专业术语"));
    }

    #[test]
    fn destyle_report_shows_raw_likelihoods() {
        let mut result = sample(RewriteKind::Destyle);
        result.before_score = 72.5;
        result.after_score = 40.0;
        let report = result.to_markdown();
        assert!(report.starts_with("# 🤖 降AI处理报告"));
        assert!(report.contains("- 处理前AI概率：72.5%"));
        assert!(report.contains("- 处理后AI概率：40.0%"));
        assert!(report.contains("- 降低幅度：**32.5%**"));
        assert!(!report.contains("保留的专业术语"));
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_value(RewriteKind::Destyle).unwrap();
        assert_eq!(json, serde_json::json!("destyle"));
    }
}
