//! Change identification.
//!
//! Derives a short, human-readable list of what a rewrite did from cheap
//! surface heuristics over (original, rewritten). The notes are product
//! copy shown to manuscript authors, so they stay in Chinese.

/// Upper bound on reported change notes.
pub(crate) const MAX_CHANGES: usize = 5;

/// The single note attached to a degenerate empty-input run.
pub(crate) const EMPTY_INPUT_NOTE: &str = "输入为空，未作处理";

/// Enumerative markers whose disappearance signals restructuring.
const SEQUENCE_MARKERS: [&str; 6] = ["首先", "其次", "再次", "最后", "第一", "第二"];

/// Describes the main differences between `original` and `rewritten`.
///
/// Always returns at least one note and at most [`MAX_CHANGES`].
pub(crate) fn identify_changes(original: &str, rewritten: &str) -> Vec<String> {
    let mut changes = Vec::new();

    let orig_chars = original.chars().count();
    let new_chars = rewritten.chars().count();
    let len_ratio = if orig_chars > 0 {
        new_chars as f64 / orig_chars as f64
    } else {
        1.0
    };

    if len_ratio > 1.2 {
        changes.push(format!(
            "适当扩展了内容表述（增加约{}%）",
            ((len_ratio - 1.0) * 100.0) as i64
        ));
    } else if len_ratio > 1.05 {
        changes.push("略微扩展了部分表述".to_string());
    } else if len_ratio < 0.8 {
        changes.push(format!(
            "精简了冗余表达（减少约{}%）",
            ((1.0 - len_ratio) * 100.0) as i64
        ));
    } else if len_ratio < 0.95 {
        changes.push("略微精简了部分表述".to_string());
    }

    let orig_sentences = terminal_count(original);
    let new_sentences = terminal_count(rewritten);
    if new_sentences as f64 > orig_sentences as f64 * 1.3 {
        changes.push("拆分了长句，增加了句子数量".to_string());
    } else if (new_sentences as f64) < orig_sentences as f64 * 0.7 {
        changes.push("合并了相关句子，增强连贯性".to_string());
    }

    let orig_seq = marker_presence(original);
    let new_seq = marker_presence(rewritten);
    if new_seq < orig_seq {
        changes.push("调整了论述结构，减少序列词使用".to_string());
    }

    // A middling quick ratio at near-identical length is the signature of
    // word-level substitution rather than restructuring.
    let quick = similarity::quick_ratio(original, rewritten);
    if quick > 0.4 && quick < 0.8 && len_ratio > 0.9 && len_ratio < 1.1 {
        changes.push("进行了同义词替换和表达重构".to_string());
    }

    let orig_paras = original.matches("\n\n").count();
    let new_paras = rewritten.matches("\n\n").count();
    if new_paras > orig_paras + 1 {
        changes.push("增加了段落划分".to_string());
    } else if new_paras + 1 < orig_paras {
        changes.push("合并了段落，增强整体性".to_string());
    }

    if changes.is_empty() {
        changes.push("调整了词汇和表达方式".to_string());
    }

    changes.truncate(MAX_CHANGES);
    changes
}

fn terminal_count(text: &str) -> usize {
    text.matches('。').count() + text.matches('.').count()
}

fn marker_presence(text: &str) -> usize {
    SEQUENCE_MARKERS
        .iter()
        .filter(|marker| text.contains(*marker))
        .count()
}
