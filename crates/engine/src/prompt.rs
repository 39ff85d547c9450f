//! Prompt assembly for external rewrites.
//!
//! Each prompt embeds the unit text, the protected terms as a hard
//! constraint, and a request to keep output length comparable to input.

use lexicon::ProtectedTermSet;

pub(crate) const DEDUP_SYSTEM: &str = "你是学术写作专家，擅长在保持学术规范的前提下改写文本。";
pub(crate) const DESTYLE_SYSTEM: &str =
    "你是资深学术写作专家，请将AI风格的文本改写为更具人类学者特色的表达。";

fn term_list(protected: &ProtectedTermSet) -> String {
    if protected.is_empty() {
        "无".to_string()
    } else {
        protected.to_vec().join(", ")
    }
}

pub(crate) fn dedup_prompt(text: &str, strength: u8, protected: &ProtectedTermSet) -> String {
    format!(
        "请对以下学术文本进行降重改写。\n\n\
         要求：\n\
         1. 改写强度：{strength}/5，强度越高改写幅度越大\n\
         2. 保持原意与学术规范，逻辑严谨\n\
         3. 以下专业术语必须原样保留：{terms}\n\
         4. 改写后的篇幅与原文相当\n\
         5. 直接输出改写后的文本，不要附加任何解释\n\n\
         原文：\n{text}",
        terms = term_list(protected),
    )
}

pub(crate) fn destyle_prompt(text: &str, protected: &ProtectedTermSet) -> String {
    format!(
        "请改写以下文本，去除AI生成痕迹，使其更接近人类学者的自然表达。\n\n\
         要求：\n\
         1. 减少'首先、其次、最后'等机械的序列词\n\
         2. 删除'值得注意的是'等填充性短语\n\
         3. 变化句子长度，打破均匀的节奏\n\
         4. 以下专业术语必须原样保留：{terms}\n\
         5. 改写后的篇幅与原文相当\n\
         6. 直接输出改写后的文本，不要附加任何解释\n\n\
         原文：\n{text}",
        terms = term_list(protected),
    )
}
