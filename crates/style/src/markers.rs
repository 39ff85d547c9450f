//! Marker tables for the five style signals.
//!
//! Counting is literal substring matching, case-sensitive, non-overlapping.
//! The Chinese entries mirror the phraseology that stands out in generated
//! academic prose; a smaller English set covers bilingual manuscripts.

/// Enumerative sequencing markers (首先/其次/… rhythm).
pub const SEQUENCING: &[&str] = &[
    "首先",
    "其次",
    "再次",
    "最后",
    "第一",
    "第二",
    "第三",
    "第四",
    "一方面",
    "另一方面",
    "此外",
    "同时",
    "另外",
    "与此同时",
    "紧接着",
    "随后",
    "进一步",
    "Firstly,",
    "Secondly,",
    "First,",
    "Second,",
    "Finally,",
    "Moreover,",
    "Furthermore,",
];

/// Boilerplate filler openers.
pub const FILLER: &[&str] = &[
    "值得注意的是",
    "需要指出的是",
    "综上所述",
    "总的来说",
    "总而言之",
    "不难发现",
    "显而易见",
    "毋庸置疑",
    "不可否认",
    "众所周知",
    "事实上",
    "实际上",
    "可以说",
    "由此可见",
    "需要强调的是",
    "特别值得一提的是",
    "不言而喻",
    "It is worth noting that",
    "It should be noted that",
    "In conclusion,",
    "Needless to say,",
];

/// Hedging and vagueness.
pub const VAGUE: &[&str] = &[
    "在一定程度上",
    "在某种意义上",
    "从某种角度来看",
    "可能会",
    "或许",
    "大概",
    "似乎",
    "貌似",
    "相对而言",
    "总体上看",
    "一般来说",
    "通常情况下",
    "to some extent",
    "in a sense",
    "arguably",
    "perhaps",
];

/// Over-formal referential connectives.
pub const FORMAL: &[&str] = &[
    "鉴于此",
    "基于此",
    "据此",
    "由此可见",
    "由此可知",
    "由上可知",
    "综合以上分析",
    "基于上述分析",
    "承上所述",
    "如前所述",
    "正如前文所述",
    "In light of the above,",
    "Based on the foregoing,",
    "As previously stated,",
];

/// Heavily leaned-on logical connectors.
pub const CONNECTOR: &[&str] = &[
    "然而",
    "但是",
    "因此",
    "所以",
    "故而",
    "于是",
    "尽管如此",
    "虽然如此",
    "即便如此",
    "However,",
    "Therefore,",
    "Thus,",
    "Hence,",
];
