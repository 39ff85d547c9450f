//! Built-in rule tables.
//!
//! Bilingual (Chinese/English) data tuned for economics and finance
//! manuscripts. Everything here is plain data; behavior lives in the
//! transform and engine crates.

// ==================== Protected terminology ====================
//
// Terms that must survive rewriting verbatim. Grouped by field; the groups
// carry no meaning at runtime.

pub(crate) const PROTECTED_TERMS: &[&str] = &[
    // Econometric methods
    "双重差分",
    "DID",
    "difference-in-differences",
    "差分",
    "倾向得分匹配",
    "PSM",
    "propensity score matching",
    "工具变量",
    "IV",
    "instrumental variable",
    "2SLS",
    "两阶段最小二乘",
    "断点回归",
    "RDD",
    "regression discontinuity",
    "断点设计",
    "固定效应",
    "fixed effects",
    "FE",
    "个体固定效应",
    "时间固定效应",
    "随机效应",
    "random effects",
    "RE",
    "面板数据",
    "panel data",
    "平衡面板",
    "非平衡面板",
    "广义矩估计",
    "GMM",
    "系统GMM",
    "差分GMM",
    "中介效应",
    "mediating effect",
    "中介变量",
    "调节效应",
    "moderating effect",
    "调节变量",
    "异质性分析",
    "分样本回归",
    "合成控制法",
    "SCM",
    "synthetic control",
    "事件研究法",
    "event study",
    // Statistics
    "显著性",
    "significance",
    "显著",
    "稳健性",
    "robustness",
    "稳健性检验",
    "内生性",
    "endogeneity",
    "内生性问题",
    "异方差",
    "heteroskedasticity",
    "异方差检验",
    "自相关",
    "autocorrelation",
    "序列相关",
    "多重共线性",
    "multicollinearity",
    "VIF",
    "t统计量",
    "t值",
    "t-statistic",
    "F统计量",
    "F值",
    "F-test",
    "R方",
    "R²",
    "R-squared",
    "调整R方",
    "标准误",
    "standard error",
    "聚类标准误",
    "置信区间",
    "confidence interval",
    "p值",
    "p-value",
    "显著性水平",
    "Bootstrap",
    "自助法",
    // Economics
    "边际效应",
    "marginal effect",
    "弹性",
    "elasticity",
    "价格弹性",
    "外部性",
    "externality",
    "正外部性",
    "负外部性",
    "信息不对称",
    "information asymmetry",
    "委托代理",
    "principal-agent",
    "代理问题",
    "道德风险",
    "moral hazard",
    "逆向选择",
    "adverse selection",
    "交易成本",
    "transaction cost",
    "规模经济",
    "economies of scale",
    "范围经济",
    "economies of scope",
    // Finance
    "资产定价",
    "asset pricing",
    "CAPM",
    "市场有效性",
    "market efficiency",
    "信息效率",
    "information efficiency",
    "融资约束",
    "financing constraints",
    "代理成本",
    "agency cost",
];

// ==================== Filler phrases ====================
//
// Boilerplate openers deleted outright, plus over-formal connectives mapped
// to milder ones. Each occurrence is replaced at most once.

pub(crate) const FILLERS: &[(&str, &str)] = &[
    ("值得注意的是，", ""),
    ("需要指出的是，", ""),
    ("综上所述，", ""),
    ("总的来说，", ""),
    ("不难发现，", ""),
    ("显而易见，", ""),
    ("毋庸置疑，", ""),
    ("众所周知，", ""),
    ("事实上，", ""),
    ("不可否认，", ""),
    ("需要强调的是，", ""),
    ("特别值得一提的是，", ""),
    ("鉴于此，", "基于这一考虑，"),
    ("基于此，", "由此，"),
    ("综合以上分析，", "从上述分析来看，"),
    ("由此可见，", "这表明，"),
    ("由此可知，", "可以看出，"),
    ("It is worth noting that ", "Notably, "),
    ("It should be pointed out that ", "Of note, "),
    ("It is widely acknowledged that ", "Arguably, "),
    ("Needless to say, ", ""),
    ("In summary, ", "Taken together, "),
    ("To sum up, ", "Taken together, "),
    ("In light of this, ", "Given this, "),
    ("Based on the above analysis, ", "From this analysis, "),
    ("It can be seen that ", "This suggests that "),
];

// ==================== Synonyms ====================
//
// Common academic verbs and qualifiers with interchangeable alternatives.
// Roughly half of the occurrences of each word get swapped for one drawn
// option.

pub(crate) const SYNONYMS: &[(&str, &[&str])] = &[
    ("表明", &["显示", "说明"]),
    ("采用", &["运用", "使用"]),
    ("分析", &["考察", "剖析"]),
    ("研究", &["探究", "考察"]),
    ("提高", &["提升", "增进"]),
    ("促进", &["推动", "推进"]),
    ("重要", &["关键", "重大"]),
    ("影响", &["作用"]),
    ("方法", &["方式", "途径"]),
    ("结论", &["发现"]),
    ("important", &["crucial", "notable"]),
    ("shows", &["indicates", "reveals"]),
    ("method", &["approach"]),
    ("examine", &["investigate", "assess"]),
    ("improve", &["enhance", "strengthen"]),
];

// ==================== Verb expansions ====================
//
// Concise reporting verbs stretched into longer periphrases to vary
// sentence weight. First occurrence only, gated by rewrite intensity.

pub(crate) const VERB_EXPANSIONS: &[(&str, &str)] = &[
    ("研究了", "系统研究了"),
    ("分析了", "深入分析了"),
    ("探讨了", "细致探讨了"),
    ("验证了", "进一步验证了"),
    ("考察了", "全面考察了"),
    ("检验了", "逐一检验了"),
    ("finds", "ultimately finds"),
    ("tests", "formally tests"),
    ("confirms", "further confirms"),
];

// ==================== Structural patterns ====================
//
// (regex, capture-template replacement, firing probability). Applied in
// order, first match only, each rule gated independently.

pub(crate) const PATTERNS: &[(&str, &str, f64)] = &[
    ("如果(.{1,20})，(?:那么)?(.{1,30})", "若$1，则$2", 0.5),
    ("通过(.{2,16})，(我们|本文)(.{1,30})", "$2借助$1$3", 0.4),
    ("不仅(.{2,20})，而且(.{2,20})", "除了$1之外，还$2", 0.5),
    ("In order to ([a-z][a-z ]{2,40}),", "To $1,", 0.6),
    (
        "There (?:is|are) (?:a |an )?growing (body of literature|consensus)",
        "A growing $1 exists",
        0.5,
    ),
];

// ==================== Sequencing softeners ====================
//
// Enumerative markers replaced on first occurrence, once per marker, to
// break the rigid first/second/third cadence. Deleting the opening marker
// is intentional.

pub(crate) const SOFTENERS: &[(&str, &str)] = &[
    ("首先，", ""),
    ("其次，", "在此基础上，"),
    ("再次，", "同样值得关注的是，"),
    ("最后，", "更重要的是，"),
    ("一方面，", "从一个角度来看，"),
    ("另一方面，", "从另一个维度来看，"),
    ("First, ", "To start with, "),
    ("Firstly, ", "To start with, "),
    ("Second, ", "Building on this, "),
    ("Secondly, ", "Building on this, "),
    ("Third, ", "Just as important, "),
    ("Finally, ", "More importantly, "),
    ("On the one hand, ", "From one angle, "),
    ("On the other hand, ", "From another angle, "),
];
