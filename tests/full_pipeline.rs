use std::sync::Arc;

use redraft::{DedupEngine, DestyleEngine, EngineConfig, EngineError, RewriteKind, StaticGenerator};

const MANUSCRIPT: &str = "摘要\n\n值得注意的是，本研究采用面板数据模型分析数字经济对生产效率的影响，样本覆盖了全国三十个省份的十年数据。\n\n首先，我们考察了基准回归结果。其次，我们检验了结果的稳健性，发现主要结论在不同设定下保持显著。这一发现与既有文献的判断是一致的。";

#[test]
fn full_dedup_pipeline_executes_with_defaults() -> Result<(), EngineError> {
    let engine = DedupEngine::new(EngineConfig::default().with_seed(2024))?;
    let result = engine.process(MANUSCRIPT, 2, &["数字经济".to_string()])?;

    assert_eq!(result.original, MANUSCRIPT);
    assert_ne!(result.rewritten, MANUSCRIPT);
    assert_eq!(result.kind, RewriteKind::Dedup);

    // The heading is too short to rewrite; the body paragraphs are not.
    let pieces: Vec<&str> = result.rewritten.split("\n\n").collect();
    assert_eq!(pieces.len(), 3);
    assert_eq!(pieces[0], "摘要");

    // Requested and built-in terms both survive.
    assert!(result.rewritten.contains("数字经济"));
    assert!(result.rewritten.contains("面板数据"));
    assert!(result.preserved_terms.contains(&"数字经济".to_string()));
    assert!(result.preserved_terms.contains(&"面板数据".to_string()));

    assert_eq!(result.before_score, 1.0);
    assert!(result.after_score < 1.0);
    assert!(!result.changes.is_empty());
    assert!(result.sentence_count > 0);

    let report = result.to_markdown();
    assert!(report.contains("# 📊 降重处理报告"));
    assert!(report.contains("## 保留的专业术语"));
    assert!(report.contains("## 主要变化"));
    Ok(())
}

#[test]
fn full_dedup_pipeline_with_generator_replaces_paragraphs() -> Result<(), EngineError> {
    let reply = "这一段已经替换为生成的改写，其中保留面板数据与数字经济两个术语，以及显著与稳健性的表述。";
    let generator = Arc::new(StaticGenerator::new(reply));
    let engine = DedupEngine::new(EngineConfig::default().with_seed(2024))?
        .with_generator(generator.clone());

    let result = engine.process(MANUSCRIPT, 3, &["数字经济".to_string()])?;

    // One call per body paragraph; the heading stays untouched.
    assert_eq!(generator.calls(), 2);
    let pieces: Vec<&str> = result.rewritten.split("\n\n").collect();
    assert_eq!(pieces[0], "摘要");
    assert_eq!(pieces[1], reply);
    assert_eq!(pieces[2], reply);
    Ok(())
}

#[test]
fn rewrite_results_survive_json_transport() -> Result<(), EngineError> {
    let engine = DedupEngine::new(EngineConfig::default().with_seed(2024))?;
    let result = engine.process(MANUSCRIPT, 2, &[])?;

    // Downstream consumers match on the lowercase kind tag.
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["kind"], serde_json::json!("dedup"));
    assert!(value["before_score"].is_number());

    let back: redraft::RewriteResult = serde_json::from_value(value).unwrap();
    assert_eq!(back, result);
    Ok(())
}

#[test]
fn full_destyle_pipeline_executes_with_defaults() -> Result<(), EngineError> {
    let engine = DestyleEngine::new(EngineConfig::default().with_seed(2024))?;
    let result = engine.process(MANUSCRIPT);

    assert_eq!(result.kind, RewriteKind::Destyle);
    assert_ne!(result.rewritten, MANUSCRIPT);
    assert!(!result.rewritten.contains("值得注意的是"));
    assert!(result.rewritten.contains("面板数据"));

    let report = result.to_markdown();
    assert!(report.contains("# 🤖 降AI处理报告"));
    assert!(report.contains("## 主要变化"));
    Ok(())
}
