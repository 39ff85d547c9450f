use std::sync::Arc;

use redraft::{
    dedup, DedupEngine, DestyleEngine, EngineConfig, EngineError, FailingGenerator,
    GenerateError, GenerationConfig, Lexicon, OpenAiGenerator, PatternRule, TransformError,
};

fn seeded() -> EngineConfig {
    EngineConfig::default().with_seed(3)
}

#[test]
fn out_of_range_strength_is_a_contract_error() {
    let engine = DedupEngine::new(seeded()).unwrap();
    for strength in [0u8, 6, 255] {
        let result = engine.process("文本。", strength, &[]);
        assert!(matches!(result, Err(EngineError::InvalidStrength(s)) if s == strength));
    }
}

#[test]
fn facade_helper_propagates_contract_errors() {
    let result = dedup("文本。", 0, &[]);
    assert!(matches!(result, Err(EngineError::InvalidStrength(0))));
}

#[test]
fn empty_input_is_a_degenerate_success_not_an_error() {
    let engine = DedupEngine::new(seeded()).unwrap();
    let result = engine.process("   ", 3, &[]).unwrap();
    assert_eq!(result.rewritten, "   ");
    assert_eq!(result.changes, ["输入为空，未作处理"]);

    let destyle_engine = DestyleEngine::new(seeded()).unwrap();
    let result = destyle_engine.process("");
    assert_eq!(result.rewritten, "");
    assert_eq!(result.changes, ["输入为空，未作处理"]);
}

#[test]
fn broken_lexicon_pattern_fails_engine_construction() {
    let lexicon = Lexicon::empty().with_patterns(vec![PatternRule {
        pattern: "([unclosed".to_string(),
        replacement: "$1".to_string(),
        probability: 1.0,
    }]);

    let result = DedupEngine::with_lexicon(&lexicon, seeded());
    assert!(matches!(
        result,
        Err(EngineError::Transform(TransformError::InvalidPattern { .. }))
    ));
}

#[test]
fn generator_failures_never_fail_a_run() {
    let text = "首先，本研究采用面板数据模型。其次，我们发现显著的正相关关系。";
    for strength in [3u8, 5] {
        let engine = DedupEngine::new(seeded())
            .unwrap()
            .with_generator(Arc::new(FailingGenerator));
        let result = engine.process(text, strength, &[]).unwrap();
        assert_ne!(result.rewritten, text);
        assert!(result.rewritten.contains("面板数据"));
        assert!(result.rewritten.contains("显著"));
    }
}

#[test]
fn destyle_generator_failures_fall_back_to_rules() {
    let engine = DestyleEngine::new(seeded())
        .unwrap()
        .with_generator(Arc::new(FailingGenerator));
    let result = engine.process("值得注意的是，本文提出了新的研究框架。");
    assert!(!result.rewritten.contains("值得注意的是"));
}

#[test]
fn blank_generator_credentials_are_rejected() {
    let no_key = OpenAiGenerator::new(GenerationConfig::default().with_api_key("  "));
    assert!(matches!(no_key, Err(GenerateError::InvalidConfig(_))));

    let no_url = OpenAiGenerator::new(
        GenerationConfig::default()
            .with_api_key("sk-test")
            .with_api_url(""),
    );
    assert!(matches!(no_url, Err(GenerateError::InvalidConfig(_))));
}
