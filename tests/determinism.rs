use std::sync::Arc;

use redraft::{DedupEngine, DestyleEngine, EngineConfig, StaticGenerator};

fn seeded(seed: u64) -> EngineConfig {
    EngineConfig::default().with_seed(seed)
}

// Expansion-trigger verbs, no structural-pattern openers, so the only
// difference between strengths is how many expansion sites fire.
const CORPUS: [&str; 3] = [
    "本文研究了数字经济的发展趋势，分析了其对生产效率的作用，并检验了相关结果的可靠程度。",
    "我们考察了不同地区之间的差异，验证了主要结论，并探讨了可能的作用渠道。",
    "本文分析了企业行为的变化，研究了政策冲击的后果，检验了若干备择解释。",
];

#[test]
fn seeded_dedup_runs_are_reproducible() {
    let engine_a = DedupEngine::new(seeded(99)).unwrap();
    let engine_b = DedupEngine::new(seeded(99)).unwrap();

    for text in CORPUS {
        let a = engine_a.process(text, 3, &[]).unwrap();
        let b = engine_b.process(text, 3, &[]).unwrap();
        assert_eq!(a.rewritten, b.rewritten);
        assert_eq!(a.after_score, b.after_score);
        assert_eq!(a.changes, b.changes);
    }
}

#[test]
fn seeded_destyle_runs_are_reproducible() {
    let engine_a = DestyleEngine::new(seeded(99)).unwrap();
    let engine_b = DestyleEngine::new(seeded(99)).unwrap();

    for text in CORPUS {
        let a = engine_a.process(text);
        let b = engine_b.process(text);
        assert_eq!(a.rewritten, b.rewritten);
        assert_eq!(a.after_score, b.after_score);
    }
}

#[test]
fn different_seeds_may_diverge_but_both_preserve_terms() {
    let text = "本文研究了面板数据方法的应用，分析了固定效应设定下的估计结果。";
    let a = DedupEngine::new(seeded(1)).unwrap().process(text, 4, &[]).unwrap();
    let b = DedupEngine::new(seeded(2)).unwrap().process(text, 4, &[]).unwrap();

    for result in [&a, &b] {
        assert!(result.rewritten.contains("面板数据"));
        assert!(result.rewritten.contains("固定效应"));
    }
}

#[test]
fn higher_strength_never_raises_similarity() {
    // With one seed the rng draw stream is identical across strengths, so
    // the set of expansion sites firing at a low strength is a subset of
    // those firing at a high one. Expansions only insert text, which can
    // only lower the similarity blend.
    for text in CORPUS {
        let mut scores = Vec::new();
        for strength in 1..=5 {
            let engine = DedupEngine::new(seeded(7)).unwrap();
            let result = engine.process(text, strength, &[]).unwrap();
            scores.push(result.after_score);
        }
        for pair in scores.windows(2) {
            assert!(
                pair[1] <= pair[0] + 1e-9,
                "strength increase raised similarity: {scores:?}"
            );
        }
    }
}

#[test]
fn generator_tiers_score_below_the_rule_tier() {
    // The stub reply shares no vocabulary with the corpus, so replacing a
    // paragraph wholesale must depart further from the original than rule
    // substitutions do.
    let reply = "Entirely unrelated replacement text with no shared vocabulary at all.";
    for text in CORPUS {
        let rule_only = DedupEngine::new(seeded(7)).unwrap();
        let hybrid = DedupEngine::new(seeded(7))
            .unwrap()
            .with_generator(Arc::new(StaticGenerator::new(reply)));

        let low = rule_only.process(text, 1, &[]).unwrap();
        let high = hybrid.process(text, 3, &[]).unwrap();
        assert!(high.after_score <= low.after_score + 1e-9);
    }
}
