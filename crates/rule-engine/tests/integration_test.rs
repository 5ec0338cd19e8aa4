//! 规则引擎集成测试
//!
//! 使用内置奖学金规则表测试完整的构建、求值、解析流程。

use proptest::prelude::*;
use rule_engine::{
    ApplicantFacts, Decision, EvaluationResult, FactSet, RuleError, RuleStore, ScholarshipEngine,
};
use serde_json::{Value, json};

fn engine() -> ScholarshipEngine {
    ScholarshipEngine::new(RuleStore::scholarship().unwrap())
}

fn applicant(
    cgpa: f64,
    co_curricular_score: i64,
    family_income: i64,
    disciplinary_actions: i64,
) -> FactSet {
    ApplicantFacts {
        cgpa,
        family_income,
        co_curricular_score,
        disciplinary_actions,
    }
    .into()
}

// ==================== 典型场景 ====================

#[test]
fn test_scenario_top_merit() {
    let result = engine().evaluate(&applicant(3.8, 85, 5000, 0)).unwrap();

    assert!(result.is_matched());
    assert_eq!(result.decision(), Decision::AwardFull);
    assert_eq!(result.rule_name(), Some("Top merit candidate"));
    assert_eq!(result.priority(), Some(100));
    assert_eq!(
        result.reason(),
        "Excellent academic & co-curricular performance, with acceptable need"
    );
}

#[test]
fn test_scenario_partial_scholarship() {
    let result = engine().evaluate(&applicant(3.4, 65, 10000, 1)).unwrap();

    assert_eq!(result.decision(), Decision::AwardPartial);
    assert_eq!(
        result.rule_name(),
        Some("Good candidate - partial scholarship")
    );
    assert_eq!(result.priority(), Some(80));
}

#[test]
fn test_scenario_need_based_review() {
    let result = engine().evaluate(&applicant(2.6, 10, 3000, 0)).unwrap();

    assert_eq!(result.decision(), Decision::Review);
    assert_eq!(result.rule_name(), Some("Need-based review"));
    assert_eq!(result.priority(), Some(70));
}

#[test]
fn test_scenario_no_match() {
    let result = engine().evaluate(&applicant(3.9, 90, 50000, 0)).unwrap();

    assert_eq!(result, EvaluationResult::NoMatch);
    assert_eq!(result.decision(), Decision::NoMatch);
    assert_eq!(result.reason(), "No rules matched.");
}

// ==================== 优先级冲突 ====================

#[test]
fn test_low_cgpa_beats_disciplinary_record() {
    let engine = engine();
    let facts = applicant(2.0, 50, 3000, 3);

    let matched = engine.matched_rules(&facts).unwrap();
    assert_eq!(matched.len(), 2);

    let result = engine.evaluate(&facts).unwrap();
    assert_eq!(result.decision(), Decision::Reject);
    assert_eq!(result.rule_name(), Some("Low CGPA – not eligible"));
    assert_eq!(result.priority(), Some(95));
}

#[test]
fn test_disciplinary_record_beats_award() {
    // 满足全额奖学金以外的条件，但违纪 2 次
    let result = engine().evaluate(&applicant(3.9, 95, 2000, 2)).unwrap();

    assert_eq!(result.decision(), Decision::Reject);
    assert_eq!(result.rule_name(), Some("Serious disciplinary record"));
    assert_eq!(result.priority(), Some(90));
}

#[test]
fn test_full_award_beats_partial_and_review() {
    let engine = engine();
    let facts = applicant(3.8, 85, 3000, 0);

    let matched = engine.matched_rules(&facts).unwrap();
    assert_eq!(
        matched,
        vec![
            "Top merit candidate",
            "Good candidate - partial scholarship",
            "Need-based review"
        ]
    );
    assert_eq!(engine.evaluate(&facts).unwrap().priority(), Some(100));
}

#[test]
fn test_boundary_values() {
    let engine = engine();

    // cgpa == 2.5 不触发低绩点拒绝
    let result = engine.evaluate(&applicant(2.5, 0, 4000, 0)).unwrap();
    assert_eq!(result.decision(), Decision::Review);

    // 收入恰好 8000 仍可获得全额
    let result = engine.evaluate(&applicant(3.7, 80, 8000, 0)).unwrap();
    assert_eq!(result.decision(), Decision::AwardFull);
}

// ==================== 缺失字段与类型错误 ====================

#[test]
fn test_missing_fields_yield_no_match() {
    let result = engine().evaluate(&FactSet::new()).unwrap();
    assert_eq!(result, EvaluationResult::NoMatch);
}

#[test]
fn test_null_field_treated_as_missing() {
    let facts = FactSet::new()
        .with("cgpa", Value::Null)
        .with("disciplinary_actions", 0);

    let result = engine().evaluate(&facts).unwrap();
    assert_eq!(result, EvaluationResult::NoMatch);
}

#[test]
fn test_non_finite_cgpa_treated_as_missing() {
    // NaN 既不触发低绩点拒绝，也不报类型错误
    let facts = applicant(f64::NAN, 90, 3000, 2);

    let result = engine().evaluate(&facts).unwrap();
    assert_eq!(result.rule_name(), Some("Serious disciplinary record"));
    assert_eq!(result.priority(), Some(90));
}

#[test]
fn test_partial_facts_still_match_simple_rules() {
    let facts = FactSet::new().with("disciplinary_actions", 4);

    let result = engine().evaluate(&facts).unwrap();
    assert_eq!(result.rule_name(), Some("Serious disciplinary record"));
}

#[test]
fn test_non_numeric_fact_is_contract_violation() {
    let facts = FactSet::new()
        .with("cgpa", "3.8")
        .with("co_curricular_score", 85)
        .with("family_income", 5000)
        .with("disciplinary_actions", 0);

    let err = engine().evaluate(&facts).unwrap_err();
    match err {
        RuleError::TypeMismatch { field, actual, .. } => {
            assert_eq!(field, "cgpa");
            assert_eq!(actual, "string");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_facts_from_json() {
    let facts = FactSet::from_json(
        r#"{"cgpa": 3.4, "co_curricular_score": 65, "family_income": 10000, "disciplinary_actions": 1}"#,
    )
    .unwrap();

    let result = engine().evaluate(&facts).unwrap();
    assert_eq!(result.decision(), Decision::AwardPartial);
}

#[test]
fn test_result_serialization() {
    let engine = engine();

    let matched = engine.evaluate(&applicant(2.6, 10, 3000, 0)).unwrap();
    assert_eq!(
        serde_json::to_value(&matched).unwrap(),
        json!({
            "rule_name": "Need-based review",
            "decision": "REVIEW",
            "reason": "High need but borderline academic score",
            "priority": 70
        })
    );

    let no_match = engine.evaluate(&applicant(3.9, 90, 50000, 0)).unwrap();
    assert_eq!(
        serde_json::to_value(&no_match).unwrap(),
        json!({"decision": "NO_MATCH", "reason": "No rules matched."})
    );
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = engine();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                engine
                    .evaluate(&applicant(3.8, 85, 5000 + i, 0))
                    .unwrap()
                    .decision()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Decision::AwardFull);
    }
}

// ==================== 性质测试 ====================

const FIELDS: [&str; 4] = [
    "cgpa",
    "co_curricular_score",
    "family_income",
    "disciplinary_actions",
];

prop_compose! {
    fn arb_applicant()(
        cgpa in 0.0f64..=4.0,
        co_curricular_score in 0i64..=100,
        family_income in 0i64..=60000,
        disciplinary_actions in 0i64..=10,
    ) -> FactSet {
        applicant(cgpa, co_curricular_score, family_income, disciplinary_actions)
    }
}

proptest! {
    #[test]
    fn prop_low_cgpa_always_rejected(
        cgpa in 0.0f64..2.5,
        co_curricular_score in 0i64..=100,
        family_income in 0i64..=60000,
        disciplinary_actions in 0i64..=10,
    ) {
        let result = engine()
            .evaluate(&applicant(cgpa, co_curricular_score, family_income, disciplinary_actions))
            .unwrap();

        prop_assert_eq!(result.decision(), Decision::Reject);
        prop_assert_eq!(result.priority(), Some(95));
    }

    #[test]
    fn prop_disciplinary_record_rejected(
        cgpa in 2.5f64..=4.0,
        co_curricular_score in 0i64..=100,
        family_income in 0i64..=60000,
        disciplinary_actions in 2i64..=10,
    ) {
        let result = engine()
            .evaluate(&applicant(cgpa, co_curricular_score, family_income, disciplinary_actions))
            .unwrap();

        prop_assert_eq!(result.decision(), Decision::Reject);
        prop_assert_eq!(result.priority(), Some(90));
        prop_assert_eq!(result.rule_name(), Some("Serious disciplinary record"));
    }

    #[test]
    fn prop_evaluation_is_idempotent(facts in arb_applicant()) {
        let engine = engine();
        let first = engine.evaluate(&facts).unwrap();
        let second = engine.evaluate(&facts).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_removing_field_never_adds_matches(
        facts in arb_applicant(),
        field_index in 0usize..4,
    ) {
        let engine = engine();
        let before = engine.matched_rules(&facts).unwrap();

        let mut reduced = facts.clone();
        reduced.remove(FIELDS[field_index]);
        let after = engine.matched_rules(&reduced).unwrap();

        for name in &after {
            prop_assert!(before.contains(name), "新命中规则: {}", name);
        }
    }
}
