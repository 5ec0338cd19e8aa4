//! 规则引擎领域模型

use crate::operators::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 无规则命中时返回的原因
pub const NO_MATCH_REASON: &str = "No rules matched.";

/// 评估结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    AwardFull,
    AwardPartial,
    Review,
    Reject,
    /// 保留给“无规则命中”结果，规则动作不能使用
    NoMatch,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwardFull => "AWARD_FULL",
            Self::AwardPartial => "AWARD_PARTIAL",
            Self::Review => "REVIEW",
            Self::Reject => "REJECT",
            Self::NoMatch => "NO_MATCH",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 条件：字段、操作符与数值字面量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: f64,
}

impl Condition {
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<f64>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}

/// 规则动作
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub decision: Decision,
    pub reason: String,
}

impl Action {
    pub fn new(decision: Decision, reason: impl Into<String>) -> Self {
        Self {
            decision,
            reason: reason.into(),
        }
    }
}

/// 规则定义
///
/// 所有条件按顺序以 AND 组合；空条件列表恒匹配。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub priority: i32,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub action: Action,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        priority: i32,
        conditions: Vec<Condition>,
        action: Action,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            conditions,
            action,
        }
    }
}

/// 命中的规则
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub rule_name: String,
    pub decision: Decision,
    pub reason: String,
    pub priority: i32,
}

impl From<&Rule> for RuleMatch {
    fn from(rule: &Rule) -> Self {
        Self {
            rule_name: rule.name.clone(),
            decision: rule.action.decision,
            reason: rule.action.reason.clone(),
            priority: rule.priority,
        }
    }
}

/// 评估结果
///
/// 序列化为扁平结构 `{rule_name, decision, reason, priority}`，
/// 无命中时省略 `rule_name` 和 `priority`。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "DecisionRecord")]
pub enum EvaluationResult {
    Matched(RuleMatch),
    NoMatch,
}

impl EvaluationResult {
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    pub fn decision(&self) -> Decision {
        match self {
            Self::Matched(m) => m.decision,
            Self::NoMatch => Decision::NoMatch,
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::Matched(m) => &m.reason,
            Self::NoMatch => NO_MATCH_REASON,
        }
    }

    pub fn rule_name(&self) -> Option<&str> {
        match self {
            Self::Matched(m) => Some(&m.rule_name),
            Self::NoMatch => None,
        }
    }

    pub fn priority(&self) -> Option<i32> {
        match self {
            Self::Matched(m) => Some(m.priority),
            Self::NoMatch => None,
        }
    }
}

/// 评估结果的扁平序列化形态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,
    pub decision: Decision,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl From<EvaluationResult> for DecisionRecord {
    fn from(result: EvaluationResult) -> Self {
        match result {
            EvaluationResult::Matched(m) => Self {
                rule_name: Some(m.rule_name),
                decision: m.decision,
                reason: m.reason,
                priority: Some(m.priority),
            },
            EvaluationResult::NoMatch => Self {
                rule_name: None,
                decision: Decision::NoMatch,
                reason: NO_MATCH_REASON.to_string(),
                priority: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rule_deserialization() {
        let json = r#"
        {
            "name": "Need-based review",
            "priority": 70,
            "conditions": [
                {"field": "cgpa", "operator": ">=", "value": 2.5},
                {"field": "family_income", "operator": "<=", "value": 4000}
            ],
            "action": {
                "decision": "REVIEW",
                "reason": "High need but borderline academic score"
            }
        }
        "#;

        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.name, "Need-based review");
        assert_eq!(rule.priority, 70);
        assert_eq!(rule.conditions.len(), 2);
        assert_eq!(rule.conditions[1].operator, Operator::Lte);
        assert_eq!(rule.action.decision, Decision::Review);
    }

    #[test]
    fn test_rule_without_conditions() {
        let json = r#"
        {
            "name": "catch_all",
            "priority": 1,
            "action": {"decision": "REVIEW", "reason": "manual"}
        }
        "#;

        let rule: Rule = serde_json::from_str(json).unwrap();
        assert!(rule.conditions.is_empty());
    }

    #[test]
    fn test_matched_result_serialization() {
        let result = EvaluationResult::Matched(RuleMatch {
            rule_name: "Top merit candidate".to_string(),
            decision: Decision::AwardFull,
            reason: "excellent".to_string(),
            priority: 100,
        });

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "rule_name": "Top merit candidate",
                "decision": "AWARD_FULL",
                "reason": "excellent",
                "priority": 100
            })
        );
    }

    #[test]
    fn test_no_match_serialization() {
        let value = serde_json::to_value(EvaluationResult::NoMatch).unwrap();
        assert_eq!(
            value,
            json!({"decision": "NO_MATCH", "reason": "No rules matched."})
        );
    }

    #[test]
    fn test_no_match_accessors() {
        let result = EvaluationResult::NoMatch;
        assert!(!result.is_matched());
        assert_eq!(result.decision(), Decision::NoMatch);
        assert_eq!(result.reason(), NO_MATCH_REASON);
        assert_eq!(result.rule_name(), None);
        assert_eq!(result.priority(), None);
    }

    #[test]
    fn test_condition_display() {
        let cond = Condition::new("cgpa", Operator::Gte, 3.7);
        assert_eq!(cond.to_string(), "cgpa >= 3.7");

        let cond = Condition::new("family_income", Operator::Lte, 8000);
        assert_eq!(cond.to_string(), "family_income <= 8000");
    }
}
