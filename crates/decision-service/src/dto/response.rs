//! 响应 DTO 定义

use rule_engine::{CompiledRule, Decision, EvaluationResult};
use serde::Serialize;

/// API 统一响应
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }
}

/// 评估结论
///
/// 无规则命中时 `rule_name` 与 `priority` 为 null，展示端自行渲染占位符。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionDto {
    pub rule_name: Option<String>,
    pub decision: Decision,
    pub reason: String,
    pub priority: Option<i32>,
}

impl From<EvaluationResult> for DecisionDto {
    fn from(result: EvaluationResult) -> Self {
        Self {
            rule_name: result.rule_name().map(String::from),
            decision: result.decision(),
            reason: result.reason().to_string(),
            priority: result.priority(),
        }
    }
}

/// 规则只读视图
#[derive(Debug, Clone, Serialize)]
pub struct RuleDto {
    pub name: String,
    pub priority: i32,
    pub decision: Decision,
    pub reason: String,
    /// 条件的可读形式，如 `cgpa >= 3.7`
    pub conditions: Vec<String>,
}

impl From<&CompiledRule> for RuleDto {
    fn from(compiled: &CompiledRule) -> Self {
        let rule = &compiled.rule;
        Self {
            name: rule.name.clone(),
            priority: rule.priority,
            decision: rule.action.decision,
            reason: rule.action.reason.clone(),
            conditions: rule.conditions.iter().map(ToString::to_string).collect(),
        }
    }
}
