//! 条件评估器
//!
//! 对单个条件做数值比较。字段未知时一律不匹配（包括 `!=`）。

use crate::error::{Result, RuleError};
use crate::facts::FactSet;
use crate::models::Condition;
use crate::operators::Operator;
use serde_json::Value;

/// 条件评估器
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// 在事实集上评估条件
    pub fn evaluate_condition(condition: &Condition, facts: &FactSet) -> Result<bool> {
        Self::evaluate(
            &condition.field,
            facts.get_field(&condition.field),
            condition.operator,
            condition.value,
        )
    }

    /// 评估条件
    ///
    /// # Arguments
    /// * `field` - 字段名，仅用于错误信息
    /// * `field_value` - 从事实集中获取的字段值
    /// * `operator` - 操作符
    /// * `expected` - 规则中定义的字面量
    pub fn evaluate(
        field: &str,
        field_value: Option<&Value>,
        operator: Operator,
        expected: f64,
    ) -> Result<bool> {
        // 未知事实永远不满足条件
        let field_value = match field_value {
            Some(v) if !v.is_null() => v,
            _ => return Ok(false),
        };

        let actual = Self::as_number(field, field_value)?;
        Ok(operator.apply(actual, expected))
    }

    /// 校验事实值为数值，返回其 f64 形式
    pub fn as_number(field: &str, value: &Value) -> Result<f64> {
        value.as_f64().ok_or_else(|| RuleError::TypeMismatch {
            field: field.to_string(),
            expected: "number".to_string(),
            actual: Self::type_name(value).to_string(),
        })
    }

    /// 获取值的类型名称
    fn type_name(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}
