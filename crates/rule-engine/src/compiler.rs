//! 规则编译器
//!
//! 校验规则定义，并预提取每条规则引用的字段。

use crate::error::{Result, RuleError};
use crate::models::{Condition, Decision, Rule};
use std::collections::HashSet;

/// 编译后的规则
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// 原始规则
    pub rule: Rule,
    /// 规则中使用的所有字段
    pub required_fields: HashSet<String>,
    /// 规则在存储中的位置，优先级相同时决定胜者
    pub ordinal: usize,
}

impl CompiledRule {
    pub fn name(&self) -> &str {
        &self.rule.name
    }

    pub fn priority(&self) -> i32 {
        self.rule.priority
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.rule.conditions
    }
}

/// 规则编译器
pub struct RuleCompiler {
    next_ordinal: usize,
}

impl RuleCompiler {
    pub fn new() -> Self {
        Self { next_ordinal: 0 }
    }

    /// 从 JSON 字符串编译规则
    pub fn compile_from_json(&mut self, json: &str) -> Result<CompiledRule> {
        let rule: Rule = serde_json::from_str(json)?;
        self.compile(rule)
    }

    /// 编译规则，序号按编译顺序递增
    pub fn compile(&mut self, rule: Rule) -> Result<CompiledRule> {
        self.validate_rule(&rule)?;

        let required_fields = rule
            .conditions
            .iter()
            .map(|c| c.field.clone())
            .collect();

        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;

        Ok(CompiledRule {
            rule,
            required_fields,
            ordinal,
        })
    }

    /// 验证规则结构
    fn validate_rule(&self, rule: &Rule) -> Result<()> {
        if rule.name.trim().is_empty() {
            return Err(RuleError::CompileError("规则名称不能为空".to_string()));
        }

        if rule.action.decision == Decision::NoMatch {
            return Err(RuleError::CompileError(format!(
                "规则 '{}' 的动作不能使用保留结论 NO_MATCH",
                rule.name
            )));
        }

        if rule.action.reason.trim().is_empty() {
            return Err(RuleError::CompileError(format!(
                "规则 '{}' 的原因不能为空",
                rule.name
            )));
        }

        for (i, cond) in rule.conditions.iter().enumerate() {
            let path = format!("{}.conditions[{}]", rule.name, i);
            self.validate_condition(cond, &path)?;
        }

        Ok(())
    }

    /// 验证条件
    fn validate_condition(&self, cond: &Condition, path: &str) -> Result<()> {
        if cond.field.is_empty() {
            return Err(RuleError::CompileError(format!(
                "条件 '{}' 的字段不能为空",
                path
            )));
        }

        if !cond.value.is_finite() {
            return Err(RuleError::CompileError(format!(
                "条件 '{}' 的比较值必须是有限数值",
                path
            )));
        }

        Ok(())
    }
}

impl Default for RuleCompiler {
    fn default() -> Self {
        Self::new()
    }
}
