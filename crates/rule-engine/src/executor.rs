//! 规则执行器
//!
//! 对单条规则的条件做短路 AND 求值。

use crate::compiler::CompiledRule;
use crate::error::Result;
use crate::evaluator::ConditionEvaluator;
use crate::facts::FactSet;
use tracing::trace;

/// 规则执行器
#[derive(Debug, Clone, Default)]
pub struct RuleExecutor {
    /// 是否记录逐条件的评估追踪
    trace_enabled: bool,
}

impl RuleExecutor {
    pub fn new() -> Self {
        Self {
            trace_enabled: false,
        }
    }

    /// 启用评估追踪
    pub fn with_trace(mut self) -> Self {
        self.trace_enabled = true;
        self
    }

    pub fn trace_enabled(&self) -> bool {
        self.trace_enabled
    }

    /// 评估规则：所有条件都满足才匹配，遇到不满足的条件立即返回
    pub fn evaluate_rule(&self, rule: &CompiledRule, facts: &FactSet) -> Result<bool> {
        for (i, cond) in rule.conditions().iter().enumerate() {
            let matched = ConditionEvaluator::evaluate_condition(cond, facts)?;

            if self.trace_enabled {
                trace!(
                    rule = %rule.name(),
                    index = i,
                    condition = %cond,
                    actual = ?facts.get_field(&cond.field),
                    "{}",
                    if matched { "MATCHED" } else { "NOT_MATCHED" }
                );
            }

            if !matched {
                if self.trace_enabled {
                    trace!(rule = %rule.name(), "AND 短路 - 条件 {} 不匹配", i);
                }
                return Ok(false);
            }
        }

        Ok(true)
    }
}
