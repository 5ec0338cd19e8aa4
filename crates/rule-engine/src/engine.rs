//! 奖学金决策引擎
//!
//! 对存储中的每条规则独立求值，再按优先级从命中集合中选出唯一结论。
//! 优先级相同时取存储顺序中最先出现的规则。

use crate::compiler::CompiledRule;
use crate::error::Result;
use crate::evaluator::ConditionEvaluator;
use crate::executor::RuleExecutor;
use crate::facts::FactSet;
use crate::models::{EvaluationResult, RuleMatch};
use crate::store::RuleStore;
use tracing::{debug, instrument};

/// 奖学金决策引擎
///
/// 纯函数式求值，不保留任何跨请求状态，克隆代价低。
#[derive(Debug, Clone)]
pub struct ScholarshipEngine {
    store: RuleStore,
    executor: RuleExecutor,
}

impl ScholarshipEngine {
    pub fn new(store: RuleStore) -> Self {
        Self {
            store,
            executor: RuleExecutor::new(),
        }
    }

    /// 使用指定执行器（如开启追踪）
    pub fn with_executor(mut self, executor: RuleExecutor) -> Self {
        self.executor = executor;
        self
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// 评估奖学金资格
    ///
    /// 1. 校验被规则引用的事实均为数值（否则立即返回 `TypeMismatch`）
    /// 2. 收集所有命中规则
    /// 3. 无命中返回 `NoMatch`，否则返回优先级最高者（并列取最先者）
    #[instrument(skip_all, fields(facts = facts.len()))]
    pub fn evaluate(&self, facts: &FactSet) -> Result<EvaluationResult> {
        let matched = self.collect_matches(facts)?;

        let result = match Self::resolve(&matched) {
            Some(winner) => {
                debug!(
                    matched = matched.len(),
                    rule = %winner.name(),
                    priority = winner.priority(),
                    "规则命中"
                );
                EvaluationResult::Matched(RuleMatch::from(&winner.rule))
            }
            None => {
                debug!("无规则命中");
                EvaluationResult::NoMatch
            }
        };

        Ok(result)
    }

    /// 返回命中规则的名称，按存储顺序
    pub fn matched_rules(&self, facts: &FactSet) -> Result<Vec<String>> {
        Ok(self
            .collect_matches(facts)?
            .into_iter()
            .map(|r| r.name().to_string())
            .collect())
    }

    fn collect_matches(&self, facts: &FactSet) -> Result<Vec<&CompiledRule>> {
        self.check_fact_types(facts)?;

        let mut matched = Vec::new();
        for rule in self.store.rules() {
            if self.executor.evaluate_rule(rule, facts)? {
                matched.push(rule);
            }
        }
        Ok(matched)
    }

    /// 被引用的字段只要存在就必须是数值，保证错误不依赖短路顺序
    fn check_fact_types(&self, facts: &FactSet) -> Result<()> {
        for field in self.store.required_fields() {
            if let Some(value) = facts.get_field(field) {
                ConditionEvaluator::as_number(field, value)?;
            }
        }
        Ok(())
    }

    /// 取最高优先级，并列时保留先出现者
    fn resolve<'a>(matched: &[&'a CompiledRule]) -> Option<&'a CompiledRule> {
        matched.iter().copied().fold(None, |best, rule| match best {
            Some(b) if b.priority() >= rule.priority() => Some(b),
            _ => Some(rule),
        })
    }
}
