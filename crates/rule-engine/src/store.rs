//! 规则存储
//!
//! 启动时构建一次的只读有序规则集合。内部使用 `Arc<[CompiledRule]>`，
//! 克隆后可在多个线程间共享而无需加锁。

use crate::compiler::{CompiledRule, RuleCompiler};
use crate::error::Result;
use crate::models::Rule;
use crate::scholarship::scholarship_rules;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, instrument};

/// 规则存储
#[derive(Debug, Clone)]
pub struct RuleStore {
    /// 按定义顺序排列的编译后规则
    rules: Arc<[CompiledRule]>,
    /// 任一规则引用的字段
    required_fields: Arc<BTreeSet<String>>,
}

impl RuleStore {
    /// 编译规则列表并构建存储，保持输入顺序
    #[instrument(skip(rules), fields(rules_count = rules.len()))]
    pub fn from_rules(rules: Vec<Rule>) -> Result<Self> {
        let mut compiler = RuleCompiler::new();
        let compiled = rules
            .into_iter()
            .map(|rule| compiler.compile(rule))
            .collect::<Result<Vec<_>>>()?;

        let required_fields = compiled
            .iter()
            .flat_map(|r| r.required_fields.iter().cloned())
            .collect();

        let store = Self {
            rules: compiled.into(),
            required_fields: Arc::new(required_fields),
        };

        info!("规则存储已构建: {} 条规则", store.len());
        Ok(store)
    }

    /// 内置奖学金规则表
    pub fn scholarship() -> Result<Self> {
        Self::from_rules(scholarship_rules())
    }

    /// 获取当前存储的规则数量
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// 检查存储是否为空
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 按定义顺序遍历规则
    pub fn rules(&self) -> impl ExactSizeIterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    /// 按名称获取规则，同名时返回第一条
    pub fn get(&self, name: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    /// 任一规则引用的字段集合
    pub fn required_fields(&self) -> &BTreeSet<String> {
        &self.required_fields
    }

    /// 获取规则统计信息
    pub fn stats(&self) -> RuleStoreStats {
        let rules_count = self.rules.len();
        let total_fields: usize = self.rules.iter().map(|r| r.required_fields.len()).sum();

        RuleStoreStats {
            rules_count,
            total_fields,
            avg_fields_per_rule: if rules_count > 0 {
                total_fields as f64 / rules_count as f64
            } else {
                0.0
            },
        }
    }
}

/// 规则存储统计信息
#[derive(Debug, Clone)]
pub struct RuleStoreStats {
    /// 规则总数
    pub rules_count: usize,
    /// 所有规则使用的字段总数
    pub total_fields: usize,
    /// 平均每条规则使用的字段数
    pub avg_fields_per_rule: f64,
}
