//! 奖学金规则引擎
//!
//! 根据申请人事实评估带优先级的资格规则，输出唯一的奖学金结论：
//! - 规则定义与编译校验
//! - 只读有序规则存储
//! - 短路 AND 条件求值
//! - 按优先级（并列取先者）解析命中集合

pub mod compiler;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod executor;
pub mod facts;
pub mod models;
pub mod operators;
pub mod scholarship;
pub mod store;

pub use compiler::{CompiledRule, RuleCompiler};
pub use engine::ScholarshipEngine;
pub use error::{Result, RuleError};
pub use evaluator::ConditionEvaluator;
pub use executor::RuleExecutor;
pub use facts::{ApplicantFacts, FactSet};
pub use models::{
    Action, Condition, Decision, DecisionRecord, EvaluationResult, NO_MATCH_REASON, Rule,
    RuleMatch,
};
pub use operators::Operator;
pub use scholarship::scholarship_rules;
pub use store::{RuleStore, RuleStoreStats};
