//! 评估事实集
//!
//! 每次评估由调用方提供，引擎不会保留。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 成绩绩点字段
pub const CGPA: &str = "cgpa";
/// 家庭收入字段
pub const FAMILY_INCOME: &str = "family_income";
/// 课外活动得分字段
pub const CO_CURRICULAR_SCORE: &str = "co_curricular_score";
/// 违纪次数字段
pub const DISCIPLINARY_ACTIONS: &str = "disciplinary_actions";

/// 事实集 - 字段名到数值的映射
///
/// 字段缺失或显式为 `null` 都视为“未知”。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactSet {
    data: Map<String, Value>,
}

impl FactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 对象创建，非对象输入返回错误
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let data: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self { data })
    }

    /// 链式设置字段
    ///
    /// 非有限浮点数（NaN、无穷大）无法表示为 JSON 数值，会被存为 `null`，
    /// 即按“未知”处理，相关条件一律不成立。
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.data.remove(field)
    }

    /// 获取字段值，`null` 与缺失同等对待
    pub fn get_field(&self, field: &str) -> Option<&Value> {
        self.data.get(field).filter(|v| !v.is_null())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Map<String, Value>> for FactSet {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

/// 申请人事实的强类型形式
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplicantFacts {
    pub cgpa: f64,
    pub family_income: i64,
    pub co_curricular_score: i64,
    pub disciplinary_actions: i64,
}

/// `cgpa` 为非有限值时同 [`FactSet::with`]，视为未知字段
impl From<ApplicantFacts> for FactSet {
    fn from(facts: ApplicantFacts) -> Self {
        FactSet::new()
            .with(CGPA, facts.cgpa)
            .with(FAMILY_INCOME, facts.family_income)
            .with(CO_CURRICULAR_SCORE, facts.co_curricular_score)
            .with(DISCIPLINARY_ACTIONS, facts.disciplinary_actions)
    }
}
