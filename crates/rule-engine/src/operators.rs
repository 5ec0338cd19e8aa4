//! 规则操作符定义

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 条件操作符
///
/// 序列化为符号形式（如 `">="`），反序列化时同时接受单词别名（如 `"gte"`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = ">=", alias = "gte")]
    Gte,
    #[serde(rename = "<=", alias = "lte")]
    Lte,
    #[serde(rename = ">", alias = "gt")]
    Gt,
    #[serde(rename = "<", alias = "lt")]
    Lt,
    #[serde(rename = "==", alias = "eq")]
    Eq,
    #[serde(rename = "!=", alias = "neq")]
    Neq,
}

impl Operator {
    /// 对事实值和规则字面量执行数值比较
    pub fn apply(self, actual: f64, expected: f64) -> bool {
        match self {
            Self::Gte => actual >= expected,
            Self::Lte => actual <= expected,
            Self::Gt => actual > expected,
            Self::Lt => actual < expected,
            Self::Eq => actual == expected,
            Self::Neq => actual != expected,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Eq => "==",
            Self::Neq => "!=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">=" | "gte" => Ok(Self::Gte),
            "<=" | "lte" => Ok(Self::Lte),
            ">" | "gt" => Ok(Self::Gt),
            "<" | "lt" => Ok(Self::Lt),
            "==" | "eq" => Ok(Self::Eq),
            "!=" | "neq" => Ok(Self::Neq),
            other => Err(format!("未知操作符: {}", other)),
        }
    }
}
