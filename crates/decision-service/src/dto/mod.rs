//! 数据传输对象
//!
//! 请求体校验与响应体结构

pub mod request;
pub mod response;

pub use request::EvaluateRequest;
pub use response::{ApiResponse, DecisionDto, RuleDto};
