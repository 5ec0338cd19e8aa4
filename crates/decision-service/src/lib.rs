//! 奖学金决策服务
//!
//! 规则引擎的 HTTP 外壳：收集并校验申请人字段，调用引擎，返回结论。
//!
//! ## 模块结构
//!
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//! - `state`: 应用状态

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use dto::{ApiResponse, DecisionDto, EvaluateRequest, RuleDto};
pub use error::{Result, ServiceError};
pub use state::AppState;
