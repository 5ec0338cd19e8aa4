//! 应用状态定义

use rule_engine::ScholarshipEngine;
use std::sync::Arc;

/// Axum 应用共享状态
///
/// 引擎在启动时构建一次，之后只读共享，无需加锁
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScholarshipEngine>,
}

impl AppState {
    pub fn new(engine: ScholarshipEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
