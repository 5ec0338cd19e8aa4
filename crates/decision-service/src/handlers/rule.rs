//! 规则查询 API 处理器

use axum::{Json, extract::State};

use crate::{
    dto::{ApiResponse, RuleDto},
    state::AppState,
};

/// 按定义顺序列出规则
///
/// GET /api/v1/rules
pub async fn list_rules(State(state): State<AppState>) -> Json<ApiResponse<Vec<RuleDto>>> {
    let rules = state.engine.store().rules().map(RuleDto::from).collect();
    Json(ApiResponse::success(rules))
}
