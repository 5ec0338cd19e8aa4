//! 奖学金评估 API 处理器

use std::time::Instant;

use axum::{Json, extract::State};
use rule_engine::{ApplicantFacts, FactSet};
use scholarship_shared::observability::metrics;
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    dto::{ApiResponse, DecisionDto, EvaluateRequest},
    error::Result,
    state::AppState,
};

/// 评估申请人的奖学金资格
///
/// POST /api/v1/evaluations
///
/// 校验表单取值范围后转换为事实集交给规则引擎，返回唯一结论。
#[instrument(skip(state, req))]
pub async fn evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<ApiResponse<DecisionDto>>> {
    req.validate()?;

    let facts = FactSet::from(ApplicantFacts::from(req));

    let start = Instant::now();
    let outcome = state.engine.evaluate(&facts);
    let elapsed = start.elapsed().as_secs_f64();

    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            metrics::record_scholarship_evaluation("ERROR", elapsed);
            return Err(e.into());
        }
    };

    metrics::record_scholarship_evaluation(result.decision().as_str(), elapsed);
    info!(
        decision = %result.decision(),
        rule = result.rule_name().unwrap_or("-"),
        "奖学金评估完成"
    );

    Ok(Json(ApiResponse::success(DecisionDto::from(result))))
}
