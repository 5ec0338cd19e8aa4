//! 请求 DTO 定义

use rule_engine::ApplicantFacts;
use serde::Deserialize;
use validator::Validate;

/// 奖学金评估请求
///
/// 取值范围与申请表单一致，校验通过后才会交给规则引擎。
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EvaluateRequest {
    #[validate(range(min = 0.0, max = 4.0, message = "CGPA 必须在 0.00-4.00 之间"))]
    pub cgpa: f64,
    #[validate(range(min = 0, message = "家庭收入不能为负数"))]
    pub family_income: i64,
    #[validate(range(min = 0, max = 100, message = "课外活动得分必须在 0-100 之间"))]
    pub co_curricular_score: i64,
    #[validate(range(min = 0, max = 10, message = "违纪次数必须在 0-10 之间"))]
    pub disciplinary_actions: i64,
}

impl From<EvaluateRequest> for ApplicantFacts {
    fn from(req: EvaluateRequest) -> Self {
        Self {
            cgpa: req.cgpa,
            family_income: req.family_income,
            co_curricular_score: req.co_curricular_score,
            disciplinary_actions: req.disciplinary_actions,
        }
    }
}
