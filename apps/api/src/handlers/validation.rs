use axum::Json;
use axum::extract::{Path, State};
use crowdfund_core::AppError;
use crowdfund_domain::{RuleName, Validator};

use crate::dto::{RuleCheckRequest, RuleCheckResponse, ValidationRuleResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_rules_handler() -> Json<Vec<ValidationRuleResponse>> {
    Json(
        Validator::catalog()
            .into_iter()
            .map(ValidationRuleResponse::from)
            .collect(),
    )
}

pub async fn check_rule_handler(
    State(state): State<AppState>,
    Path(rule_name): Path<String>,
    Json(payload): Json<RuleCheckRequest>,
) -> ApiResult<Json<RuleCheckResponse>> {
    let rule = rule_name
        .parse::<RuleName>()
        .map_err(|_| AppError::NotFound(format!("validation rule '{rule_name}' does not exist")))?;

    let outcome = state
        .platform_service
        .validator()
        .validate(rule.as_str(), payload.text.as_str());

    Ok(Json(RuleCheckResponse {
        rule: rule.as_str().to_owned(),
        valid: outcome.is_ok(),
        message: outcome.err().map(|error| error.to_string()),
    }))
}
