use crowdfund_domain::RuleCatalogEntry;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Reference entry for one validation rule.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validation-rule-response.ts"
)]
pub struct ValidationRuleResponse {
    pub name: String,
    pub title: String,
    pub pattern: String,
    pub purpose: String,
}

impl From<RuleCatalogEntry> for ValidationRuleResponse {
    fn from(value: RuleCatalogEntry) -> Self {
        Self {
            name: value.rule.as_str().to_owned(),
            title: value.title,
            pattern: value.pattern.to_owned(),
            purpose: value.purpose.to_owned(),
        }
    }
}

/// Text to test against one rule.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/rule-check-request.ts"
)]
pub struct RuleCheckRequest {
    pub text: String,
}

/// Outcome of a rule check; `message` is set when the text is rejected.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/rule-check-response.ts"
)]
pub struct RuleCheckResponse {
    pub rule: String,
    pub valid: bool,
    pub message: Option<String>,
}
