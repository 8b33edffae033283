use crowdfund_core::FieldError;
use serde::Serialize;
use ts_rs::TS;

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    message: String,
    errors: Vec<FieldErrorResponse>,
}

/// One rejected form field.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/field-error-response.ts"
)]
pub struct FieldErrorResponse {
    field: String,
    message: String,
}

impl ErrorResponse {
    pub(super) fn new(message: String) -> Self {
        Self {
            message,
            errors: Vec::new(),
        }
    }

    pub(super) fn rejected(field_errors: Vec<FieldError>) -> Self {
        Self {
            message: "Please fix the following errors".to_owned(),
            errors: field_errors
                .into_iter()
                .map(|error| FieldErrorResponse {
                    field: error.field,
                    message: error.message,
                })
                .collect(),
        }
    }
}
