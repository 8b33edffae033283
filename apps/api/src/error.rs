use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use crowdfund_core::AppError;
use tracing::error;

pub use self::types::{ErrorResponse, FieldErrorResponse};

mod types;

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self.0, "request failed");
        }

        let payload = match self.0 {
            AppError::Rejected(field_errors) => ErrorResponse::rejected(field_errors),
            other => ErrorResponse::new(other.to_string()),
        };

        (status, Json(payload)).into_response()
    }
}

fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::Validation(_) | AppError::Rejected(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use crowdfund_core::{AppError, FieldError};

    use super::ApiError;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = ApiError(error).into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_else(|error| panic!("body should be readable: {error}"));
        let json = serde_json::from_slice(&body)
            .unwrap_or_else(|error| panic!("body should be json: {error}"));

        (status, json)
    }

    #[tokio::test]
    async fn rejected_submission_lists_every_field() {
        let (status, json) = body_json(AppError::Rejected(vec![
            FieldError::new("Name", "Name cannot be empty"),
            FieldError::new("Amount", "Amount cannot exceed $50,000"),
        ]))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Please fix the following errors");
        assert_eq!(json["errors"][0]["field"], "Name");
        assert_eq!(json["errors"][1]["message"], "Amount cannot exceed $50,000");
    }

    #[tokio::test]
    async fn not_found_maps_to_404_without_field_errors() {
        let (status, json) = body_json(AppError::NotFound("campaign 'x' does not exist".to_owned()))
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "not found: campaign 'x' does not exist");
        assert_eq!(json["errors"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn validation_and_internal_errors_map_to_their_statuses() {
        let (validation_status, _) =
            body_json(AppError::Validation("unknown campaign type 'x'".to_owned())).await;
        let (internal_status, _) =
            body_json(AppError::Internal("platform session is not initialized".to_owned())).await;

        assert_eq!(validation_status, StatusCode::BAD_REQUEST);
        assert_eq!(internal_status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
