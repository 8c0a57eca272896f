use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::DuplicateCode(_) => (StatusCode::BAD_REQUEST, "DuplicateCode"),
            ProductError::ImmutableFieldViolation(_) => {
                (StatusCode::BAD_REQUEST, "ImmutableFieldViolation")
            }
            ProductError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::EmptyCollection => (StatusCode::NOT_FOUND, "EmptyCollection"),
            err if err.is_validation() => (StatusCode::BAD_REQUEST, "ValidationError"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        // Storage details stay in the logs
        let message = match &self {
            ProductError::Repository(_) => "repository.persistence".to_string(),
            other => other.to_string(),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}
