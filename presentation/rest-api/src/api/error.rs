use poem::http::StatusCode;
use poem_openapi::{Object, error::ParseRequestPayloadError, payload::Json};

/// Error body shared by every route.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error kind, e.g. `NotFound` or `DuplicateCode`
    pub name: String,
    /// Human-readable description
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

impl IntoErrorResponse for ParseRequestPayloadError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: self.reason,
            }),
        )
    }
}

/// Renders body parse and validator failures as a JSON `ValidationError`
/// instead of poem's plain-text default. Used with `EndpointExt::catch_error`.
pub async fn payload_error_response(
    err: ParseRequestPayloadError,
) -> (StatusCode, Json<ErrorResponse>) {
    err.into_error_response()
}
