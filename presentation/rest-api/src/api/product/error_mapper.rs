use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        // Repository causes stay in the logs, never in the response body.
        let (status, message) = match &self {
            ProductError::InvalidId => (StatusCode::BAD_REQUEST, "invalid id"),
            ProductError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal error"),
        };

        (status, Json(ErrorResponse::new(status, message)))
    }
}
