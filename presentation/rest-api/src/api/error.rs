use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error envelope returned by every failing endpoint.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Human readable error message
    pub message: String,
    /// HTTP reason phrase matching the response status
    pub status: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_reason_phrase_as_status() {
        let error = ErrorResponse::new(StatusCode::BAD_REQUEST, "invalid id");

        assert_eq!(error.message, "invalid id");
        assert_eq!(error.status, "Bad Request");
    }
}
