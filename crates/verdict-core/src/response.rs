use http::StatusCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::ErrorDetails;

/// Codes produced by the classifier outside the named kinds
pub mod codes {
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
}

/// JSON body sent for a classified failure
///
/// `details` and `stack` are omitted from the payload when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub code: String,
    pub message: String,
    /// Moment of classification, serialized as RFC 3339
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            status: status.as_u16(),
            code: code.into(),
            message: message.into(),
            timestamp,
            details: None,
            stack: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: Option<ErrorDetails>) -> Self {
        self.details = details;
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: Option<String>) -> Self {
        self.stack = stack;
        self
    }

    /// Status as an HTTP status code
    ///
    /// Out-of-range values map to 500.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Last-resort body sent when classification itself fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DefaultError {
    pub status: u16,
    pub code: &'static str,
    pub message: &'static str,
}

impl DefaultError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

pub const DEFAULT_ERROR: DefaultError = DefaultError {
    status: 500,
    code: codes::INTERNAL_ERROR,
    message: "Internal Server Error",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn at_epoch() -> Timestamp {
        Timestamp::UNIX_EPOCH
    }

    #[test]
    fn absent_fields_are_omitted() {
        let response = ErrorResponse::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Not Found", at_epoch());

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": 404,
                "code": "NOT_FOUND",
                "message": "Not Found",
                "timestamp": "1970-01-01T00:00:00Z",
            })
        );
    }

    #[test]
    fn present_fields_are_serialized() {
        let response = ErrorResponse::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", "bad", at_epoch())
            .with_details(Some(ErrorDetails::new().with("field", "name")))
            .with_stack(Some("at main".to_owned()));

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["details"], serde_json::json!({ "field": "name" }));
        assert_eq!(value["stack"], "at main");
    }

    #[test]
    fn default_error_matches_reason_phrase() {
        assert_eq!(
            Some(DEFAULT_ERROR.message),
            StatusCode::INTERNAL_SERVER_ERROR.canonical_reason()
        );
        assert_eq!(DEFAULT_ERROR.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let value = serde_json::to_value(DEFAULT_ERROR).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": 500,
                "code": "INTERNAL_ERROR",
                "message": "Internal Server Error",
            })
        );
    }
}
