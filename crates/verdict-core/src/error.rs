use http::StatusCode;

use crate::{ErrorDetails, Failure};

/// Trait for failures that describe themselves as structured HTTP errors
///
/// Implemented by [`HttpFailure`](crate::HttpFailure) and by any domain
/// error that wants its own status and code on the wire. The classifier
/// reads these fields to build the response, keeping domain errors
/// decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error code (e.g. `NOT_FOUND`)
    fn error_code(&self) -> &str;

    /// Human-readable message
    fn client_message(&self) -> String;

    /// Structured details
    ///
    /// Details may be computed on demand; a failure while producing them is
    /// reported as the inner [`Failure`] instead of a value.
    fn details(&self) -> Result<Option<ErrorDetails>, Failure> {
        Ok(None)
    }

    /// Captured stack trace, if any
    fn stack(&self) -> Option<&str> {
        None
    }
}
