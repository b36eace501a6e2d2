use axum::Json;
use axum::response::{IntoResponse, Response};

use crate::{DEFAULT_ERROR, Failure, HttpFailure};

/// Render the default 500 body and carry the failure in the response
/// extensions
///
/// The error middleware removes the failure again and replaces this
/// response with the classified one. Without the middleware the client
/// still receives a well-formed default error.
impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let mut response = (DEFAULT_ERROR.status_code(), Json(DEFAULT_ERROR)).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl IntoResponse for HttpFailure {
    fn into_response(self) -> Response {
        Failure::from(self).into_response()
    }
}
