use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

/// Destination for an error response: a status, then a JSON body
pub trait ResponseSink: Sized {
    type Output;

    #[must_use]
    fn status(self, status: StatusCode) -> Self;

    fn json<T: Serialize + ?Sized>(self, body: &T) -> Self::Output;
}

/// Sink producing an axum [`Response`]
#[derive(Debug, Clone, Copy)]
pub struct AxumResponder {
    status: StatusCode,
}

impl Default for AxumResponder {
    fn default() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseSink for AxumResponder {
    type Output = Response;

    fn status(self, status: StatusCode) -> Self {
        Self { status }
    }

    fn json<T: Serialize + ?Sized>(self, body: &T) -> Response {
        (self.status, Json(body)).into_response()
    }
}
