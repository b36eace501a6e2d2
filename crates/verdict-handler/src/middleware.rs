use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use futures::future::BoxFuture;
use verdict_core::Failure;

use crate::{AxumResponder, ErrorHandler};

impl ErrorHandler {
    /// Replace a response that carries a caught [`Failure`] with its
    /// classified error response
    ///
    /// Responses without a failure pass through untouched.
    pub async fn intercept(&self, mut response: Response) -> Response {
        match response.extensions_mut().remove::<Failure>() {
            Some(failure) => self.handle(&failure, AxumResponder::default()).await,
            None => response,
        }
    }
}

/// Error middleware for `axum::middleware::from_fn`
///
/// Handlers return `Result<_, Failure>` (or `HttpFailure`); the failure is
/// classified after the inner service runs. The request itself is not
/// inspected.
///
/// ```ignore
/// let app = Router::new()
///     .route("/users/{id}", get(get_user))
///     .layer(axum::middleware::from_fn(error_middleware(handler)));
/// ```
pub fn error_middleware(
    handler: Arc<ErrorHandler>,
) -> impl Fn(Request, Next) -> BoxFuture<'static, Response> + Clone + Send + Sync + 'static {
    move |request: Request, next: Next| -> BoxFuture<'static, Response> {
        let handler = Arc::clone(&handler);
        Box::pin(async move {
            let response = next.run(request).await;
            handler.intercept(response).await
        })
    }
}
