mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use verdict_config::Config;
use verdict_handler::{ErrorHandler, HandlerOptions, error_middleware};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    pub fn new(config: &Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let environment = config.environment();
        let handler = ErrorHandler::new(environment).with_options(HandlerOptions::from_config(&config.errors));
        tracing::debug!(%environment, include_stack = ?config.errors.include_stack, "error handler configured");

        let app = routes::router()
            // Error classification (innermost, sees handler failures first)
            .layer(axum::middleware::from_fn(error_middleware(Arc::new(handler))))
            .layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;
    use verdict_config::Environment;

    use super::*;

    fn config(environment: Environment) -> Config {
        Config {
            environment: Some(environment),
            ..Config::default()
        }
    }

    async fn get(server: Server, path: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        let response = server.into_router().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[test]
    fn listen_address_defaults_to_port_3000() {
        let server = Server::new(&Config::default());
        assert_eq!(server.listen_address(), SocketAddr::from(([0, 0, 0, 0], 3000)));
    }

    #[tokio::test]
    async fn health_is_plain_text() {
        let (status, body) = get(Server::new(&config(Environment::Production)), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn non_numeric_user_id_is_a_validation_error() {
        let (status, body) = get(Server::new(&config(Environment::Production)), "/users/abc").await;
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["id"], "abc");
        assert_eq!(body["details"]["expected"], "number");
    }

    #[tokio::test]
    async fn user_id_must_be_all_digits() {
        let (status, body) = get(Server::new(&config(Environment::Production)), "/users/+5").await;
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["id"], "+5");

        let (status, body) = get(
            Server::new(&config(Environment::Production)),
            "/users/99999999999999999999999",
        )
        .await;
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["details"]["id"], "99999999999999999999999");
    }

    #[tokio::test]
    async fn forbidden_uses_reason_phrase() {
        let (status, body) = get(Server::new(&config(Environment::Production)), "/admin").await;
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Forbidden");
    }
}
