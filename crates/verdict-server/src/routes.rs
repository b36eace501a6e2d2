//! Sample routes that raise each kind of failure

use axum::Router;
use axum::extract::Path;
use axum::routing::get;
use verdict_core::{ErrorDetails, Failure, HttpFailure};

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users/{id}", get(get_user))
        .route("/admin", get(admin))
        .route("/crash", get(crash))
        .route("/unavailable", get(unavailable))
}

/// Liveness probe, plain text so it never goes through classification
async fn health() -> &'static str {
    "ok"
}

async fn get_user(Path(id): Path<String>) -> Result<&'static str, HttpFailure> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HttpFailure::validation("Invalid user ID")
            .with_details(ErrorDetails::new().with("id", id).with("expected", "number")));
    }

    // No user store behind the demo
    Err(HttpFailure::not_found("User not found").with_details(ErrorDetails::new().with("id", id)))
}

async fn admin() -> Result<&'static str, HttpFailure> {
    Err(HttpFailure::forbidden(""))
}

async fn crash() -> Result<&'static str, Failure> {
    Err(anyhow::anyhow!("database connection lost").into())
}

async fn unavailable() -> Result<&'static str, Failure> {
    Err(Failure::thrown("service is restarting"))
}
