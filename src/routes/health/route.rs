use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::json;

pub fn create_route() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    ),
    tag = "Health"
)]
pub async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
