use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::{Value, json};

pub fn create_route() -> Router {
    Router::new().route("/health", get(health_check))
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "Health"
)]
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
