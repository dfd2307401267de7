//! Liveness endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// GET /health
/// Reports that the server is up.
pub async fn get_health() -> Response {
    let body = json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });

    (StatusCode::OK, Json(body)).into_response()
}
