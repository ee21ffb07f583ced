//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// GET /status — reports that the process is up. Never touches storage.
pub async fn check() -> Json<StatusResponse> {
    Json(StatusResponse { status: "UP" })
}
