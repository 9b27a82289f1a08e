use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Router};

#[utoipa::path(get, path = "/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/readyz",
    responses(
        (status = 200, description = "Ready"),
        (status = 503, description = "Database writer is not running")
    )
)]
pub async fn readyz(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    if state.writer.is_closed() {
        tracing::warn!("Readiness check failed: database writer is not running");
        (StatusCode::SERVICE_UNAVAILABLE, "writer unavailable")
    } else {
        (StatusCode::OK, "ok")
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
