//! Readiness check for load balancers and deploy tooling.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::response::StatusResponse;
use crate::state::AppState;

/// GET /health
///
/// 200 while the integration store answers, 503 otherwise. The disconnect
/// route is useless without the database, so an unreachable store means the
/// instance should be taken out of rotation.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.integrations.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusResponse::success(concat!(
                "orgbot-api ",
                env!("CARGO_PKG_VERSION"),
                " ready"
            ))),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            let status = StatusCode::SERVICE_UNAVAILABLE;
            (status, Json(StatusResponse::error(status, "Database unreachable")))
        }
    }
}
