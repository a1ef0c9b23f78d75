//! HTTP surface of the service.
//!
//! [`build_app_router`] is shared by `main.rs` and the integration tests so
//! both exercise the same routes and layers.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::handlers::{health, integrations};
use crate::state::AppState;

pub const HEALTH_PATH: &str = "/health";
pub const WHATSAPP_DISCONNECT_PATH: &str = "/api/integrations/whatsapp/disconnect";

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the application [`Router`].
///
/// ```text
/// GET  /health                               -> health
/// POST /api/integrations/whatsapp/disconnect -> disconnect_whatsapp (Bearer JWT)
/// ```
///
/// Every request gets an `x-request-id` (generated unless the caller sent
/// one), is traced under that id, and is cut off with 408 after
/// `request_timeout_secs`.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route(HEALTH_PATH, get(health::health))
        .route(
            WHATSAPP_DISCONNECT_PATH,
            post(integrations::disconnect_whatsapp),
        )
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(trace)
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors_layer(&config.cors_origins))
}

/// CORS for the dashboard origins.
///
/// Only the two routes' methods and the bearer header are allowed. Panics on
/// an unparsable origin so a bad `CORS_ORIGINS` stops startup.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<_> = origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
