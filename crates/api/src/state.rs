use std::sync::Arc;

use orgbot_db::integration::IntegrationStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the JWT secret.
    pub config: Arc<ServerConfig>,
    /// Transaction source for the WhatsApp integration tables.
    pub integrations: Arc<dyn IntegrationStore>,
}
