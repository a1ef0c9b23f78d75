use orgbot_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `meta_app_details` table (one per organization).
///
/// The Meta credentials are never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MetaAppDetails {
    pub org_id: DbId,
    pub app_id: Option<String>,
    pub phone_number_id: Option<String>,
    pub waba_id: Option<String>,
    pub whatsapp_status: bool,
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    #[serde(skip_serializing)]
    pub app_secret: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MetaAppDetails {
    /// True when the row is in the disconnected state: status off and no
    /// credentials retained.
    pub fn is_disconnected(&self) -> bool {
        !self.whatsapp_status && self.access_token.is_none() && self.app_secret.is_none()
    }
}
