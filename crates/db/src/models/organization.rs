use orgbot_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `organizations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Organization {
    pub org_id: DbId,
    pub org_name: String,
    pub org_whatsapp_number: Option<String>,
    pub qr_code: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Organization {
    /// True while either WhatsApp field still holds a value.
    pub fn has_whatsapp_linked(&self) -> bool {
        self.org_whatsapp_number.is_some() || self.qr_code.is_some()
    }
}
