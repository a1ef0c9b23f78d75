//! Repository for the `meta_app_details` table.

use orgbot_core::types::DbId;
use sqlx::{Executor, PgPool, Postgres};

use crate::models::meta_app_details::MetaAppDetails;

const COLUMNS: &str = "org_id, app_id, phone_number_id, waba_id, whatsapp_status, \
                       access_token, app_secret, created_at, updated_at";

/// Provides queries for per-organization Meta app credentials.
pub struct MetaAppDetailsRepo;

impl MetaAppDetailsRepo {
    /// Fetch the Meta app row for an organization, if one was ever created.
    pub async fn find_by_org_id(
        pool: &PgPool,
        org_id: DbId,
    ) -> Result<Option<MetaAppDetails>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM public.meta_app_details WHERE org_id = $1");
        sqlx::query_as::<_, MetaAppDetails>(&query)
            .bind(org_id)
            .fetch_optional(pool)
            .await
    }

    /// Turn WhatsApp off and drop the stored credentials.
    ///
    /// A missing row is not an error; the returned count is then `0`.
    pub async fn clear_credentials<'e, E>(executor: E, org_id: DbId) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "UPDATE public.meta_app_details
             SET whatsapp_status = false,
                 access_token = NULL,
                 app_secret = NULL,
                 updated_at = NOW()
             WHERE org_id = $1",
        )
        .bind(org_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }
}
