//! Repository for the `organizations` table.

use orgbot_core::types::DbId;
use sqlx::{Executor, PgPool, Postgres};

use crate::models::organization::Organization;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "org_id, org_name, org_whatsapp_number, qr_code, created_at, updated_at";

/// Provides queries for organizations.
pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Find an organization by its id.
    pub async fn find_by_id(
        pool: &PgPool,
        org_id: DbId,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM public.organizations WHERE org_id = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(org_id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether an organization row exists.
    pub async fn exists<'e, E>(executor: E, org_id: DbId) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT org_name FROM public.organizations WHERE org_id = $1 LIMIT 1")
                .bind(org_id)
                .fetch_optional(executor)
                .await?;
        Ok(row.is_some())
    }

    /// Clear the WhatsApp number and QR code. Returns the number of rows touched.
    pub async fn clear_whatsapp<'e, E>(executor: E, org_id: DbId) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "UPDATE public.organizations
             SET org_whatsapp_number = NULL,
                 qr_code = NULL,
                 updated_at = NOW()
             WHERE org_id = $1",
        )
        .bind(org_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }
}
