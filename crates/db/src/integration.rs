//! Transactional seam for tearing down an organization's WhatsApp integration.
//!
//! [`IntegrationStore::begin`] pins one pooled connection inside a database
//! transaction and hands back an [`IntegrationTx`]. Every statement of the
//! disconnect runs through that handle, and the handle is consumed by exactly
//! one of [`IntegrationTx::commit`] or [`IntegrationTx::rollback`]. Dropping it
//! without either rolls back and returns the connection to the pool.
//!
//! The traits exist so the HTTP layer can be exercised without PostgreSQL;
//! [`PgIntegrationStore`] is the production implementation.

use async_trait::async_trait;
use orgbot_core::types::DbId;
use sqlx::{Postgres, Transaction};

use crate::repositories::{MetaAppDetailsRepo, OrganizationRepo};
use crate::DbPool;

/// Opens transactions against the integration tables.
#[async_trait]
pub trait IntegrationStore: Send + Sync {
    /// Acquire a connection and issue `BEGIN`.
    async fn begin(&self) -> Result<Box<dyn IntegrationTx>, sqlx::Error>;

    /// Confirm the backing database answers queries.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// An open transaction scoped to one request.
#[async_trait]
pub trait IntegrationTx: Send {
    /// Whether an `organizations` row exists for `org_id`.
    async fn organization_exists(&mut self, org_id: DbId) -> Result<bool, sqlx::Error>;

    /// Set `whatsapp_status = false` and null both Meta credentials.
    async fn clear_meta_app_credentials(&mut self, org_id: DbId) -> Result<u64, sqlx::Error>;

    /// Null the organization's WhatsApp number and QR code.
    async fn clear_organization_whatsapp(&mut self, org_id: DbId) -> Result<u64, sqlx::Error>;

    /// Issue `COMMIT`.
    ///
    /// The handle is consumed either way. When the commit fails the
    /// transaction is rolled back as the handle is dropped, so callers have
    /// nothing left to undo.
    async fn commit(self: Box<Self>) -> Result<(), sqlx::Error>;

    /// Issue `ROLLBACK` and release the connection.
    async fn rollback(self: Box<Self>) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed [`IntegrationStore`].
#[derive(Clone)]
pub struct PgIntegrationStore {
    pool: DbPool,
}

impl PgIntegrationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IntegrationStore for PgIntegrationStore {
    async fn begin(&self) -> Result<Box<dyn IntegrationTx>, sqlx::Error> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgIntegrationTx { tx }))
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}

struct PgIntegrationTx {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl IntegrationTx for PgIntegrationTx {
    async fn organization_exists(&mut self, org_id: DbId) -> Result<bool, sqlx::Error> {
        OrganizationRepo::exists(&mut *self.tx, org_id).await
    }

    async fn clear_meta_app_credentials(&mut self, org_id: DbId) -> Result<u64, sqlx::Error> {
        let affected = MetaAppDetailsRepo::clear_credentials(&mut *self.tx, org_id).await?;
        if affected == 0 {
            tracing::debug!(org_id, "No meta_app_details row to clear");
        }
        Ok(affected)
    }

    async fn clear_organization_whatsapp(&mut self, org_id: DbId) -> Result<u64, sqlx::Error> {
        OrganizationRepo::clear_whatsapp(&mut *self.tx, org_id).await
    }

    async fn commit(self: Box<Self>) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }

    async fn rollback(self: Box<Self>) -> Result<(), sqlx::Error> {
        self.tx.rollback().await
    }
}
