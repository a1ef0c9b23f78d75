//! Handlers for third-party messaging integrations.
//!
//! Currently only WhatsApp Business teardown. The organization is always the
//! one named in the caller's token ([`AuthOrg`]).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use orgbot_core::error::CoreError;
use orgbot_core::types::DbId;
use orgbot_db::integration::{IntegrationStore, IntegrationTx};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthOrg;
use crate::response::StatusResponse;
use crate::state::AppState;

pub const DISCONNECT_SUCCESS_MESSAGE: &str = "WhatsApp integration disconnected successfully";
pub const DISCONNECT_FAILURE_MESSAGE: &str = "Failed to disconnect WhatsApp integration";

/// POST /api/integrations/whatsapp/disconnect
///
/// Turn WhatsApp off for the caller's organization, drop the stored Meta
/// credentials, and clear the linked number and QR code. Repeating the call
/// is harmless.
pub async fn disconnect_whatsapp(
    auth: AuthOrg,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    disconnect_organization(state.integrations.as_ref(), auth.org_id)
        .await
        .map_err(|err| into_disconnect_error(err, auth.org_id))?;

    tracing::info!(org_id = auth.org_id, "WhatsApp integration disconnected");

    Ok((
        StatusCode::OK,
        Json(StatusResponse::success(DISCONNECT_SUCCESS_MESSAGE)),
    ))
}

/// Run the disconnect as one transaction.
///
/// Commits only when every statement succeeded. A failing statement is
/// followed by an explicit rollback before the error is returned; a failing
/// commit is rolled back as the consumed handle drops.
pub async fn disconnect_organization(store: &dyn IntegrationStore, org_id: DbId) -> AppResult<()> {
    let mut tx = store.begin().await?;

    match clear_whatsapp_state(&mut tx, org_id).await {
        Ok(()) => {
            tx.commit().await?;
            Ok(())
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(org_id, error = %rollback_err, "Rollback after failed disconnect failed");
            }
            Err(err)
        }
    }
}

async fn clear_whatsapp_state(tx: &mut Box<dyn IntegrationTx>, org_id: DbId) -> AppResult<()> {
    if !tx.organization_exists(org_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id: org_id,
        }));
    }

    tx.clear_meta_app_credentials(org_id).await?;
    tx.clear_organization_whatsapp(org_id).await?;
    Ok(())
}

/// Domain errors pass through; anything else is logged and replaced by a
/// 500 with a fixed message.
fn into_disconnect_error(err: AppError, org_id: DbId) -> AppError {
    match err {
        AppError::Core(_) => err,
        other => {
            tracing::error!(org_id, error = %other, "Failed to disconnect WhatsApp integration");
            AppError::Core(CoreError::Internal(DISCONNECT_FAILURE_MESSAGE.into()))
        }
    }
}
