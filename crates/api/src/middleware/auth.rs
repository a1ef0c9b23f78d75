//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use orgbot_core::error::CoreError;
use orgbot_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

pub const NO_TOKEN_MESSAGE: &str = "No token provided";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// Organization resolved from the `Authorization: Bearer <token>` header.
///
/// Rejections never touch the database.
///
/// ```ignore
/// async fn my_handler(auth: AuthOrg) -> AppResult<Json<()>> {
///     tracing::info!(org_id = auth.org_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthOrg {
    pub org_id: DbId,
}

impl FromRequestParts<AppState> for AuthOrg {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized(NO_TOKEN_MESSAGE.into())))?;

        let claims = validate_token(token, &state.config.jwt).map_err(|err| {
            tracing::debug!(error = %err, "Rejected bearer token");
            AppError::Core(CoreError::Unauthorized(INVALID_TOKEN_MESSAGE.into()))
        })?;

        Ok(AuthOrg {
            org_id: claims.org_id,
        })
    }
}

/// The second space-delimited segment of an `Authorization` value.
///
/// The scheme word is not checked; `"Bearer abc"` and `"Token abc"` both
/// yield `abc`.
fn bearer_token(header: &str) -> Option<&str> {
    header.split(' ').nth(1).filter(|token| !token.is_empty())
}
