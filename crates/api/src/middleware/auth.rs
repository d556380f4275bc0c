//! Cookie-session authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use carhire_db::models::admin_user::AdminUser;
use carhire_db::repositories::AdminSessionRepo;

use crate::auth::session::{extract_session_token, hash_token};
use crate::error::AppError;
use crate::state::AppState;

/// Admin authenticated by the `carhire_session` cookie.
///
/// Rejects with 401 when the cookie is missing, the token is unknown or
/// expired, or the account has been deactivated.
///
/// ```ignore
/// async fn my_handler(auth: AuthAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = auth.user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub user: AdminUser,
    /// Keyed hash of the presented token, used to end this session.
    pub token_hash: String,
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_session_token(&parts.headers)
            .ok_or_else(|| AppError::unauthorized("Not signed in"))?;

        let token_hash = hash_token(&token, &state.config.session.secret);

        let user = AdminSessionRepo::find_active(&state.pool, &token_hash)
            .await?
            .ok_or_else(|| AppError::unauthorized("Session expired or invalid"))?;

        Ok(AuthAdmin { user, token_hash })
    }
}
