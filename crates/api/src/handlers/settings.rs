//! Handlers for the admin `/admin/settings` key/value store.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use carhire_core::settings::validate_setting;
use carhire_db::repositories::SettingRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `PUT /admin/settings/{key}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertSettingRequest {
    #[validate(length(max = 500))]
    pub value: String,
}

/// GET /api/v1/admin/settings
pub async fn list_settings(
    _auth: AuthAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let settings = SettingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/admin/settings/{key}
///
/// Store a value for one of the known setting keys.
pub async fn upsert_setting(
    auth: AuthAdmin,
    State(state): State<AppState>,
    Path(key): Path<String>,
    ValidatedJson(input): ValidatedJson<UpsertSettingRequest>,
) -> AppResult<impl IntoResponse> {
    let value = input.value.trim();
    validate_setting(&key, value)?;

    let setting = SettingRepo::upsert(&state.pool, &key, value).await?;

    tracing::info!(key = %key, admin_id = auth.user.id, "Setting updated");

    Ok(Json(DataResponse { data: setting }))
}
