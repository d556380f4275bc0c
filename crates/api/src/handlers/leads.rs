//! Handlers for the admin `/admin/leads` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use carhire_core::lead::{CreateLead, UpdateLead};
use carhire_core::types::DbId;
use carhire_db::models::lead::LeadResponse;
use carhire_db::repositories::LeadRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthAdmin;
use crate::query::LeadListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/leads?status=&q=
///
/// Leads newest first, optionally filtered by status and a free-text search.
pub async fn list_leads(
    _auth: AuthAdmin,
    State(state): State<AppState>,
    Query(params): Query<LeadListParams>,
) -> AppResult<impl IntoResponse> {
    let status = params
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let leads = LeadRepo::list(&state.pool, status, params.q.as_deref()).await?;
    let data: Vec<LeadResponse> = leads.into_iter().map(LeadResponse::from).collect();

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/admin/leads
///
/// Register a lead. Channel defaults to `whatsapp`, status to `pendente`.
pub async fn create_lead(
    auth: AuthAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateLead>,
) -> AppResult<impl IntoResponse> {
    let new_lead = input.resolve()?;
    let lead = LeadRepo::create(&state.pool, &new_lead).await?;

    tracing::info!(
        lead_id = lead.id,
        status = %lead.status,
        car_id = ?lead.car_id,
        admin_id = auth.user.id,
        "Lead created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: LeadResponse::from(lead),
        }),
    ))
}

/// GET /api/v1/admin/leads/{id}
pub async fn get_lead(
    _auth: AuthAdmin,
    State(state): State<AppState>,
    Path(lead_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let lead = LeadRepo::find_by_id(&state.pool, lead_id)
        .await?
        .ok_or(AppError::not_found("Lead", lead_id))?;

    Ok(Json(DataResponse {
        data: LeadResponse::from(lead),
    }))
}

/// PATCH /api/v1/admin/leads/{id}
///
/// Partially update a lead. Any status label of 1 to 40 characters may
/// follow any other.
pub async fn update_lead(
    auth: AuthAdmin,
    State(state): State<AppState>,
    Path(lead_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateLead>,
) -> AppResult<impl IntoResponse> {
    let changes = input.resolve()?;
    let lead = LeadRepo::update(&state.pool, lead_id, &changes)
        .await?
        .ok_or(AppError::not_found("Lead", lead_id))?;

    tracing::info!(
        lead_id,
        status = %lead.status,
        admin_id = auth.user.id,
        "Lead updated",
    );

    Ok(Json(DataResponse {
        data: LeadResponse::from(lead),
    }))
}

/// DELETE /api/v1/admin/leads/{id}
///
/// Permanently remove a lead.
pub async fn delete_lead(
    auth: AuthAdmin,
    State(state): State<AppState>,
    Path(lead_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !LeadRepo::delete(&state.pool, lead_id).await? {
        return Err(AppError::not_found("Lead", lead_id));
    }

    tracing::info!(lead_id, admin_id = auth.user.id, "Lead deleted");

    Ok(StatusCode::NO_CONTENT)
}
