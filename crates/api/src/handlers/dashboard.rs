//! Handler for the admin dashboard summary.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use carhire_core::dashboard::{summarize_leads, LeadFigures, LeadTotals};
use carhire_db::models::lead::LeadResponse;
use carhire_db::repositories::{CarRepo, LeadRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of leads shown in the "recent" panel.
const RECENT_LEADS: i64 = 5;

/// Figures for the dashboard stat cards and the recent-leads panel.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    /// Active cars.
    pub cars_total: usize,
    /// Active cars that can be rented right now.
    pub cars_available: usize,
    #[serde(flatten)]
    pub leads: LeadTotals,
    pub recent_leads: Vec<LeadResponse>,
}

/// GET /api/v1/admin/dashboard
pub async fn get_dashboard(
    _auth: AuthAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let cars = CarRepo::list_public(&state.pool).await?;
    let cars_available = cars.iter().filter(|c| c.is_listable()).count();

    let leads = LeadRepo::list(&state.pool, None, None).await?;
    let figures: Vec<LeadFigures> = leads.iter().map(|l| l.figures()).collect();
    let totals = summarize_leads(&figures);

    let recent = LeadRepo::recent(&state.pool, RECENT_LEADS).await?;

    Ok(Json(DataResponse {
        data: DashboardStats {
            cars_total: cars.len(),
            cars_available,
            leads: totals,
            recent_leads: recent.into_iter().map(LeadResponse::from).collect(),
        },
    }))
}
