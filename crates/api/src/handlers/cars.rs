//! Handlers for the admin `/admin/cars` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use carhire_core::car::{
    AvailabilityStatus, CreateCar, UpdateCar, KNOWN_CATEGORIES, KNOWN_FUELS, KNOWN_TRANSMISSIONS,
};
use carhire_core::types::DbId;
use carhire_db::repositories::CarRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// A value/label pair for a select input.
#[derive(Debug, Serialize)]
pub struct LabelledOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Choices offered by the admin car form.
#[derive(Debug, Serialize)]
pub struct CarFormOptions {
    pub categories: &'static [&'static str],
    pub transmissions: &'static [&'static str],
    pub fuels: &'static [&'static str],
    pub availability_statuses: Vec<LabelledOption>,
}

/// GET /api/v1/admin/cars
///
/// Every car, active ones first.
pub async fn list_cars(
    _auth: AuthAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let cars = CarRepo::list_admin(&state.pool).await?;
    Ok(Json(DataResponse { data: cars }))
}

/// GET /api/v1/admin/cars/options
pub async fn car_options(_auth: AuthAdmin) -> AppResult<impl IntoResponse> {
    let availability_statuses = [
        AvailabilityStatus::Available,
        AvailabilityStatus::Unavailable,
        AvailabilityStatus::Maintenance,
    ]
    .into_iter()
    .map(|s| LabelledOption {
        value: s.as_str(),
        label: s.label(),
    })
    .collect();

    Ok(Json(DataResponse {
        data: CarFormOptions {
            categories: KNOWN_CATEGORIES,
            transmissions: KNOWN_TRANSMISSIONS,
            fuels: KNOWN_FUELS,
            availability_statuses,
        },
    }))
}

/// POST /api/v1/admin/cars
pub async fn create_car(
    auth: AuthAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCar>,
) -> AppResult<impl IntoResponse> {
    let car = CarRepo::create(&state.pool, &input).await?;

    tracing::info!(
        car_id = car.id,
        name = %car.name,
        admin_id = auth.user.id,
        "Car created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: car })))
}

/// GET /api/v1/admin/cars/{id}
pub async fn get_car(
    _auth: AuthAdmin,
    State(state): State<AppState>,
    Path(car_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let car = CarRepo::find_by_id(&state.pool, car_id)
        .await?
        .ok_or(AppError::not_found("Car", car_id))?;

    Ok(Json(DataResponse { data: car }))
}

/// PATCH /api/v1/admin/cars/{id}
///
/// Partially update a car.
pub async fn update_car(
    auth: AuthAdmin,
    State(state): State<AppState>,
    Path(car_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCar>,
) -> AppResult<impl IntoResponse> {
    let car = CarRepo::update(&state.pool, car_id, &input)
        .await?
        .ok_or(AppError::not_found("Car", car_id))?;

    tracing::info!(car_id, admin_id = auth.user.id, "Car updated");

    Ok(Json(DataResponse { data: car }))
}

/// DELETE /api/v1/admin/cars/{id}
///
/// Soft delete: the car is deactivated and returned. Leads keep their link.
pub async fn delete_car(
    auth: AuthAdmin,
    State(state): State<AppState>,
    Path(car_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let car = CarRepo::deactivate(&state.pool, car_id)
        .await?
        .ok_or(AppError::not_found("Car", car_id))?;

    tracing::info!(car_id, admin_id = auth.user.id, "Car deactivated");

    Ok(Json(DataResponse { data: car }))
}
