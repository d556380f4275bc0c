//! Route definitions for the session-protected `/admin` endpoints.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{cars, dashboard, leads, settings};
use crate::state::AppState;

/// Routes mounted at `/admin`. Every handler requires an admin session.
///
/// ```text
/// GET, POST           /cars
/// GET                 /cars/options
/// GET, PATCH, DELETE  /cars/{id}
/// GET, POST           /leads
/// GET, PATCH, DELETE  /leads/{id}
/// GET                 /dashboard
/// GET                 /settings
/// PUT                 /settings/{key}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(cars::list_cars).post(cars::create_car))
        .route("/cars/options", get(cars::car_options))
        .route(
            "/cars/{id}",
            get(cars::get_car)
                .patch(cars::update_car)
                .delete(cars::delete_car),
        )
        .route("/leads", get(leads::list_leads).post(leads::create_lead))
        .route(
            "/leads/{id}",
            get(leads::get_lead)
                .patch(leads::update_lead)
                .delete(leads::delete_lead),
        )
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/settings", get(settings::list_settings))
        .route("/settings/{key}", put(settings::upsert_setting))
}
