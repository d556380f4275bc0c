//! Route definitions for the unauthenticated `/public` endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Routes mounted at `/public`.
///
/// ```text
/// GET  /cars                 -> list_cars
/// GET  /cars/{id}/inquiry    -> car_inquiry
/// GET  /catalog              -> catalog
/// GET  /contact              -> contact
/// POST /contact-links        -> contact_links
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(public::list_cars))
        .route("/cars/{id}/inquiry", get(public::car_inquiry))
        .route("/catalog", get(public::catalog))
        .route("/contact", get(public::contact))
        .route("/contact-links", post(public::contact_links))
}
