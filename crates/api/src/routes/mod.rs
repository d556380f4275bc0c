pub mod admin;
pub mod auth;
pub mod health;
pub mod public;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      sign in, sets cookie (POST)
/// /auth/logout                                     sign out, clears cookie (POST)
/// /auth/session                                    current admin (GET)
///
/// /public/cars                                     active cars (GET)
/// /public/cars/{id}/inquiry                        inquiry links for a car (GET)
/// /public/catalog                                  filtered catalog (GET)
/// /public/contact                                  contact details (GET)
/// /public/contact-links                            contact-form links (POST)
///
/// /admin/cars                                      list, create (session required)
/// /admin/cars/options                              form choices (GET)
/// /admin/cars/{id}                                 get, update, soft delete
///
/// /admin/leads                                     list, create
/// /admin/leads/{id}                                get, update, delete
///
/// /admin/dashboard                                 stats (GET)
///
/// /admin/settings                                  list (GET)
/// /admin/settings/{key}                            upsert (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/public", public::router())
        .nest("/admin", admin::router())
}

/// Routes mounted at the root for the admin UI's plain HTML form.
///
/// ```text
/// POST /admin/logout   -> sign out, 303 to /admin/login
/// ```
///
/// Any other method on the path gets `405 Method Not Allowed`.
pub fn form_routes() -> Router<AppState> {
    Router::new().route("/admin/logout", post(handlers::auth::logout_form))
}
