//! Handlers for admin sign-in, sign-out and session inspection.

use axum::extract::State;
use axum::http::header::{SET_COOKIE, USER_AGENT};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use carhire_db::models::admin_user::AdminUserResponse;
use carhire_db::models::session::CreateSession;
use carhire_db::repositories::{AdminSessionRepo, AdminUserRepo};
use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{verify_against_dummy, verify_password};
use crate::auth::session::{
    clear_session_cookie, extract_session_token, generate_token, hash_token, session_cookie,
};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Where the form-based logout sends the browser.
const LOGIN_PAGE: &str = "/admin/login";

/// Same message for every credential failure. Unknown emails still pay for an
/// Argon2 verification so timing does not reveal which accounts exist.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// POST /api/v1/auth/login
///
/// Verify credentials, open a session and set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let email = input.email.trim().to_lowercase();

    let Some(mut user) = AdminUserRepo::find_by_email(&state.pool, &email).await? else {
        verify_against_dummy(&input.password);
        tracing::info!("Login rejected: unknown email");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !user.is_active {
        tracing::warn!(admin_id = user.id, "Login attempt on deactivated account");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }
    if !password_valid {
        tracing::info!(admin_id = user.id, "Login rejected: wrong password");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = generate_token();
    let session = CreateSession {
        admin_user_id: user.id,
        token_hash: hash_token(&token, &state.config.session.secret),
        expires_at: Utc::now() + state.config.session.ttl(),
        user_agent: headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    AdminSessionRepo::create(&state.pool, &session).await?;
    AdminUserRepo::record_login(&state.pool, user.id).await?;
    user.last_login_at = Some(Utc::now());

    let cookie = session_cookie(&state.config.session, &token)
        .map_err(|e| AppError::InternalError(format!("Session cookie error: {e}")))?;

    tracing::info!(admin_id = user.id, "Admin signed in");

    let mut response_headers = HeaderMap::new();
    response_headers.insert(SET_COOKIE, cookie);
    Ok((
        response_headers,
        Json(DataResponse {
            data: AdminUserResponse::from(user),
        }),
    ))
}

/// POST /api/v1/auth/logout
///
/// End the current session, if any, and clear the cookie. Always 204.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    end_session(&state, &headers).await?;
    Ok((StatusCode::NO_CONTENT, cleared_cookie_headers(&state)))
}

/// GET /api/v1/auth/session
///
/// The admin behind the session cookie, or 401.
pub async fn session(auth: AuthAdmin) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: AdminUserResponse::from(auth.user),
    }))
}

/// POST /admin/logout
///
/// Form-based logout for the admin UI: end the session and redirect to the
/// login page with `303 See Other`.
pub async fn logout_form(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    end_session(&state, &headers).await?;
    Ok((cleared_cookie_headers(&state), Redirect::to(LOGIN_PAGE)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn end_session(state: &AppState, headers: &HeaderMap) -> AppResult<()> {
    if let Some(token) = extract_session_token(headers) {
        let token_hash = hash_token(&token, &state.config.session.secret);
        if AdminSessionRepo::delete_by_hash(&state.pool, &token_hash).await? {
            tracing::info!("Admin signed out");
        }
    }
    Ok(())
}

fn cleared_cookie_headers(state: &AppState) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, clear_session_cookie(&state.config.session));
    headers
}
