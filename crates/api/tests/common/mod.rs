#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use carhire_api::auth::password::hash_password;
use carhire_api::config::{ServerConfig, SessionConfig};
use carhire_api::router::build_app_router;
use carhire_api::state::AppState;
use carhire_core::settings::SiteContact;
use carhire_db::models::admin_user::{AdminUser, CreateAdminUser};
use carhire_db::repositories::AdminUserRepo;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@test.com";
pub const ADMIN_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults and known contact details.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        session: SessionConfig {
            secret: "test-secret".to_string(),
            ttl_hours: 168,
            cookie_secure: false,
        },
        site: SiteContact {
            site_name: "RC Veículos".to_string(),
            whatsapp_e164: "+239 900 0000".to_string(),
            email: "contato@example.com".to_string(),
            phone_display: "+239 900 0000".to_string(),
            city: "São Tomé".to_string(),
        },
    }
}

/// Build the full application router, with the production middleware stack,
/// over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(cookie), None).await
}

pub async fn post_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(cookie), None).await
}

pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(cookie), Some(body)).await
}

pub async fn put_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(cookie), Some(body)).await
}

pub async fn patch_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(cookie), Some(body)).await
}

pub async fn delete_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(cookie), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `name=value` part of the response's `Set-Cookie` header.
pub fn session_cookie_pair(response: &Response<Body>) -> String {
    let header = response
        .headers()
        .get(SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .unwrap();
    header.split(';').next().unwrap().trim().to_string()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert an admin account with [`ADMIN_PASSWORD`].
pub async fn create_admin(pool: &PgPool, email: &str) -> AdminUser {
    let input = CreateAdminUser {
        name: "Test Admin".to_string(),
        email: email.to_string(),
        password_hash: hash_password(ADMIN_PASSWORD).expect("hashing should succeed"),
        role: "owner".to_string(),
    };
    AdminUserRepo::create(pool, &input)
        .await
        .expect("admin creation should succeed")
}

/// Create the default admin, sign in through the API and return the cookie
/// pair to send on later requests.
pub async fn login_cookie(pool: &PgPool) -> String {
    create_admin(pool, ADMIN_EMAIL).await;
    let app = build_test_app(pool.clone());
    let body = serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie_pair(&response)
}

/// Create a car through the admin API and return its JSON.
pub async fn create_car(pool: &PgPool, cookie: &str, body: serde_json::Value) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = post_json_with_cookie(app, "/api/v1/admin/cars", cookie, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

/// A minimal valid car payload.
pub fn car_body(name: &str, category: &str, price_per_day: i32) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "category": category,
        "passengers": 5,
        "transmission": "Automático",
        "fuel": "Gasolina",
        "price_per_day": price_per_day,
        "year": 2024,
    })
}
