//! HTTP-level tests for the admin `/admin/leads` resource.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, car_body, create_car, delete_with_cookie, get, get_with_cookie, login_cookie,
    patch_json_with_cookie, post_json_with_cookie,
};
use sqlx::PgPool;

/// Create a lead through the API and return its JSON.
async fn create_lead(pool: &PgPool, cookie: &str, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_with_cookie(app, "/api/v1/admin/leads", cookie, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

async fn list(pool: &PgPool, cookie: &str, query: &str) -> Vec<serde_json::Value> {
    let app = common::build_test_app(pool.clone());
    let response = get_with_cookie(app, &format!("/api/v1/admin/leads{query}"), cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].as_array().unwrap().clone()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lead_routes_require_a_session(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/admin/leads").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_applies_defaults_and_estimates(pool: PgPool) {
    let cookie = login_cookie(&pool).await;
    let car = create_car(&pool, &cookie, car_body("Range Rover Sport", "SUV", 450)).await;

    let lead = create_lead(
        &pool,
        &cookie,
        serde_json::json!({
            "customer_name": "João Silva",
            "customer_phone": "+239 991 2345",
            "pickup_date": "2026-07-01",
            "return_date": "2026-07-04",
            "car_id": car["id"],
        }),
    )
    .await;

    assert_eq!(lead["status"], "pendente");
    assert_eq!(lead["status_label"], "Pendente");
    assert_eq!(lead["contact_channel"], "whatsapp");
    assert_eq!(lead["pickup_date"], "2026-07-01T00:00:00Z");
    assert_eq!(lead["rental_days"], 3);
    assert_eq!(lead["estimated_total"], 1350);
    assert_eq!(lead["car"]["name"], "Range Rover Sport");
    assert_eq!(lead["car"]["price_per_day"], 450);
    assert!(lead["code"].as_str().unwrap().starts_with("res-"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_without_car_has_no_estimate(pool: PgPool) {
    let cookie = login_cookie(&pool).await;

    let lead = create_lead(
        &pool,
        &cookie,
        serde_json::json!({
            "customer_name": "Maria Costa",
            "contact_channel": "email",
            "status": "confirmada",
            "pickup_date": "2026-07-01",
            "return_date": "2026-07-02",
        }),
    )
    .await;

    assert_eq!(lead["status"], "confirmada");
    assert_eq!(lead["status_label"], "Confirmada");
    assert_eq!(lead["contact_channel"], "email");
    assert_eq!(lead["rental_days"], 1);
    assert!(lead["car"].is_null());
    assert!(lead["estimated_total"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_bad_input(pool: PgPool) {
    let cookie = login_cookie(&pool).await;

    let cases = [
        serde_json::json!({ "customer_name": "" }),
        serde_json::json!({ "customer_name": "Ana", "customer_email": "not-an-email" }),
        serde_json::json!({ "customer_name": "Ana", "pickup_date": "next friday" }),
        serde_json::json!({ "customer_name": "Ana", "status": "arquivada" }),
        serde_json::json!({ "customer_name": "Ana", "contact_channel": "pombo" }),
    ];
    for body in cases {
        let app = common::build_test_app(pool.clone());
        let response = post_json_with_cookie(app, "/api/v1/admin/leads", &cookie, body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_unknown_car_returns_400(pool: PgPool) {
    let cookie = login_cookie(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "customer_name": "Ana", "car_id": 987654 });
    let response = post_json_with_cookie(app, "/api/v1/admin/leads", &cookie, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Referenced record does not exist");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_status_and_search(pool: PgPool) {
    let cookie = login_cookie(&pool).await;
    let car = create_car(&pool, &cookie, car_body("Porsche 911 Carrera", "Esportivo", 750)).await;

    create_lead(
        &pool,
        &cookie,
        serde_json::json!({ "customer_name": "João Silva", "customer_email": "joao@example.com" }),
    )
    .await;
    create_lead(
        &pool,
        &cookie,
        serde_json::json!({
            "customer_name": "Maria Costa",
            "status": "confirmada",
            "car_id": car["id"],
        }),
    )
    .await;

    assert_eq!(list(&pool, &cookie, "").await.len(), 2);

    let confirmed = list(&pool, &cookie, "?status=confirmada").await;
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0]["customer_name"], "Maria Costa");

    let by_email = list(&pool, &cookie, "?q=JOAO%40EXAMPLE").await;
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0]["customer_name"], "João Silva");

    let by_car = list(&pool, &cookie, "?q=porsche").await;
    assert_eq!(by_car.len(), 1);
    assert_eq!(by_car[0]["customer_name"], "Maria Costa");

    // Blank filters are ignored.
    assert_eq!(list(&pool, &cookie, "?status=&q=").await.len(), 2);

    // LIKE wildcards are matched literally.
    assert_eq!(list(&pool, &cookie, "?q=%25").await.len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_with_unused_status_label_is_empty(pool: PgPool) {
    let cookie = login_cookie(&pool).await;
    create_lead(&pool, &cookie, serde_json::json!({ "customer_name": "Ana" })).await;

    assert!(list(&pool, &cookie, "?status=arquivada").await.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_newest_first(pool: PgPool) {
    let cookie = login_cookie(&pool).await;
    for name in ["First", "Second", "Third"] {
        create_lead(&pool, &cookie, serde_json::json!({ "customer_name": name })).await;
    }

    let names: Vec<_> = list(&pool, &cookie, "")
        .await
        .iter()
        .map(|l| l["customer_name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Third", "Second", "First"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_moves_status_freely_and_clears_fields(pool: PgPool) {
    let cookie = login_cookie(&pool).await;
    let car = create_car(&pool, &cookie, car_body("Golf", "Compacto", 250)).await;
    let lead = create_lead(
        &pool,
        &cookie,
        serde_json::json!({
            "customer_name": "Ana",
            "status": "concluida",
            "notes": "ligar amanhã",
            "car_id": car["id"],
            "pickup_date": "2026-07-01",
            "return_date": "2026-07-03",
        }),
    )
    .await;
    let uri = format!("/api/v1/admin/leads/{}", lead["id"]);

    let app = common::build_test_app(pool.clone());
    let patch = serde_json::json!({ "status": "pendente", "notes": null, "car_id": null });
    let response = patch_json_with_cookie(app, &uri, &cookie, patch).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["status"], "pendente");
    assert!(updated["notes"].is_null());
    assert!(updated["car"].is_null());
    assert_eq!(updated["rental_days"], 2);
    assert!(updated["estimated_total"].is_null());
    assert_eq!(updated["customer_name"], "Ana");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_accepts_custom_status_label(pool: PgPool) {
    let cookie = login_cookie(&pool).await;
    let car = create_car(&pool, &cookie, car_body("Golf", "Compacto", 250)).await;
    let lead = create_lead(
        &pool,
        &cookie,
        serde_json::json!({
            "customer_name": "Ana",
            "car_id": car["id"],
            "pickup_date": "2026-07-01",
            "return_date": "2026-07-03",
        }),
    )
    .await;
    let uri = format!("/api/v1/admin/leads/{}", lead["id"]);

    let app = common::build_test_app(pool.clone());
    let patch = serde_json::json!({ "status": "aguardando_pagamento" });
    let response = patch_json_with_cookie(app, &uri, &cookie, patch).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["status"], "aguardando_pagamento");
    assert!(updated["status_label"].is_null());
    assert_eq!(updated["estimated_total"], 500);

    let filtered = list(&pool, &cookie, "?status=aguardando_pagamento").await;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["id"], lead["id"]);

    // Labels outside the known set count as neither open nor revenue.
    let app = common::build_test_app(pool);
    let response = get_with_cookie(app, "/api/v1/admin/dashboard", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_json(response).await["data"].clone();
    assert_eq!(stats["open_leads"], 0);
    assert_eq!(stats["pending_leads"], 0);
    assert_eq!(stats["estimated_revenue"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_rejects_empty_or_overlong_status(pool: PgPool) {
    let cookie = login_cookie(&pool).await;
    let lead = create_lead(&pool, &cookie, serde_json::json!({ "customer_name": "Ana" })).await;
    let uri = format!("/api/v1/admin/leads/{}", lead["id"]);

    for status in [String::new(), "   ".to_string(), "x".repeat(41)] {
        let app = common::build_test_app(pool.clone());
        let patch = serde_json::json!({ "status": status });
        let response = patch_json_with_cookie(app, &uri, &cookie, patch).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{status:?}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_rejects_bad_date(pool: PgPool) {
    let cookie = login_cookie(&pool).await;
    let lead = create_lead(&pool, &cookie, serde_json::json!({ "customer_name": "Ana" })).await;

    let app = common::build_test_app(pool);
    let patch = serde_json::json!({ "return_date": "31/02/2026" });
    let uri = format!("/api/v1/admin/leads/{}", lead["id"]);
    let response = patch_json_with_cookie(app, &uri, &cookie, patch).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_and_get_missing_lead_return_404(pool: PgPool) {
    let cookie = login_cookie(&pool).await;

    let app = common::build_test_app(pool.clone());
    let patch = serde_json::json!({ "status": "cancelada" });
    let response = patch_json_with_cookie(app, "/api/v1/admin/leads/31337", &cookie, patch).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get_with_cookie(app, "/api/v1/admin/leads/31337", &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_lead(pool: PgPool) {
    let cookie = login_cookie(&pool).await;
    let lead = create_lead(&pool, &cookie, serde_json::json!({ "customer_name": "Ana" })).await;
    let uri = format!("/api/v1/admin/leads/{}", lead["id"]);

    let app = common::build_test_app(pool.clone());
    let response = delete_with_cookie(app, &uri, &cookie).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = delete_with_cookie(app, &uri, &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert!(list(&pool, &cookie, "").await.is_empty());
}
