mod common;

use agendly_backend::domain::services::store::today;
use axum::http::Method;
use chrono::Duration;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_created_business_resolves_by_derived_slug() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let res = app.post("/api/v1/admin/businesses", Some(&admin), json!({
        "name": "Peluquería Ñandú",
        "owner_email": "owner@nandu.com",
        "plan": "premium"
    })).await;

    assert_eq!(res.status, 201);
    assert_eq!(res.body["slug"], "peluqueria-nandu");
    assert_eq!(res.body["status"], "active");
    assert_eq!(res.body["plan"], "premium");
    assert_eq!(res.body["theme"]["primary"], "#1f2937");

    let res = app.get("/api/v1/admin/businesses", Some(&admin)).await;
    assert_eq!(res.body.as_array().unwrap().len(), 1);

    let res = app.get("/api/v1/businesses/peluqueria-nandu", None).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["business"]["owner_email"], "owner@nandu.com");
}

#[tokio::test]
async fn test_business_validation_and_slug_conflict() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let res = app.post("/api/v1/admin/businesses", Some(&admin), json!({ "owner_email": "x@y.com" })).await;
    assert_eq!(res.status, 400);

    let res = app.post("/api/v1/admin/businesses", Some(&admin), json!({ "name": "¡¡!!", "owner_email": "x@y.com" })).await;
    assert_eq!(res.status, 400);

    let res = app.post("/api/v1/admin/businesses", Some(&admin), json!({ "name": "Spa Relax", "owner_email": "a@spa.com" })).await;
    assert_eq!(res.status, 201);

    let res = app.post("/api/v1/admin/businesses", Some(&admin), json!({ "name": "spa   relax", "owner_email": "b@spa.com" })).await;
    assert_eq!(res.status, 409);

    let res = app.get("/api/v1/admin/slug-preview?name=Spa%20Relax", Some(&admin)).await;
    assert_eq!(res.body["slug"], "spa-relax");
    assert_eq!(res.body["taken"], true);
}

#[tokio::test]
async fn test_toggle_and_set_status() {
    let app = TestApp::new().await;
    let (businesses, _) = app.seed_samples().await;
    let admin = app.login_admin().await;
    let id = &businesses[0].id;
    let toggle = format!("/api/v1/admin/businesses/{}/toggle-status", id);

    let res = app.post(&toggle, Some(&admin), json!({})).await;
    assert_eq!(res.body["status"], "inactive");
    let res = app.post(&toggle, Some(&admin), json!({})).await;
    assert_eq!(res.body["status"], "active");

    let res = app.call(
        Method::PUT,
        &format!("/api/v1/admin/businesses/{}/status", id),
        Some(&admin),
        Some(json!({ "status": "suspended" })),
    ).await;
    assert_eq!(res.body["status"], "suspended");

    // Anything other than active toggles back to active.
    let res = app.post(&toggle, Some(&admin), json!({})).await;
    assert_eq!(res.body["status"], "active");

    let persisted = app.state.gateway.business_by_id(id).await.unwrap();
    assert_eq!(persisted.status.as_str(), "active");

    let res = app.post("/api/v1/admin/businesses/missing/toggle-status", Some(&admin), json!({})).await;
    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn test_stats_count_todays_appointments_only() {
    let app = TestApp::new().await;
    let (businesses, professionals) = app.seed_samples().await;
    app.seed_appointment(&professionals[0], today(), "09:00").await;
    app.seed_appointment(&professionals[0], today() - Duration::days(1), "10:00").await;
    app.seed_appointment(&professionals[1], today(), "11:30").await;

    let admin = app.login_admin().await;
    let res = app.get("/api/v1/admin/stats", Some(&admin)).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["business_count"], 2);
    assert_eq!(res.body["professional_count"], 2);
    assert_eq!(res.body["appointment_count"], 3);
    assert_eq!(res.body["appointments_today"], 2);

    let res = app.get(
        &format!("/api/v1/admin/businesses/{}/appointments", businesses[0].id),
        Some(&admin),
    ).await;
    let listed = res.body.as_array().unwrap();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn test_create_professional() {
    let app = TestApp::new().await;
    let (businesses, _) = app.seed_samples().await;
    let admin = app.login_admin().await;

    let res = app.post("/api/v1/admin/professionals", Some(&admin), json!({
        "business_id": businesses[0].id,
        "name": "Luis Torres",
        "email": "luis@barberia.com",
        "available_slots": ["12:00", "9:00", "12:00"],
        "services": [{ "id": "7", "name": "Afeitado", "duration_min": 20, "price": 12.5 }]
    })).await;
    assert_eq!(res.status, 201);
    assert_eq!(res.body["available_slots"], json!(["12:00", "09:00"]));

    let res = app.post("/api/v1/admin/professionals", Some(&admin), json!({
        "business_id": "unknown",
        "name": "Nadie",
        "email": "nadie@x.com"
    })).await;
    assert_eq!(res.status, 400);

    let res = app.get("/api/v1/businesses/barberia-el-clasico/professionals", None).await;
    assert_eq!(res.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_registered_account_can_sign_in() {
    let app = TestApp::new().await;
    let (_, professionals) = app.seed_samples().await;
    let admin = app.login_admin().await;

    let res = app.post("/api/v1/admin/accounts", Some(&admin), json!({
        "email": "ana@salon.com",
        "display_name": "Ana",
        "password": "s3cret-pass",
        "role": "staff"
    })).await;
    assert_eq!(res.status, 201);
    assert!(res.body.get("password_hash").is_none());

    let res = app.post("/api/v1/auth/login", None, json!({ "email": "ana@salon.com", "password": "s3cret-pass" })).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["actor"]["role"], "staff");
    assert_eq!(res.body["actor"]["id"], professionals[1].id.as_str());

    let res = app.post("/api/v1/auth/login", None, json!({ "email": "ana@salon.com", "password": "wrong" })).await;
    assert_eq!(res.status, 401);
}

#[tokio::test]
async fn test_sessions_see_other_writes_only_after_refresh() {
    let app = TestApp::new().await;
    let first = app.login_admin().await;
    let second = app.login_admin().await;

    let res = app.post("/api/v1/admin/businesses", Some(&second), json!({ "name": "Estudio Uno", "owner_email": "u@uno.com" })).await;
    assert_eq!(res.status, 201);

    let res = app.get("/api/v1/admin/businesses", Some(&first)).await;
    assert!(res.body.as_array().unwrap().is_empty());

    let res = app.post("/api/v1/session/refresh", Some(&first), json!({})).await;
    assert_eq!(res.body["business_count"], 1);

    let res = app.get("/api/v1/admin/businesses", Some(&first)).await;
    assert_eq!(res.body.as_array().unwrap().len(), 1);
}
