mod common;

use agendly_backend::domain::services::store::today;
use axum::http::Method;
use chrono::Duration;
use std::sync::Arc;

use common::{TestApp, Unreachable, STAFF_SECRET};
use serde_json::json;

#[tokio::test]
async fn test_overview_lists_own_appointments() {
    let app = TestApp::new().await;
    let (_, professionals) = app.seed_samples().await;
    app.seed_appointment(&professionals[0], today(), "09:00").await;
    app.seed_appointment(&professionals[0], today() + Duration::days(2), "10:00").await;
    app.seed_appointment(&professionals[1], today(), "10:00").await;

    let staff = app.login("carlos@barberia.com", STAFF_SECRET).await;
    let res = app.get("/api/v1/dashboard", Some(&staff)).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["professional"]["id"], professionals[0].id.as_str());
    assert_eq!(res.body["appointments"].as_array().unwrap().len(), 2);
    assert_eq!(res.body["appointments_today"].as_array().unwrap().len(), 1);
    assert_eq!(res.body["appointments_today"][0]["time"], "09:00");
}

#[tokio::test]
async fn test_staff_without_profile() {
    let app = TestApp::new().await;
    app.seed_samples().await;

    let staff = app.login("someone@else.com", STAFF_SECRET).await;
    let res = app.get("/api/v1/dashboard", Some(&staff)).await;
    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn test_slot_editing_persists() {
    let app = TestApp::new().await;
    let (_, professionals) = app.seed_samples().await;
    let carlos = &professionals[0];
    let staff = app.login("carlos@barberia.com", STAFF_SECRET).await;

    let res = app.post("/api/v1/dashboard/slots", Some(&staff), json!({ "time": "8:30" })).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["slots"][0], "08:30");
    assert_eq!(res.body["slots"].as_array().unwrap().len(), 7);

    let res = app.call(Method::DELETE, "/api/v1/dashboard/slots/09:00", Some(&staff), None).await;
    assert_eq!(res.status, 200);
    assert!(!res.body["slots"].as_array().unwrap().contains(&json!("09:00")));

    let res = app.call(Method::DELETE, "/api/v1/dashboard/slots/07:00", Some(&staff), None).await;
    assert_eq!(res.status, 404);

    let res = app.call(
        Method::PUT,
        "/api/v1/dashboard/slots",
        Some(&staff),
        Some(json!({ "slots": ["18:00", "9:15", "18:00"] })),
    ).await;
    assert_eq!(res.body["slots"], json!(["09:15", "18:00"]));

    let res = app.call(
        Method::PUT,
        "/api/v1/dashboard/slots",
        Some(&staff),
        Some(json!({ "slots": ["noon"] })),
    ).await;
    assert_eq!(res.status, 400);

    let persisted = app.state.gateway.professional_by_id(&carlos.id).await.unwrap();
    assert_eq!(persisted.available_slots, vec!["09:15".to_string(), "18:00".to_string()]);

    // The storefront of a later visitor offers the edited slots.
    let res = app.post(
        &format!("/api/v1/businesses/barberia-el-clasico/professionals/{}/book", carlos.id),
        None,
        json!({ "service_id": "1", "time": "09:00", "client_name": "Juan" }),
    ).await;
    assert_eq!(res.status, 400);
}

#[tokio::test]
async fn test_staff_is_bound_by_email_not_by_login_name() {
    // Sample catalogue ids are "1" and "2", so the local part collides with Carlos' id.
    let app = TestApp::build(|mut repos| {
        repos.businesses = Arc::new(Unreachable);
        repos.professionals = Arc::new(Unreachable);
        repos.appointments = Arc::new(Unreachable);
        repos
    }).await;

    let res = app.post("/api/v1/auth/login", None, json!({ "email": "1@intruder.example", "password": STAFF_SECRET })).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["actor"]["id"], "1");
    assert!(res.body["actor"]["professional_id"].is_null());
    let intruder = res.session.unwrap();

    let res = app.get("/api/v1/dashboard", Some(&intruder)).await;
    assert_eq!(res.status, 404);

    let res = app.post("/api/v1/dashboard/slots", Some(&intruder), json!({ "time": "07:00" })).await;
    assert_eq!(res.status, 404);

    let carlos = app.login("carlos@barberia.com", STAFF_SECRET).await;
    let res = app.get("/api/v1/dashboard", Some(&carlos)).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["professional"]["name"], "Carlos Mendoza");
    assert!(!res.body["professional"]["available_slots"].as_array().unwrap().contains(&json!("07:00")));
}
