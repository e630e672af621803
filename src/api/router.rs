use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, auth, session, storefront, booking, admin, dashboard};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))

        // Session
        .route("/api/v1/session", delete(session::end_session))
        .route("/api/v1/session/refresh", post(session::refresh))

        // Storefront
        .route("/api/v1/businesses/{slug}", get(storefront::landing))
        .route("/api/v1/businesses/{slug}/professionals", get(storefront::list_professionals))
        .route("/api/v1/businesses/{slug}/professionals/{professional_id}", get(storefront::get_professional))
        .route("/api/v1/businesses/{slug}/professionals/{professional_id}/book", post(booking::create_booking))

        // Admin
        .route("/api/v1/admin/businesses", get(admin::list_businesses).post(admin::create_business))
        .route("/api/v1/admin/slug-preview", get(admin::slug_preview))
        .route("/api/v1/admin/businesses/{business_id}/toggle-status", post(admin::toggle_status))
        .route("/api/v1/admin/businesses/{business_id}/status", put(admin::set_status))
        .route("/api/v1/admin/businesses/{business_id}/appointments", get(admin::business_appointments))
        .route("/api/v1/admin/stats", get(admin::stats))
        .route("/api/v1/admin/professionals", post(admin::create_professional))
        .route("/api/v1/admin/accounts", post(admin::create_account))

        // Staff dashboard
        .route("/api/v1/dashboard", get(dashboard::overview))
        .route("/api/v1/dashboard/slots", put(dashboard::replace_slots).post(dashboard::add_slot))
        .route("/api/v1/dashboard/slots/{time}", delete(dashboard::remove_slot))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        session_id = tracing::field::Empty,
                        role = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}