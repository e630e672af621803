use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};
use tracing::info;

use crate::api::dtos::requests::BookAppointmentRequest;
use crate::api::extractors::session::CurrentSession;
use crate::domain::services::{booking_flow::BookingFlow, store::today};
use crate::error::AppError;

/// Runs a whole booking flow in one request: pick the service and slot, then confirm for today.
pub async fn create_booking(
    Path((slug, professional_id)): Path<(String, String)>,
    mut session: CurrentSession,
    Json(payload): Json<BookAppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let business_id = session.store
        .resolve_business_by_slug(&slug)
        .map(|b| b.id.clone())
        .ok_or_else(|| AppError::NotFound("Business not found".into()))?;
    let professional = session.store
        .professional_by_id(&professional_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Professional not found".into()))?;

    let mut flow = BookingFlow::new(business_id, professional);
    if let Some(service_id) = payload.service_id.as_deref() {
        flow.select_service(service_id)?;
    }
    if let Some(time) = payload.time.as_deref() {
        flow.select_slot(time)?;
    }

    let confirmation = flow
        .confirm(&mut session.store, &payload.client_name, payload.client_phone.as_deref(), today())
        .await?;

    info!(session_id = %session.id, "booking confirmed for {} at {}", confirmation.professional, confirmation.time);

    Ok((StatusCode::CREATED, Json(confirmation)))
}
