use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{
    requests::{CreateAccountRequest, SetStatusRequest, SlugPreviewQuery},
    responses::SlugPreviewResponse,
};
use crate::api::extractors::session::AdminSession;
use crate::domain::models::{
    appointment::Appointment,
    business::BusinessDraft,
    professional::NewProfessional,
};
use crate::domain::services::slug::slugify;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_businesses(session: AdminSession) -> impl IntoResponse {
    Json(session.store.businesses().to_vec())
}

pub async fn create_business(
    mut session: AdminSession,
    Json(payload): Json<BusinessDraft>,
) -> Result<impl IntoResponse, AppError> {
    let business = session.store.create_business(payload).await?;

    info!(business_id = %business.id, "business created with slug {}", business.slug);

    Ok((StatusCode::CREATED, Json(business)))
}

/// What the slug would be for a name, without reserving it.
pub async fn slug_preview(
    session: AdminSession,
    Query(query): Query<SlugPreviewQuery>,
) -> impl IntoResponse {
    let slug = slugify(&query.name);
    let taken = session.store.resolve_business_by_slug(&slug).is_some();
    Json(SlugPreviewResponse { slug, taken })
}

pub async fn toggle_status(
    Path(business_id): Path<String>,
    mut session: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let business = session.store.toggle_business_status(&business_id).await?;

    info!(business_id = %business.id, "status toggled to {}", business.status.as_str());

    Ok(Json(business))
}

pub async fn set_status(
    Path(business_id): Path<String>,
    mut session: AdminSession,
    Json(payload): Json<SetStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let business = session.store.set_business_status(&business_id, payload.status).await?;
    Ok(Json(business))
}

pub async fn business_appointments(
    Path(business_id): Path<String>,
    session: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    if session.store.business_by_id(&business_id).is_none() {
        return Err(AppError::NotFound("Business not found".into()));
    }

    let appointments: Vec<Appointment> = session.store
        .appointments_of_business(&business_id)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(appointments))
}

pub async fn stats(session: AdminSession) -> impl IntoResponse {
    Json(session.store.global_stats())
}

pub async fn create_professional(
    mut session: AdminSession,
    Json(payload): Json<NewProfessional>,
) -> Result<impl IntoResponse, AppError> {
    let professional = session.store.create_professional(payload).await?;

    info!(professional_id = %professional.id, business_id = %professional.business_id, "professional created");

    Ok((StatusCode::CREATED, Json(professional)))
}

pub async fn create_account(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Json(payload): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, AppError> {
    let account = state.accounts
        .register(&payload.email, &payload.display_name, &payload.password, payload.role)
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}
