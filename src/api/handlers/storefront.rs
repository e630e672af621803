use axum::{extract::Path, response::IntoResponse, Json};

use crate::api::dtos::responses::{LandingResponse, ProfessionalDetailResponse};
use crate::api::extractors::session::CurrentSession;
use crate::domain::models::business::Business;
use crate::domain::services::store::AppStore;
use crate::error::AppError;

fn business_by_slug(store: &AppStore, slug: &str) -> Result<Business, AppError> {
    store.resolve_business_by_slug(slug)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Business not found".into()))
}

pub async fn landing(
    Path(slug): Path<String>,
    session: CurrentSession,
) -> Result<impl IntoResponse, AppError> {
    let business = business_by_slug(&session.store, &slug)?;
    if !business.is_active() {
        return Err(AppError::Forbidden("This business is temporarily unavailable".into()));
    }

    let professionals = session.store
        .professionals_of_business(&business.id)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(LandingResponse { business, professionals }))
}

pub async fn list_professionals(
    Path(slug): Path<String>,
    session: CurrentSession,
) -> Result<impl IntoResponse, AppError> {
    let business = business_by_slug(&session.store, &slug)?;
    let professionals: Vec<_> = session.store
        .professionals_of_business(&business.id)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(professionals))
}

pub async fn get_professional(
    Path((slug, professional_id)): Path<(String, String)>,
    session: CurrentSession,
) -> Result<impl IntoResponse, AppError> {
    let business = business_by_slug(&session.store, &slug)?;
    let professional = session.store
        .professional_by_id(&professional_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Professional not found".into()))?;

    Ok(Json(ProfessionalDetailResponse { business, professional }))
}
