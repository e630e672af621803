use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::warn;

use crate::api::dtos::requests::LoginRequest;
use crate::api::extractors::session::CurrentSession;
use crate::domain::models::auth::AuthResponse;
use crate::error::AppError;
use crate::state::AppState;

pub async fn login(
    State(state): State<Arc<AppState>>,
    mut session: CurrentSession,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.email.trim();
    let Some(identity) = state.identity.login(email, &payload.password).await else {
        warn!(session_id = %session.id, "rejected login for {}", email);
        return Err(AppError::Unauthorized);
    };

    let actor = session.sign_in(identity).clone();

    Ok(Json(AuthResponse { actor: Some(actor) }))
}

pub async fn logout(mut session: CurrentSession) -> impl IntoResponse {
    session.sign_out();
    Json(AuthResponse { actor: None })
}

pub async fn me(session: CurrentSession) -> impl IntoResponse {
    Json(AuthResponse { actor: session.actor.clone() })
}
