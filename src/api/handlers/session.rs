use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tower_cookies::{Cookie, Cookies};

use crate::api::extractors::session::CurrentSession;
use crate::session::SESSION_COOKIE;
use crate::state::AppState;

/// Re-reads every collection from the store gateway into this session.
pub async fn refresh(mut session: CurrentSession) -> impl IntoResponse {
    session.store.refresh().await;
    Json(session.store.global_stats())
}

/// Ends the cookie's session, if any. Never opens one.
pub async fn end_session(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> impl IntoResponse {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        state.sessions.end(cookie.value()).await;

        let mut removal = Cookie::from(SESSION_COOKIE);
        removal.set_path("/");
        cookies.remove(removal);
    }

    StatusCode::NO_CONTENT
}
