use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use chrono::Utc;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tokio::sync::OwnedMutexGuard;
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::SameSite;
use tracing::Span;

use crate::domain::models::auth::Role;
use crate::error::AppError;
use crate::session::{Session, SESSION_COOKIE};
use crate::state::AppState;

/// The caller's session, locked for the whole handler so session mutations run to completion.
/// A request without a live session cookie gets a fresh session.
pub struct CurrentSession(pub OwnedMutexGuard<Session>);

impl FromRequestParts<Arc<AppState>> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .cloned()
            .ok_or(AppError::InternalWithMsg("cookie layer missing".into()))?;

        let existing = match cookies.get(SESSION_COOKIE) {
            Some(cookie) => state.sessions.get(cookie.value()).await,
            None => None,
        };

        let shared = match existing {
            Some(session) => session,
            None => state.sessions.open(state.gateway.clone()).await,
        };

        let mut session = shared.lock_owned().await;
        session.last_seen = Utc::now();
        cookies.add(session_cookie(&session.id, state.config.session_idle_minutes));

        Span::current().record("session_id", session.id.as_str());
        if let Some(actor) = &session.actor {
            Span::current().record("role", actor.role.as_str());
        }

        Ok(CurrentSession(session))
    }
}

/// Re-issued on every request so the browser's expiry slides along with the idle timeout.
fn session_cookie(id: &str, idle_minutes: i64) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, id.to_string());
    cookie.set_max_age(time::Duration::minutes(idle_minutes));
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie
}

impl Deref for CurrentSession {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.0
    }
}

impl DerefMut for CurrentSession {
    fn deref_mut(&mut self) -> &mut Session {
        &mut self.0
    }
}

macro_rules! role_session {
    ($name:ident, $role:expr) => {
        pub struct $name(pub CurrentSession);

        impl FromRequestParts<Arc<AppState>> for $name {
            type Rejection = AppError;

            async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
                let session = CurrentSession::from_request_parts(parts, state).await?;
                session.require_role($role)?;
                Ok($name(session))
            }
        }

        impl Deref for $name {
            type Target = Session;

            fn deref(&self) -> &Session {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Session {
                &mut self.0
            }
        }
    };
}

role_session!(AdminSession, Role::Admin);
role_session!(StaffSession, Role::Staff);
