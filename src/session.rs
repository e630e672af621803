use std::collections::HashMap;
use std::sync::Arc;
use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::domain::models::auth::{Actor, Identity, Role};
use crate::domain::services::{gateway::StoreGateway, store::AppStore};
use crate::error::AppError;

pub const SESSION_COOKIE: &str = "session_id";

/// One browser-equivalent session: who is signed in, plus that session's store.
pub struct Session {
    pub id: String,
    pub actor: Option<Actor>,
    pub store: AppStore,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    pub fn sign_in(&mut self, identity: Identity) -> &Actor {
        let actor = Actor::resolve(identity, self.store.professionals());
        info!(session_id = %self.id, actor_id = %actor.id, role = actor.role.as_str(), "signed in");
        self.actor.insert(actor)
    }

    /// Idempotent.
    pub fn sign_out(&mut self) {
        if let Some(actor) = self.actor.take() {
            info!(session_id = %self.id, actor_id = %actor.id, "signed out");
        }
    }

    pub fn require_role(&self, role: Role) -> Result<&Actor, AppError> {
        let actor = self.actor.as_ref().ok_or(AppError::Unauthorized)?;
        if actor.role != role {
            return Err(AppError::Forbidden(format!("Requires the {} role", role.as_str())));
        }
        Ok(actor)
    }
}

pub type SharedSession = Arc<Mutex<Session>>;

pub const DEFAULT_MAX_SESSIONS: usize = 1000;

pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, SharedSession>>,
    max_sessions: usize,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// At most `max_sessions` live sessions; opening one more evicts the least recently seen.
    pub fn with_limit(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
        }
    }

    pub async fn get(&self, id: &str) -> Option<SharedSession> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Starts a session and loads its store before handing it out.
    pub async fn open(&self, gateway: Arc<StoreGateway>) -> SharedSession {
        let id: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(48)
            .map(char::from)
            .collect();

        let store = AppStore::load(gateway).await;
        let session = Arc::new(Mutex::new(Session {
            id: id.clone(),
            actor: None,
            store,
            last_seen: Utc::now(),
        }));

        let mut sessions = self.sessions.write().await;
        while sessions.len() >= self.max_sessions {
            let Some(oldest) = least_recently_seen(&sessions) else {
                warn!(live = sessions.len(), "session limit reached but every session is busy");
                break;
            };
            sessions.remove(&oldest);
            info!(session_id = %oldest, "session evicted");
        }
        sessions.insert(id.clone(), session.clone());
        drop(sessions);
        info!(session_id = %id, "session opened");
        session
    }

    pub async fn end(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            info!(session_id = %id, "session ended");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops sessions idle for longer than `idle`. Sessions busy in a handler are skipped.
    pub async fn sweep(&self, idle: Duration) -> usize {
        let cutoff = Utc::now() - idle;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| match session.try_lock() {
            Ok(s) => s.last_seen >= cutoff,
            Err(_) => true,
        });
        before - sessions.len()
    }
}

/// Sessions locked by an in-flight request are never picked.
fn least_recently_seen(sessions: &HashMap<String, SharedSession>) -> Option<String> {
    sessions.iter()
        .filter_map(|(id, session)| session.try_lock().ok().map(|s| (id, s.last_seen)))
        .min_by_key(|(_, last_seen)| *last_seen)
        .map(|(id, _)| id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::testing::OfflineStore;

    fn gateway() -> Arc<StoreGateway> {
        let repo = Arc::new(OfflineStore::default());
        Arc::new(StoreGateway::new(repo.clone(), repo.clone(), repo))
    }

    fn staff(email: &str) -> Identity {
        Identity { uid: "carlos".into(), email: email.into(), display_name: "carlos".into(), role: Role::Staff }
    }

    #[tokio::test]
    async fn test_staff_sign_in_binds_matching_professional() {
        let registry = SessionRegistry::new();
        let session = registry.open(gateway()).await;
        let mut session = session.lock().await;

        let actor = session.sign_in(staff("carlos@barberia.com")).clone();
        assert_eq!(actor.id, "1");
        assert_eq!(actor.name, "Carlos Mendoza");
        assert_eq!(actor.business_id.as_deref(), Some("1"));
        assert_eq!(actor.professional_id.as_deref(), Some("1"));
        assert!(session.require_role(Role::Staff).is_ok());
        assert!(matches!(session.require_role(Role::Admin), Err(AppError::Forbidden(_))));

        session.sign_out();
        session.sign_out();
        assert!(matches!(session.require_role(Role::Staff), Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_unmatched_staff_keeps_provider_identity() {
        let registry = SessionRegistry::new();
        let session = registry.open(gateway()).await;
        let mut session = session.lock().await;

        let actor = session.sign_in(staff("nobody@example.com")).clone();
        assert_eq!(actor.id, "carlos");
        assert!(actor.business_id.is_none());
        assert!(actor.professional_id.is_none());
    }

    #[tokio::test]
    async fn test_sweep_drops_idle_sessions() {
        let registry = SessionRegistry::new();
        let stale = registry.open(gateway()).await;
        let _fresh = registry.open(gateway()).await;
        stale.lock().await.last_seen = Utc::now() - Duration::hours(5);

        assert_eq!(registry.sweep(Duration::hours(1)).await, 1);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_open_evicts_least_recently_seen_at_limit() {
        let registry = SessionRegistry::with_limit(2);
        let oldest = registry.open(gateway()).await;
        let recent = registry.open(gateway()).await;
        let oldest_id = {
            let mut s = oldest.lock().await;
            s.last_seen = Utc::now() - Duration::minutes(30);
            s.id.clone()
        };
        let recent_id = recent.lock().await.id.clone();

        let newest = registry.open(gateway()).await;
        let newest_id = newest.lock().await.id.clone();

        assert_eq!(registry.len().await, 2);
        assert!(registry.get(&oldest_id).await.is_none());
        assert!(registry.get(&recent_id).await.is_some());
        assert!(registry.get(&newest_id).await.is_some());
    }

    #[tokio::test]
    async fn test_busy_sessions_are_not_evicted() {
        let registry = SessionRegistry::with_limit(1);
        let busy = registry.open(gateway()).await;
        let _held = busy.lock().await;

        let _other = registry.open(gateway()).await;
        assert_eq!(registry.len().await, 2);
    }
}
