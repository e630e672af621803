use std::env;

use crate::domain::services::identity::FixedCredentials;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_email: Option<String>,
    pub admin_secret: Option<String>,
    pub staff_secret: Option<String>,
    pub session_idle_minutes: i64,
    pub max_sessions: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            admin_email: non_empty_var("ADMIN_EMAIL"),
            admin_secret: non_empty_var("ADMIN_SECRET"),
            staff_secret: non_empty_var("STAFF_SECRET"),
            session_idle_minutes: env::var("SESSION_IDLE_MINUTES")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .expect("SESSION_IDLE_MINUTES must be a number"),
            max_sessions: env::var("MAX_SESSIONS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .expect("MAX_SESSIONS must be a number"),
        }
    }

    pub fn fixed_credentials(&self) -> FixedCredentials {
        FixedCredentials {
            admin_email: self.admin_email.clone(),
            admin_secret: self.admin_secret.clone(),
            staff_secret: self.staff_secret.clone(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
