use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::session::SessionRegistry;
use crate::domain::ports::{AccountRepository, AppointmentRepository, BusinessRepository, ProfessionalRepository};
use crate::domain::services::{
    gateway::StoreGateway,
    identity::{AccountIdentityProvider, IdentityResolver},
};
use crate::infra::repositories::{
    postgres_account_repo::PostgresAccountRepo, postgres_appointment_repo::PostgresAppointmentRepo,
    postgres_business_repo::PostgresBusinessRepo, postgres_professional_repo::PostgresProfessionalRepo,
    sqlite_account_repo::SqliteAccountRepo, sqlite_appointment_repo::SqliteAppointmentRepo,
    sqlite_business_repo::SqliteBusinessRepo, sqlite_professional_repo::SqliteProfessionalRepo,
};

/// Repository set for one backing database.
pub struct Repositories {
    pub businesses: Arc<dyn BusinessRepository>,
    pub professionals: Arc<dyn ProfessionalRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
    pub accounts: Arc<dyn AccountRepository>,
}

impl Repositories {
    pub fn sqlite(pool: SqlitePool) -> Self {
        Self {
            businesses: Arc::new(SqliteBusinessRepo::new(pool.clone())),
            professionals: Arc::new(SqliteProfessionalRepo::new(pool.clone())),
            appointments: Arc::new(SqliteAppointmentRepo::new(pool.clone())),
            accounts: Arc::new(SqliteAccountRepo::new(pool)),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            businesses: Arc::new(PostgresBusinessRepo::new(pool.clone())),
            professionals: Arc::new(PostgresProfessionalRepo::new(pool.clone())),
            appointments: Arc::new(PostgresAppointmentRepo::new(pool.clone())),
            accounts: Arc::new(PostgresAccountRepo::new(pool)),
        }
    }

    pub fn gateway(&self) -> StoreGateway {
        StoreGateway::new(self.businesses.clone(), self.professionals.clone(), self.appointments.clone())
    }
}

/// Wires configuration and repositories into the shared handler state.
pub fn build_state(config: &Config, repos: Repositories) -> AppState {
    let accounts = Arc::new(AccountIdentityProvider::new(repos.accounts.clone()));
    let identity = Arc::new(IdentityResolver::new(config.fixed_credentials(), accounts.clone()));

    AppState {
        config: config.clone(),
        gateway: Arc::new(repos.gateway()),
        identity,
        accounts,
        sessions: Arc::new(SessionRegistry::with_limit(config.max_sessions)),
    }
}

pub async fn connect_repositories(config: &Config) -> Repositories {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;
        Repositories::postgres(pool)
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;
        Repositories::sqlite(pool)
    }
}

pub async fn bootstrap_state(config: &Config) -> AppState {
    let repos = connect_repositories(config).await;
    build_state(config, repos)
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
