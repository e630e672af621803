use agendly_backend::{
    api::router::create_router,
    config::Config,
    domain::models::{
        appointment::{Appointment, AppointmentPatch, AppointmentStatus, NewAppointment},
        business::{Business, BusinessPatch},
        professional::{Professional, ProfessionalPatch},
    },
    domain::ports::{AppointmentRepository, BusinessRepository, ProfessionalRepository},
    domain::services::sample_data::{sample_new_businesses, sample_new_professionals},
    error::AppError,
    infra::factory::{build_state, Repositories},
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub const ADMIN_EMAIL: &str = "admin@agendly.com";
pub const ADMIN_SECRET: &str = "admin123";
pub const STAFF_SECRET: &str = "123456";

/// A repository that is never reachable.
pub struct Unreachable;

fn unreachable<T>() -> Result<T, AppError> {
    Err(AppError::InternalWithMsg("store unreachable".into()))
}

#[async_trait]
impl BusinessRepository for Unreachable {
    async fn list(&self) -> Result<Vec<Business>, AppError> { unreachable() }
    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Business>, AppError> { unreachable() }
    async fn find_by_id(&self, _id: &str) -> Result<Option<Business>, AppError> { unreachable() }
    async fn create(&self, _business: &Business) -> Result<Business, AppError> { unreachable() }
    async fn update(&self, _id: &str, _patch: &BusinessPatch) -> Result<(), AppError> { unreachable() }
    async fn delete(&self, _id: &str) -> Result<(), AppError> { unreachable() }
}

#[async_trait]
impl ProfessionalRepository for Unreachable {
    async fn list(&self) -> Result<Vec<Professional>, AppError> { unreachable() }
    async fn list_by_business(&self, _business_id: &str) -> Result<Vec<Professional>, AppError> { unreachable() }
    async fn find_by_id(&self, _id: &str) -> Result<Option<Professional>, AppError> { unreachable() }
    async fn create(&self, _professional: &Professional) -> Result<Professional, AppError> { unreachable() }
    async fn update(&self, _id: &str, _patch: &ProfessionalPatch) -> Result<(), AppError> { unreachable() }
    async fn delete(&self, _id: &str) -> Result<(), AppError> { unreachable() }
}

#[async_trait]
impl AppointmentRepository for Unreachable {
    async fn list(&self) -> Result<Vec<Appointment>, AppError> { unreachable() }
    async fn list_by_professional(&self, _professional_id: &str) -> Result<Vec<Appointment>, AppError> { unreachable() }
    async fn list_by_business(&self, _business_id: &str) -> Result<Vec<Appointment>, AppError> { unreachable() }
    async fn find_by_id(&self, _id: &str) -> Result<Option<Appointment>, AppError> { unreachable() }
    async fn create(&self, _appointment: &Appointment) -> Result<Appointment, AppError> { unreachable() }
    async fn update(&self, _id: &str, _patch: &AppointmentPatch) -> Result<(), AppError> { unreachable() }
    async fn delete(&self, _id: &str) -> Result<(), AppError> { unreachable() }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub session: Option<String>,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::build(|repos| repos).await
    }

    /// Same database, but with some repositories swapped for test doubles.
    pub async fn build(customize: impl FnOnce(Repositories) -> Repositories) -> Self {
        Self::build_with(|config| config, customize).await
    }

    pub async fn with_session_limit(max_sessions: usize) -> Self {
        Self::build_with(|config| Config { max_sessions, ..config }, |repos| repos).await
    }

    pub async fn build_with(
        configure: impl FnOnce(Config) -> Config,
        customize: impl FnOnce(Repositories) -> Repositories,
    ) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            port: 0,
            admin_email: Some(ADMIN_EMAIL.to_string()),
            admin_secret: Some(ADMIN_SECRET.to_string()),
            staff_secret: Some(STAFF_SECRET.to_string()),
            session_idle_minutes: 120,
            max_sessions: 1000,
        };
        let config = configure(config);

        let repos = customize(Repositories::sqlite(pool.clone()));
        let state = Arc::new(build_state(&config, repos));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Writes the two demo businesses and their staff straight through the gateway.
    /// Must run before the sessions under test are opened.
    pub async fn seed_samples(&self) -> (Vec<Business>, Vec<Professional>) {
        let mut businesses = Vec::new();
        for fields in sample_new_businesses() {
            businesses.push(self.state.gateway.create_business(fields).await.unwrap());
        }

        let ids: Vec<String> = businesses.iter().map(|b| b.id.clone()).collect();
        let mut professionals = Vec::new();
        for fields in sample_new_professionals(&ids) {
            professionals.push(self.state.gateway.create_professional(fields).await.unwrap());
        }

        (businesses, professionals)
    }

    pub async fn seed_appointment(&self, professional: &Professional, date: NaiveDate, time: &str) -> Appointment {
        self.state.gateway.create_appointment(NewAppointment {
            business_id: professional.business_id.clone(),
            professional_id: professional.id.clone(),
            date,
            time: time.to_string(),
            status: AppointmentStatus::Confirmed,
            client_name: "Seeded Client".to_string(),
            client_phone: None,
            service: professional.services[0].clone(),
        }).await.unwrap()
    }

    pub async fn call(&self, method: Method, uri: &str, session: Option<&str>, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(id) = session {
            builder = builder.header(header::COOKIE, format!("session_id={}", id));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let session = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .find_map(|c| c.strip_prefix("session_id="))
            .map(|rest| rest.split(';').next().unwrap_or_default().to_string())
            .filter(|id| !id.is_empty());

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse { status, body, session }
    }

    pub async fn get(&self, uri: &str, session: Option<&str>) -> TestResponse {
        self.call(Method::GET, uri, session, None).await
    }

    pub async fn post(&self, uri: &str, session: Option<&str>, body: Value) -> TestResponse {
        self.call(Method::POST, uri, session, Some(body)).await
    }

    /// Opens a fresh session and signs in. Returns the session id.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let res = self.post(
            "/api/v1/auth/login",
            None,
            serde_json::json!({ "email": email, "password": password }),
        ).await;

        if !res.status.is_success() {
            panic!("Login failed in test helper: status {}", res.status);
        }
        res.session.expect("No session_id cookie returned")
    }

    pub async fn login_admin(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_SECRET).await
    }

    pub async fn appointment_count(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM appointments")
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
