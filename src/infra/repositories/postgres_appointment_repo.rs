use crate::domain::{models::appointment::{Appointment, AppointmentPatch}, ports::AppointmentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{types::Json, PgPool};

pub struct PostgresAppointmentRepo {
    pool: PgPool,
}

impl PostgresAppointmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepo {
    async fn list(&self) -> Result<Vec<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments ORDER BY created_at DESC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_professional(&self, professional_id: &str) -> Result<Vec<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE professional_id = $1 ORDER BY created_at DESC")
            .bind(professional_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_business(&self, business_id: &str) -> Result<Vec<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE business_id = $1 ORDER BY created_at DESC")
            .bind(business_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments (id, business_id, professional_id, date, time, status, client_name, client_phone, service, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *"
        )
            .bind(&appointment.id).bind(&appointment.business_id).bind(&appointment.professional_id)
            .bind(appointment.date).bind(&appointment.time).bind(appointment.status.as_str())
            .bind(&appointment.client_name).bind(&appointment.client_phone).bind(Json(&appointment.service))
            .bind(appointment.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, id: &str, patch: &AppointmentPatch) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE appointments SET
                date = COALESCE($1, date), time = COALESCE($2, time), status = COALESCE($3, status),
                client_name = COALESCE($4, client_name), client_phone = COALESCE($5, client_phone)
             WHERE id = $6"
        )
            .bind(patch.date).bind(patch.time.as_deref()).bind(patch.status.map(|s| s.as_str()))
            .bind(patch.client_name.as_deref()).bind(patch.client_phone.as_deref()).bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Appointment not found".into())); }
        Ok(())
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Appointment not found".into())); }
        Ok(())
    }
}
