use crate::domain::{models::professional::{Professional, ProfessionalPatch}, ports::ProfessionalRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{types::Json, PgPool};

pub struct PostgresProfessionalRepo {
    pool: PgPool,
}

impl PostgresProfessionalRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfessionalRepository for PostgresProfessionalRepo {
    async fn list(&self) -> Result<Vec<Professional>, AppError> {
        sqlx::query_as::<_, Professional>("SELECT * FROM professionals ORDER BY seq ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_business(&self, business_id: &str) -> Result<Vec<Professional>, AppError> {
        sqlx::query_as::<_, Professional>("SELECT * FROM professionals WHERE business_id = $1 ORDER BY seq ASC")
            .bind(business_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Professional>, AppError> {
        sqlx::query_as::<_, Professional>("SELECT * FROM professionals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create(&self, professional: &Professional) -> Result<Professional, AppError> {
        sqlx::query_as::<_, Professional>(
            "INSERT INTO professionals (id, business_id, name, email, specialty, photo_url, available_slots, services, location)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING *"
        )
            .bind(&professional.id)
            .bind(&professional.business_id)
            .bind(&professional.name)
            .bind(&professional.email)
            .bind(&professional.specialty)
            .bind(&professional.photo_url)
            .bind(Json(&professional.available_slots))
            .bind(Json(&professional.services))
            .bind(&professional.location)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, id: &str, patch: &ProfessionalPatch) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE professionals SET
                name = COALESCE($1, name),
                email = COALESCE($2, email),
                specialty = COALESCE($3, specialty),
                photo_url = COALESCE($4, photo_url),
                available_slots = COALESCE($5, available_slots),
                services = COALESCE($6, services),
                location = COALESCE($7, location)
             WHERE id = $8"
        )
            .bind(patch.name.as_deref())
            .bind(patch.email.as_deref())
            .bind(patch.specialty.as_deref())
            .bind(patch.photo_url.as_deref())
            .bind(patch.available_slots.as_ref().map(Json))
            .bind(patch.services.as_ref().map(Json))
            .bind(patch.location.as_deref())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Professional not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM professionals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Professional not found".into()));
        }
        Ok(())
    }
}
