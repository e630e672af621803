use crate::domain::{models::professional::{Professional, ProfessionalPatch}, ports::ProfessionalRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{types::Json, SqlitePool};

pub struct SqliteProfessionalRepo {
    pool: SqlitePool,
}

impl SqliteProfessionalRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfessionalRepository for SqliteProfessionalRepo {
    async fn list(&self) -> Result<Vec<Professional>, AppError> {
        sqlx::query_as::<_, Professional>("SELECT * FROM professionals ORDER BY rowid ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_business(&self, business_id: &str) -> Result<Vec<Professional>, AppError> {
        sqlx::query_as::<_, Professional>("SELECT * FROM professionals WHERE business_id = ? ORDER BY rowid ASC")
            .bind(business_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Professional>, AppError> {
        sqlx::query_as::<_, Professional>("SELECT * FROM professionals WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create(&self, professional: &Professional) -> Result<Professional, AppError> {
        sqlx::query_as::<_, Professional>(
            "INSERT INTO professionals (id, business_id, name, email, specialty, photo_url, available_slots, services, location)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
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
                name = COALESCE(?, name),
                email = COALESCE(?, email),
                specialty = COALESCE(?, specialty),
                photo_url = COALESCE(?, photo_url),
                available_slots = COALESCE(?, available_slots),
                services = COALESCE(?, services),
                location = COALESCE(?, location)
             WHERE id = ?"
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
        let result = sqlx::query("DELETE FROM professionals WHERE id = ?")
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
