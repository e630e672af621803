use crate::domain::{models::business::{Business, BusinessPatch}, ports::BusinessRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteBusinessRepo {
    pool: SqlitePool,
}

impl SqliteBusinessRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessRepository for SqliteBusinessRepo {
    async fn list(&self) -> Result<Vec<Business>, AppError> {
        sqlx::query_as::<_, Business>("SELECT * FROM businesses ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Business>, AppError> {
        sqlx::query_as::<_, Business>(
            "SELECT * FROM businesses WHERE slug = ? LIMIT 1",
        )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Business>, AppError> {
        sqlx::query_as::<_, Business>(
            "SELECT * FROM businesses WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create(&self, business: &Business) -> Result<Business, AppError> {
        sqlx::query_as::<_, Business>(
            "INSERT INTO businesses (id, name, slug, owner_email, status, plan, description, address, phone, primary_color, secondary_color, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&business.id)
            .bind(&business.name)
            .bind(&business.slug)
            .bind(&business.owner_email)
            .bind(business.status.as_str())
            .bind(business.plan.as_str())
            .bind(&business.description)
            .bind(&business.address)
            .bind(&business.phone)
            .bind(&business.theme.primary)
            .bind(&business.theme.secondary)
            .bind(business.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, id: &str, patch: &BusinessPatch) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE businesses SET
                name = COALESCE(?, name),
                owner_email = COALESCE(?, owner_email),
                status = COALESCE(?, status),
                plan = COALESCE(?, plan),
                description = COALESCE(?, description),
                address = COALESCE(?, address),
                phone = COALESCE(?, phone),
                primary_color = COALESCE(?, primary_color),
                secondary_color = COALESCE(?, secondary_color)
             WHERE id = ?"
        )
            .bind(patch.name.as_deref())
            .bind(patch.owner_email.as_deref())
            .bind(patch.status.map(|s| s.as_str()))
            .bind(patch.plan.map(|p| p.as_str()))
            .bind(patch.description.as_deref())
            .bind(patch.address.as_deref())
            .bind(patch.phone.as_deref())
            .bind(patch.theme.as_ref().map(|t| t.primary.as_str()))
            .bind(patch.theme.as_ref().map(|t| t.secondary.as_str()))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Business not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM businesses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Business not found".into()));
        }
        Ok(())
    }
}
