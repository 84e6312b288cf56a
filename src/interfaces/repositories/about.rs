use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::about::{About, AboutInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxAboutRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// Creates an "About" section
    async fn create_about(&self, about: &AboutInsert) -> Result<About, AppError>;

    /// Retrieves an "About" section by id
    async fn get_about_by_id(&self, id: &Uuid) -> Result<Option<About>, AppError>;

    /// Retrieves the section shown on the home page (earliest created)
    async fn get_first_about(&self) -> Result<Option<About>, AppError>;

    async fn list_about(&self) -> Result<Vec<About>, AppError>;

    /// Replaces the editable fields; `created_at` of the input is ignored
    async fn update_about(&self, id: &Uuid, about: &AboutInsert) -> Result<About, AppError>;

    async fn delete_about(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxAboutRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxAboutRepo { pool }
    }
}

#[async_trait]
impl AboutRepository for SqlxAboutRepo {
    async fn create_about(&self, about: &AboutInsert) -> Result<About, AppError> {
        let created = sqlx::query_as::<_, About>(
            r#"
            INSERT INTO about (title, content, profile_image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&about.title)
        .bind(&about.content)
        .bind(&about.profile_image)
        .bind(about.created_at)
        .bind(about.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_about_by_id(&self, id: &Uuid) -> Result<Option<About>, AppError> {
        let about = sqlx::query_as::<_, About>("SELECT * FROM about WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(about)
    }

    async fn get_first_about(&self) -> Result<Option<About>, AppError> {
        let about = sqlx::query_as::<_, About>(
            "SELECT * FROM about ORDER BY created_at ASC, id ASC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(about)
    }

    async fn list_about(&self) -> Result<Vec<About>, AppError> {
        let sections = sqlx::query_as::<_, About>("SELECT * FROM about ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(sections)
    }

    async fn update_about(&self, id: &Uuid, about: &AboutInsert) -> Result<About, AppError> {
        sqlx::query_as::<_, About>(
            r#"
            UPDATE about SET
                title = $1,
                content = $2,
                profile_image = $3,
                updated_at = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&about.title)
        .bind(&about.content)
        .bind(&about.profile_image)
        .bind(about.updated_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("About section not found".into()))
    }

    async fn delete_about(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM about WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("About section not found".into()));
        }

        Ok(())
    }
}
