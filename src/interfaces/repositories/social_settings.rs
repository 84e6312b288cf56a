use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::social_settings::{SocialSettings, SocialSettingsInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxSocialSettingsRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialSettingsRepository: Send + Sync {
    async fn create_social_settings(&self, settings: &SocialSettingsInsert) -> Result<SocialSettings, AppError>;
    async fn get_social_settings_by_id(&self, id: &Uuid) -> Result<Option<SocialSettings>, AppError>;
    /// The record every page footer uses: the earliest one created.
    async fn get_first_social_settings(&self) -> Result<Option<SocialSettings>, AppError>;
    async fn list_social_settings(&self) -> Result<Vec<SocialSettings>, AppError>;
    async fn update_social_settings(&self, id: &Uuid, settings: &SocialSettingsInsert) -> Result<SocialSettings, AppError>;
    async fn delete_social_settings(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxSocialSettingsRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSocialSettingsRepo { pool }
    }
}

#[async_trait]
impl SocialSettingsRepository for SqlxSocialSettingsRepo {
    async fn create_social_settings(&self, settings: &SocialSettingsInsert) -> Result<SocialSettings, AppError> {
        let created = sqlx::query_as::<_, SocialSettings>(
            r#"
            INSERT INTO social_settings (
                linkedin_url, twitter_url, facebook_url, github_url, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&settings.linkedin_url)
        .bind(&settings.twitter_url)
        .bind(&settings.facebook_url)
        .bind(&settings.github_url)
        .bind(settings.created_at)
        .bind(settings.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_social_settings_by_id(&self, id: &Uuid) -> Result<Option<SocialSettings>, AppError> {
        let settings = sqlx::query_as::<_, SocialSettings>("SELECT * FROM social_settings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(settings)
    }

    async fn get_first_social_settings(&self) -> Result<Option<SocialSettings>, AppError> {
        let settings = sqlx::query_as::<_, SocialSettings>(
            "SELECT * FROM social_settings ORDER BY created_at ASC, id ASC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(settings)
    }

    async fn list_social_settings(&self) -> Result<Vec<SocialSettings>, AppError> {
        let settings = sqlx::query_as::<_, SocialSettings>(
            "SELECT * FROM social_settings ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(settings)
    }

    async fn update_social_settings(&self, id: &Uuid, settings: &SocialSettingsInsert) -> Result<SocialSettings, AppError> {
        sqlx::query_as::<_, SocialSettings>(
            r#"
            UPDATE social_settings SET
                linkedin_url = $1,
                twitter_url = $2,
                facebook_url = $3,
                github_url = $4,
                updated_at = $5
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&settings.linkedin_url)
        .bind(&settings.twitter_url)
        .bind(&settings.facebook_url)
        .bind(&settings.github_url)
        .bind(settings.updated_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Social settings not found".into()))
    }

    async fn delete_social_settings(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM social_settings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Social settings not found".into()));
        }

        Ok(())
    }
}
