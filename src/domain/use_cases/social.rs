use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    entities::social_settings::{SocialSettings, SocialSettingsRequest},
    errors::AppError,
    repositories::social_settings::SocialSettingsRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct SocialSettingsHandler<R>
where
    R: SocialSettingsRepository + ?Sized,
{
    pub social_repo: Arc<R>,
}

impl<R> SocialSettingsHandler<R>
where
    R: SocialSettingsRepository + ?Sized,
{
    pub fn new(social_repo: Arc<R>) -> Self {
        SocialSettingsHandler { social_repo }
    }

    pub async fn create_social_settings(&self, request: SocialSettingsRequest) -> Result<SocialSettings, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert(Utc::now());
        self.social_repo.create_social_settings(&insert).await
    }

    pub async fn list_social_settings(&self) -> Result<Vec<SocialSettings>, AppError> {
        self.social_repo.list_social_settings().await
    }

    pub async fn get_social_settings(&self, id: &str) -> Result<SocialSettings, AppError> {
        let valid_id = valid_uuid(id)?;

        self.social_repo
            .get_social_settings_by_id(&valid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Social settings not found".to_string()))
    }

    /// The record every public page shows, if any exists
    pub async fn current_social_settings(&self) -> Result<Option<SocialSettings>, AppError> {
        self.social_repo.get_first_social_settings().await
    }

    pub async fn update_social_settings(&self, id: &str, request: SocialSettingsRequest) -> Result<SocialSettings, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;

        let update = request.prepare_for_insert(Utc::now());
        self.social_repo.update_social_settings(&valid_id, &update).await
    }

    pub async fn delete_social_settings(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.social_repo.delete_social_settings(&valid_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::social_settings::MockSocialSettingsRepository;

    #[actix_rt::test]
    async fn ftp_link_is_rejected() {
        let mut repo = MockSocialSettingsRepository::new();
        repo.expect_create_social_settings().never();

        let handler = SocialSettingsHandler::new(Arc::new(repo));
        let err = handler
            .create_social_settings(SocialSettingsRequest {
                github_url: Some("ftp://github.com/someone".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
