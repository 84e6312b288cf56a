use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    entities::about::{About, AboutRequest},
    errors::AppError,
    repositories::about::AboutRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct AboutHandler<R>
where
    R: AboutRepository + ?Sized,
{
    pub about_repo: Arc<R>,
}

impl<R> AboutHandler<R>
where
    R: AboutRepository + ?Sized,
{
    pub fn new(about_repo: Arc<R>) -> Self {
        AboutHandler { about_repo }
    }

    /// Creates an "About" section
    pub async fn create_about(&self, request: AboutRequest) -> Result<About, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert(Utc::now());
        self.about_repo.create_about(&insert).await
    }

    pub async fn list_about(&self) -> Result<Vec<About>, AppError> {
        self.about_repo.list_about().await
    }

    pub async fn get_about(&self, id: &str) -> Result<About, AppError> {
        let valid_id = valid_uuid(id)?;

        self.about_repo
            .get_about_by_id(&valid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("About section not found".to_string()))
    }

    /// Replaces the section's title, content and image
    pub async fn update_about(&self, id: &str, request: AboutRequest) -> Result<About, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;

        let update = request.prepare_for_insert(Utc::now());
        self.about_repo.update_about(&valid_id, &update).await
    }

    pub async fn delete_about(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.about_repo.delete_about(&valid_id).await
    }
}
