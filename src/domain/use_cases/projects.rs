use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    entities::project::{Project, ProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub project_repo: Arc<R>,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub fn new(project_repo: Arc<R>) -> Self {
        ProjectHandler { project_repo }
    }

    pub async fn create_project(&self, request: ProjectRequest) -> Result<Project, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert(Utc::now());
        self.project_repo.create_project(&insert).await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, AppError> {
        let valid_id = valid_uuid(id)?;

        self.project_repo
            .get_project_by_id(&valid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    pub async fn update_project(&self, id: &str, request: ProjectRequest) -> Result<Project, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;

        let update = request.prepare_for_insert(Utc::now());
        self.project_repo.update_project(&valid_id, &update).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.project_repo.delete_project(&valid_id).await
    }
}
