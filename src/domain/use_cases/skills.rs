use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    entities::skill::{Skill, SkillRequest},
    errors::AppError,
    repositories::skill::SkillRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct SkillHandler<R>
where
    R: SkillRepository + ?Sized,
{
    pub skill_repo: Arc<R>,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository + ?Sized,
{
    pub fn new(skill_repo: Arc<R>) -> Self {
        SkillHandler { skill_repo }
    }

    pub async fn create_skill(&self, request: SkillRequest) -> Result<Skill, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert(Utc::now());
        self.skill_repo.create_skill(&insert).await
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }

    pub async fn get_skill(&self, id: &str) -> Result<Skill, AppError> {
        let valid_id = valid_uuid(id)?;

        self.skill_repo
            .get_skill_by_id(&valid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Skill not found".to_string()))
    }

    pub async fn update_skill(&self, id: &str, request: SkillRequest) -> Result<Skill, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;

        let update = request.prepare_for_insert(Utc::now());
        self.skill_repo.update_skill(&valid_id, &update).await
    }

    pub async fn delete_skill(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.skill_repo.delete_skill(&valid_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::skill::MockSkillRepository;

    #[actix_rt::test]
    async fn valid_skill_is_stored() {
        let mut repo = MockSkillRepository::new();
        repo.expect_create_skill()
            .withf(|insert| insert.name == "Rust" && insert.years_of_experience == 4)
            .times(1)
            .returning(|insert| {
                Ok(Skill {
                    id: uuid::Uuid::new_v4(),
                    name: insert.name.clone(),
                    category: insert.category.clone(),
                    years_of_experience: insert.years_of_experience,
                    created_at: insert.created_at,
                })
            });

        let handler = SkillHandler::new(Arc::new(repo));
        let skill = handler
            .create_skill(SkillRequest {
                name: "Rust".into(),
                category: "Languages".into(),
                years_of_experience: 4,
            })
            .await
            .unwrap();
        assert_eq!(skill.category, "Languages");
    }

    #[actix_rt::test]
    async fn negative_years_are_rejected() {
        let mut repo = MockSkillRepository::new();
        repo.expect_create_skill().never();

        let handler = SkillHandler::new(Arc::new(repo));
        let err = handler
            .create_skill(SkillRequest {
                name: "Rust".into(),
                category: "Languages".into(),
                years_of_experience: -1,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
