use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::skill::{Skill, SkillInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError>;
    async fn get_skill_by_id(&self, id: &Uuid) -> Result<Option<Skill>, AppError>;
    /// All skills by category, most experienced first within a category
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn update_skill(&self, id: &Uuid, skill: &SkillInsert) -> Result<Skill, AppError>;
    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError> {
        let created = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, category, years_of_experience, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.years_of_experience)
        .bind(skill.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_skill_by_id(&self, id: &Uuid) -> Result<Option<Skill>, AppError> {
        let skill = sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(skill)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT * FROM skills
            ORDER BY category ASC, years_of_experience DESC, created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn update_skill(&self, id: &Uuid, skill: &SkillInsert) -> Result<Skill, AppError> {
        sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills SET
                name = $1,
                category = $2,
                years_of_experience = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.years_of_experience)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Skill not found".into()))
    }

    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Skill not found".into()));
        }

        Ok(())
    }
}
