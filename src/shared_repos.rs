use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    errors::AppError,
    repositories::{
        about::AboutRepository,
        blog_post::BlogPostRepository,
        memory::MemoryStore,
        project::ProjectRepository,
        skill::SkillRepository,
        social_settings::SocialSettingsRepository,
        sqlx_repo::{SqlxAboutRepo, SqlxBlogPostRepo, SqlxProjectRepo, SqlxSkillRepo, SqlxSocialSettingsRepo},
    },
};

/// What the repositories are backed by, kept for health checks.
#[derive(Clone)]
pub enum StoreBackend {
    Postgres(PgPool),
    Memory,
}

impl StoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Postgres(_) => "postgres",
            StoreBackend::Memory => "memory",
        }
    }

    pub async fn check_connection(&self) -> Result<(), AppError> {
        match self {
            StoreBackend::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
                Ok(())
            }
            StoreBackend::Memory => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct SharedRepositories {
    pub about_repo: Arc<dyn AboutRepository>,
    pub skill_repo: Arc<dyn SkillRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub social_repo: Arc<dyn SocialSettingsRepository>,
    pub blog_post_repo: Arc<dyn BlogPostRepository>,
    pub backend: StoreBackend,
}

impl SharedRepositories {
    pub fn postgres(pool: PgPool) -> Self {
        let about_repo: Arc<dyn AboutRepository> = Arc::new(SqlxAboutRepo::new(pool.clone()));
        let skill_repo: Arc<dyn SkillRepository> = Arc::new(SqlxSkillRepo::new(pool.clone()));
        let project_repo: Arc<dyn ProjectRepository> = Arc::new(SqlxProjectRepo::new(pool.clone()));
        let social_repo: Arc<dyn SocialSettingsRepository> = Arc::new(SqlxSocialSettingsRepo::new(pool.clone()));
        let blog_post_repo: Arc<dyn BlogPostRepository> = Arc::new(SqlxBlogPostRepo::new(pool.clone()));

        SharedRepositories {
            about_repo,
            skill_repo,
            project_repo,
            social_repo,
            blog_post_repo,
            backend: StoreBackend::Postgres(pool),
        }
    }

    /// Every repository shares one [`MemoryStore`].
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());

        let about_repo: Arc<dyn AboutRepository> = store.clone();
        let skill_repo: Arc<dyn SkillRepository> = store.clone();
        let project_repo: Arc<dyn ProjectRepository> = store.clone();
        let social_repo: Arc<dyn SocialSettingsRepository> = store.clone();
        let blog_post_repo: Arc<dyn BlogPostRepository> = store;

        SharedRepositories {
            about_repo,
            skill_repo,
            project_repo,
            social_repo,
            blog_post_repo,
            backend: StoreBackend::Memory,
        }
    }
}
