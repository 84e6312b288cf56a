mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;

pub use domain::{entities, use_cases};
pub use interfaces::{forms, handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, db, utils};

use auth::jwt::JwtService;
use repositories::{
    about::AboutRepository, blog_post::BlogPostRepository, project::ProjectRepository,
    skill::SkillRepository, social_settings::SocialSettingsRepository,
};
use shared_repos::{SharedRepositories, StoreBackend};
use use_cases::{
    about::AboutHandler,
    auth::{AdminCredentials, AuthHandler},
    blog::BlogPostHandler,
    pages::PageHandler,
    projects::ProjectHandler,
    skills::SkillHandler,
    social::SocialSettingsHandler,
};

pub type AppAuthHandler = AuthHandler<JwtService>;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub about_handler: AboutHandler<dyn AboutRepository>,
    pub skill_handler: SkillHandler<dyn SkillRepository>,
    pub project_handler: ProjectHandler<dyn ProjectRepository>,
    pub social_handler: SocialSettingsHandler<dyn SocialSettingsRepository>,
    pub blog_handler: BlogPostHandler<dyn BlogPostRepository>,
    pub page_handler: PageHandler,
    pub storage: StoreBackend,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, repos: SharedRepositories) -> Self {
        let jwt_service = JwtService::new(config);
        let admin = AdminCredentials {
            username: config.admin_username.clone(),
            password_hash: config.admin_password_hash.clone(),
        };

        let page_handler = PageHandler::new(
            repos.about_repo.clone(),
            repos.skill_repo.clone(),
            repos.project_repo.clone(),
            repos.blog_post_repo.clone(),
        );

        AppState {
            auth_handler: AuthHandler::new(admin, jwt_service),
            about_handler: AboutHandler::new(repos.about_repo),
            skill_handler: SkillHandler::new(repos.skill_repo),
            project_handler: ProjectHandler::new(repos.project_repo),
            social_handler: SocialSettingsHandler::new(repos.social_repo),
            blog_handler: BlogPostHandler::new(repos.blog_post_repo),
            page_handler,
            storage: repos.backend,
        }
    }
}
