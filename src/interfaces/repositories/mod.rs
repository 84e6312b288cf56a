pub mod about;
pub mod blog_post;
pub mod memory;
pub mod project;
pub mod skill;
pub mod social_settings;
pub mod sqlx_repo;
pub mod token;
