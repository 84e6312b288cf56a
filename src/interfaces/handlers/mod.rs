pub mod about;
pub mod auth;
pub mod blog_posts;
pub mod forms;
pub mod pages;
pub mod projects;
pub mod skills;
pub mod social_settings;
pub mod system;
