pub mod about;
pub mod auth;
pub mod blog;
pub mod extractors;
pub mod pages;
pub mod projects;
pub mod skills;
pub mod social;
