pub mod about;
pub mod blog_post;
pub mod option_fields;
pub mod pagination;
pub mod project;
pub mod skill;
pub mod social_settings;
pub mod token;
pub mod validation;
