use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::{validate_not_blank, validate_optional_url};

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    /// Comma-separated, as entered by the administrator.
    pub technologies: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ProjectRequest {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    #[validate(length(max = 100))]
    pub image: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub github_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub live_url: Option<String>,

    #[validate(length(max = 500))]
    pub technologies: String,

    #[serde(default)]
    pub featured: bool,
}

impl ProjectRequest {
    pub fn prepare_for_insert(self, now: DateTime<Utc>) -> ProjectInsert {
        ProjectInsert {
            title: self.title,
            description: self.description,
            image: empty_to_none(self.image),
            github_url: empty_to_none(self.github_url),
            live_url: empty_to_none(self.live_url),
            technologies: self.technologies,
            featured: self.featured,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Project {
    /// Splits the free-text technologies field into trimmed, non-empty names.
    pub fn technologies_list(&self) -> Vec<String> {
        split_technologies(&self.technologies)
    }
}

pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Project as shown in page bundles.
#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    #[serde(flatten)]
    pub project: Project,
    pub technologies_list: Vec<String>,
}

impl From<Project> for ProjectSummary {
    fn from(project: Project) -> Self {
        let technologies_list = project.technologies_list();
        ProjectSummary { project, technologies_list }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn technologies_are_split_and_trimmed() {
        assert_eq!(
            split_technologies(" Rust, actix-web ,,PostgreSQL "),
            vec!["Rust", "actix-web", "PostgreSQL"]
        );
        assert!(split_technologies("").is_empty());
    }

    #[test]
    fn non_http_links_are_rejected() {
        let req = ProjectRequest {
            title: "Site".into(),
            description: "A site".into(),
            image: None,
            github_url: Some("javascript:alert(1)".into()),
            live_url: None,
            technologies: "Rust".into(),
            featured: false,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn blank_links_are_optional() {
        let req = ProjectRequest {
            title: "Site".into(),
            description: "A site".into(),
            image: None,
            github_url: Some(String::new()),
            live_url: Some("  ".into()),
            technologies: "Rust".into(),
            featured: false,
        };
        assert!(req.validate().is_ok());

        let insert = req.prepare_for_insert(Utc::now());
        assert_eq!(insert.github_url, None);
        assert_eq!(insert.live_url, None);
    }
}
