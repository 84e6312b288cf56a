use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::validate_not_blank;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct About {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AboutInsert {
    pub title: String,
    pub content: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AboutRequest {
    #[serde(default = "default_title")]
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,

    #[validate(length(max = 100))]
    pub profile_image: Option<String>,
}

fn default_title() -> String {
    "About Me".to_string()
}

impl AboutRequest {
    pub fn prepare_for_insert(self, now: DateTime<Utc>) -> AboutInsert {
        AboutInsert {
            title: self.title,
            content: self.content,
            profile_image: self.profile_image,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_defaults_to_about_me() {
        let req: AboutRequest = serde_json::from_str(r#"{"content": "Hi", "profile_image": null}"#).unwrap();
        assert_eq!(req.title, "About Me");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn blank_content_is_rejected() {
        let req: AboutRequest = serde_json::from_str(r#"{"content": "   ", "profile_image": null}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
