use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::validate_optional_url;

/// Site-wide social links. One record is expected; readers use the first.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct SocialSettings {
    pub id: Uuid,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub facebook_url: Option<String>,
    pub github_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SocialSettingsInsert {
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub facebook_url: Option<String>,
    pub github_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct SocialSettingsRequest {
    #[validate(custom(function = "validate_optional_url"))]
    pub linkedin_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub twitter_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub facebook_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub github_url: Option<String>,
}

impl SocialSettingsRequest {
    pub fn prepare_for_insert(self, now: DateTime<Utc>) -> SocialSettingsInsert {
        SocialSettingsInsert {
            linkedin_url: blank_to_none(self.linkedin_url),
            twitter_url: blank_to_none(self.twitter_url),
            facebook_url: blank_to_none(self.facebook_url),
            github_url: blank_to_none(self.github_url),
            created_at: now,
            updated_at: now,
        }
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
