use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::entities::{
    option_fields::OptionField,
    validation::{validate_not_blank, validate_slug},
};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_TITLE_LENGTH: u64 = 200;
const MAX_SLUG_LENGTH: u64 = 50;
const MAX_IMAGE_PATH_LENGTH: u64 = 100;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

/// The writable state of a post right before it is persisted.
///
/// Both creation and updates funnel through [`BlogPostDraft::apply_save_rules`].
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct BlogPostDraft {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(length(min = 1, max = MAX_SLUG_LENGTH, message = "Slug must be between 1 and 50 characters"))]
    pub slug: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,

    pub excerpt: String,

    #[validate(length(max = MAX_IMAGE_PATH_LENGTH))]
    pub featured_image: Option<String>,

    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl BlogPostDraft {
    /// Fills the slug from the title when it is empty and stamps the first
    /// publication time. The slug is not checked for collisions; the store's
    /// unique constraint rejects duplicates.
    pub fn apply_save_rules(&mut self, now: DateTime<Utc>) {
        if self.slug.is_empty() && !self.title.is_empty() {
            self.slug = derive_slug(&self.title);
        }

        if self.published && self.published_at.is_none() {
            self.published_at = Some(now);
        }
    }
}

/// Lowercases the title, turns spaces into hyphens and drops commas and
/// apostrophes.
pub fn derive_slug(title: &str) -> String {
    title
        .to_lowercase()
        .replace(' ', "-")
        .replace([',', '\''], "")
}

/// Public path of a post, with the slug percent-encoded as one path segment.
/// Slugs never contain spaces, so the form encoder's `+` never appears.
pub fn preview_path(slug: &str) -> String {
    let segment: String = url::form_urlencoded::byte_serialize(slug.as_bytes()).collect();
    format!("/blog/{}", segment)
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BlogPostSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<BlogPost> for BlogPostSummary {
    fn from(post: BlogPost) -> Self {
        BlogPostSummary {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            featured_image: post.featured_image,
            published_at: post.published_at,
            created_at: post.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogPostCreatedResponse {
    pub id: Uuid,
    pub slug: String,
    pub published_at: Option<DateTime<Utc>>,
    pub preview_url: String,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewBlogPostRequest {
    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    pub content: String,

    pub excerpt: Option<String>,

    pub featured_image: Option<String>,

    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateBlogPostRequest {
    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub title: OptionField<String>,

    #[validate(custom(function = "validate_optional_slug"))]
    pub slug: OptionField<String>,

    pub content: OptionField<String>,

    pub excerpt: OptionField<String>,

    pub featured_image: OptionField<String>,

    pub published: OptionField<bool>,
}

pub fn validate_optional_slug(value: &OptionField<String>) -> Result<(), ValidationError> {
    if let Some(slug) = value.value_ref() {
        validate_slug(slug.trim())?;
    }
    Ok(())
}

/// Listing filter used by the admin surface; the public list always sets
/// `published` to `Some(true)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostFilter {
    pub published: Option<bool>,
    pub search: Option<String>,
}

impl BlogPostFilter {
    pub fn published_only() -> Self {
        BlogPostFilter {
            published: Some(true),
            search: None,
        }
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        if let Some(published) = self.published {
            if post.published != published {
                return false;
            }
        }
        match self.search.as_deref() {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                post.title.to_lowercase().contains(&term)
                    || post.content.to_lowercase().contains(&term)
                    || post.excerpt.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }
}

// ───── Conversions ──────────────────────────────────────────────────

impl NewBlogPostRequest {
    pub fn into_draft(self) -> BlogPostDraft {
        BlogPostDraft {
            title: self.title,
            slug: self.slug.map(|s| s.trim().to_string()).unwrap_or_default(),
            content: self.content,
            excerpt: self.excerpt.unwrap_or_default(),
            featured_image: self.featured_image.filter(|f| !f.trim().is_empty()),
            published: self.published,
            published_at: None,
        }
    }
}

impl UpdateBlogPostRequest {
    /// Overlays the patch on the stored post. Clearing the slug lets the
    /// save rules derive it again from the (possibly new) title.
    pub fn merge_into(self, current: &BlogPost) -> BlogPostDraft {
        let slug = match self.slug {
            OptionField::SetToValue(s) => s.trim().to_string(),
            OptionField::SetToNull => String::new(),
            OptionField::Unchanged => current.slug.clone(),
        };

        let excerpt = match self.excerpt {
            OptionField::SetToValue(e) => e,
            OptionField::SetToNull => String::new(),
            OptionField::Unchanged => current.excerpt.clone(),
        };

        BlogPostDraft {
            title: self.title.apply_to(current.title.clone()),
            slug,
            content: self.content.apply_to(current.content.clone()),
            excerpt,
            featured_image: self.featured_image.apply_to_option(current.featured_image.clone()),
            published: self.published.apply_to(current.published),
            published_at: current.published_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    fn draft(title: &str, published: bool) -> BlogPostDraft {
        NewBlogPostRequest {
            title: title.into(),
            slug: None,
            content: "Body".into(),
            excerpt: None,
            featured_image: None,
            published,
        }
        .into_draft()
    }

    fn stored(draft: BlogPostDraft, now: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            title: draft.title,
            slug: draft.slug,
            content: draft.content,
            excerpt: draft.excerpt,
            featured_image: draft.featured_image,
            published: draft.published,
            created_at: now,
            updated_at: now,
            published_at: draft.published_at,
        }
    }

    #[test]
    fn slug_is_lowercased_hyphenated_without_commas() {
        assert_eq!(derive_slug("Hello World, Again"), "hello-world-again");
        assert_eq!(derive_slug("Rust, Go, and Python"), "rust-go-and-python");
        assert_eq!(derive_slug("Don't Panic"), "dont-panic");
    }

    #[test]
    fn derived_slug_keeps_other_punctuation() {
        assert_eq!(derive_slug("What's new in 2.0?"), "whats-new-in-2.0?");
    }

    #[test]
    fn preview_path_encodes_punctuation() {
        assert_eq!(preview_path("hello-world"), "/blog/hello-world");
        assert_eq!(preview_path("is-c#-dead?"), "/blog/is-c%23-dead%3F");
        assert_eq!(preview_path("c++-tips"), "/blog/c%2B%2B-tips");
    }

    #[test]
    fn save_rules_derive_slug_only_when_empty() {
        let mut post = draft("My First Post", false);
        post.apply_save_rules(at(9));
        assert_eq!(post.slug, "my-first-post");

        post.title = "Renamed".into();
        post.apply_save_rules(at(10));
        assert_eq!(post.slug, "my-first-post");
    }

    #[test]
    fn explicit_slug_is_kept() {
        let mut post = NewBlogPostRequest {
            title: "Title".into(),
            slug: Some("custom-slug".into()),
            content: "Body".into(),
            excerpt: None,
            featured_image: None,
            published: false,
        }
        .into_draft();
        post.apply_save_rules(at(9));
        assert_eq!(post.slug, "custom-slug");
    }

    #[test]
    fn published_at_is_stamped_once() {
        let mut post = draft("Launch", true);
        post.apply_save_rules(at(9));
        assert_eq!(post.published_at, Some(at(9)));

        post.apply_save_rules(at(9) + Duration::hours(3));
        assert_eq!(post.published_at, Some(at(9)));
    }

    #[test]
    fn drafts_are_not_stamped() {
        let mut post = draft("Draft", false);
        post.apply_save_rules(at(9));
        assert_eq!(post.published_at, None);
    }

    #[test]
    fn unpublishing_keeps_the_first_publication_time() {
        let mut initial = draft("Launch", true);
        initial.apply_save_rules(at(9));
        let current = stored(initial, at(9));

        let patch = UpdateBlogPostRequest {
            published: OptionField::SetToValue(false),
            ..Default::default()
        };
        let mut next = patch.merge_into(&current);
        next.apply_save_rules(at(11));
        assert!(!next.published);
        assert_eq!(next.published_at, Some(at(9)));

        let republish = UpdateBlogPostRequest {
            published: OptionField::SetToValue(true),
            ..Default::default()
        };
        let mut again = republish.merge_into(&stored(next, at(9)));
        again.apply_save_rules(at(12));
        assert_eq!(again.published_at, Some(at(9)));
    }

    #[test]
    fn clearing_the_slug_rederives_from_new_title() {
        let mut initial = draft("Old Title", false);
        initial.apply_save_rules(at(9));
        let current = stored(initial, at(9));

        let patch = UpdateBlogPostRequest {
            title: OptionField::SetToValue("New, Better Title".into()),
            slug: OptionField::SetToNull,
            ..Default::default()
        };
        let mut next = patch.merge_into(&current);
        next.apply_save_rules(at(10));
        assert_eq!(next.slug, "new-better-title");
    }

    #[test]
    fn overlong_derived_slug_fails_validation() {
        let mut post = draft(&"word ".repeat(20), false);
        post.apply_save_rules(at(9));
        assert!(post.validate().is_err());
    }

    #[test]
    fn user_slug_with_spaces_is_rejected() {
        let req = NewBlogPostRequest {
            title: "Title".into(),
            slug: Some("not a slug".into()),
            content: "Body".into(),
            excerpt: None,
            featured_image: None,
            published: false,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn filter_matches_search_across_fields() {
        let mut d = draft("Async Rust", true);
        d.excerpt = "Tokio internals".into();
        d.apply_save_rules(at(9));
        let post = stored(d, at(9));

        let filter = BlogPostFilter { published: None, search: Some("tokio".into()) };
        assert!(filter.matches(&post));

        let drafts_only = BlogPostFilter { published: Some(false), search: None };
        assert!(!drafts_only.matches(&post));
    }
}
