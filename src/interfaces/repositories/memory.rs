use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::{
    entities::{
        about::{About, AboutInsert},
        blog_post::{BlogPost, BlogPostDraft, BlogPostFilter},
        project::{Project, ProjectInsert},
        skill::{Skill, SkillInsert},
        social_settings::{SocialSettings, SocialSettingsInsert},
    },
    errors::AppError,
    repositories::{
        about::AboutRepository, blog_post::BlogPostRepository, project::ProjectRepository,
        skill::SkillRepository, social_settings::SocialSettingsRepository,
    },
};

/// Process-local store with the same ordering and uniqueness rules as the
/// Postgres tables. Used for demo runs and the integration tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    about: RwLock<Vec<About>>,
    skills: RwLock<Vec<Skill>>,
    projects: RwLock<Vec<Project>>,
    social_settings: RwLock<Vec<SocialSettings>>,
    blog_posts: RwLock<Vec<BlogPost>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn remove_by_id<T>(rows: &mut Vec<T>, id: &Uuid, id_of: impl Fn(&T) -> Uuid, what: &str) -> Result<(), AppError> {
    let before = rows.len();
    rows.retain(|row| id_of(row) != *id);
    if rows.len() == before {
        return Err(AppError::NotFound(format!("{} not found", what)));
    }
    Ok(())
}

fn blog_order(a: &BlogPost, b: &BlogPost) -> Ordering {
    let by_published = match (a.published_at, b.published_at) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_published.then_with(|| b.created_at.cmp(&a.created_at))
}

// ───── About ────────────────────────────────────────────────────────

#[async_trait]
impl AboutRepository for MemoryStore {
    async fn create_about(&self, about: &AboutInsert) -> Result<About, AppError> {
        let row = About {
            id: Uuid::new_v4(),
            title: about.title.clone(),
            content: about.content.clone(),
            profile_image: about.profile_image.clone(),
            created_at: about.created_at,
            updated_at: about.updated_at,
        };
        self.about.write().push(row.clone());
        Ok(row)
    }

    async fn get_about_by_id(&self, id: &Uuid) -> Result<Option<About>, AppError> {
        Ok(self.about.read().iter().find(|a| a.id == *id).cloned())
    }

    async fn get_first_about(&self) -> Result<Option<About>, AppError> {
        Ok(self.about.read().iter().min_by_key(|a| (a.created_at, a.id)).cloned())
    }

    async fn list_about(&self) -> Result<Vec<About>, AppError> {
        let mut rows = self.about.read().clone();
        rows.sort_by_key(|a| (a.created_at, a.id));
        Ok(rows)
    }

    async fn update_about(&self, id: &Uuid, about: &AboutInsert) -> Result<About, AppError> {
        let mut rows = self.about.write();
        let row = rows
            .iter_mut()
            .find(|a| a.id == *id)
            .ok_or_else(|| AppError::NotFound("About section not found".into()))?;

        row.title = about.title.clone();
        row.content = about.content.clone();
        row.profile_image = about.profile_image.clone();
        row.updated_at = about.updated_at;
        Ok(row.clone())
    }

    async fn delete_about(&self, id: &Uuid) -> Result<(), AppError> {
        remove_by_id(&mut self.about.write(), id, |a| a.id, "About section")
    }
}

// ───── Skills ───────────────────────────────────────────────────────

#[async_trait]
impl SkillRepository for MemoryStore {
    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError> {
        let row = Skill {
            id: Uuid::new_v4(),
            name: skill.name.clone(),
            category: skill.category.clone(),
            years_of_experience: skill.years_of_experience,
            created_at: skill.created_at,
        };
        self.skills.write().push(row.clone());
        Ok(row)
    }

    async fn get_skill_by_id(&self, id: &Uuid) -> Result<Option<Skill>, AppError> {
        Ok(self.skills.read().iter().find(|s| s.id == *id).cloned())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let mut rows = self.skills.read().clone();
        rows.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| b.years_of_experience.cmp(&a.years_of_experience))
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(rows)
    }

    async fn update_skill(&self, id: &Uuid, skill: &SkillInsert) -> Result<Skill, AppError> {
        let mut rows = self.skills.write();
        let row = rows
            .iter_mut()
            .find(|s| s.id == *id)
            .ok_or_else(|| AppError::NotFound("Skill not found".into()))?;

        row.name = skill.name.clone();
        row.category = skill.category.clone();
        row.years_of_experience = skill.years_of_experience;
        Ok(row.clone())
    }

    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError> {
        remove_by_id(&mut self.skills.write(), id, |s| s.id, "Skill")
    }
}

// ───── Projects ─────────────────────────────────────────────────────

#[async_trait]
impl ProjectRepository for MemoryStore {
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        let row = Project {
            id: Uuid::new_v4(),
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone(),
            github_url: project.github_url.clone(),
            live_url: project.live_url.clone(),
            technologies: project.technologies.clone(),
            featured: project.featured,
            created_at: project.created_at,
            updated_at: project.updated_at,
        };
        self.projects.write().push(row.clone());
        Ok(row)
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError> {
        Ok(self.projects.read().iter().find(|p| p.id == *id).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let mut rows = self.projects.read().clone();
        rows.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn update_project(&self, id: &Uuid, project: &ProjectInsert) -> Result<Project, AppError> {
        let mut rows = self.projects.write();
        let row = rows
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

        row.title = project.title.clone();
        row.description = project.description.clone();
        row.image = project.image.clone();
        row.github_url = project.github_url.clone();
        row.live_url = project.live_url.clone();
        row.technologies = project.technologies.clone();
        row.featured = project.featured;
        row.updated_at = project.updated_at;
        Ok(row.clone())
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        remove_by_id(&mut self.projects.write(), id, |p| p.id, "Project")
    }
}

// ───── Social settings ──────────────────────────────────────────────

#[async_trait]
impl SocialSettingsRepository for MemoryStore {
    async fn create_social_settings(&self, settings: &SocialSettingsInsert) -> Result<SocialSettings, AppError> {
        let row = SocialSettings {
            id: Uuid::new_v4(),
            linkedin_url: settings.linkedin_url.clone(),
            twitter_url: settings.twitter_url.clone(),
            facebook_url: settings.facebook_url.clone(),
            github_url: settings.github_url.clone(),
            created_at: settings.created_at,
            updated_at: settings.updated_at,
        };
        self.social_settings.write().push(row.clone());
        Ok(row)
    }

    async fn get_social_settings_by_id(&self, id: &Uuid) -> Result<Option<SocialSettings>, AppError> {
        Ok(self.social_settings.read().iter().find(|s| s.id == *id).cloned())
    }

    async fn get_first_social_settings(&self) -> Result<Option<SocialSettings>, AppError> {
        Ok(self
            .social_settings
            .read()
            .iter()
            .min_by_key(|s| (s.created_at, s.id))
            .cloned())
    }

    async fn list_social_settings(&self) -> Result<Vec<SocialSettings>, AppError> {
        let mut rows = self.social_settings.read().clone();
        rows.sort_by_key(|s| (s.created_at, s.id));
        Ok(rows)
    }

    async fn update_social_settings(&self, id: &Uuid, settings: &SocialSettingsInsert) -> Result<SocialSettings, AppError> {
        let mut rows = self.social_settings.write();
        let row = rows
            .iter_mut()
            .find(|s| s.id == *id)
            .ok_or_else(|| AppError::NotFound("Social settings not found".into()))?;

        row.linkedin_url = settings.linkedin_url.clone();
        row.twitter_url = settings.twitter_url.clone();
        row.facebook_url = settings.facebook_url.clone();
        row.github_url = settings.github_url.clone();
        row.updated_at = settings.updated_at;
        Ok(row.clone())
    }

    async fn delete_social_settings(&self, id: &Uuid) -> Result<(), AppError> {
        remove_by_id(&mut self.social_settings.write(), id, |s| s.id, "Social settings")
    }
}

// ───── Blog posts ───────────────────────────────────────────────────

#[async_trait]
impl BlogPostRepository for MemoryStore {
    async fn create_blog_post(&self, post: &BlogPostDraft, now: DateTime<Utc>) -> Result<BlogPost, AppError> {
        let mut rows = self.blog_posts.write();
        if rows.iter().any(|p| p.slug == post.slug) {
            return Err(AppError::Conflict("Slug already exists".into()));
        }

        let row = BlogPost {
            id: Uuid::new_v4(),
            title: post.title.clone(),
            slug: post.slug.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            featured_image: post.featured_image.clone(),
            published: post.published,
            created_at: now,
            updated_at: now,
            published_at: post.published_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn get_blog_post_by_id(&self, id: &Uuid) -> Result<Option<BlogPost>, AppError> {
        Ok(self.blog_posts.read().iter().find(|p| p.id == *id).cloned())
    }

    async fn get_published_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        Ok(self
            .blog_posts
            .read()
            .iter()
            .find(|p| p.slug == slug && p.published)
            .cloned())
    }

    async fn list_blog_posts(&self, filter: &BlogPostFilter, limit: i64, offset: i64) -> Result<Vec<BlogPost>, AppError> {
        let mut rows: Vec<BlogPost> = self
            .blog_posts
            .read()
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        rows.sort_by(blog_order);

        let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        Ok(rows.into_iter().skip(offset).take(limit).collect())
    }

    async fn count_blog_posts(&self, filter: &BlogPostFilter) -> Result<i64, AppError> {
        let count = self.blog_posts.read().iter().filter(|p| filter.matches(p)).count();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn update_blog_post(&self, id: &Uuid, post: &BlogPostDraft, now: DateTime<Utc>) -> Result<BlogPost, AppError> {
        let mut rows = self.blog_posts.write();
        if rows.iter().any(|p| p.slug == post.slug && p.id != *id) {
            return Err(AppError::Conflict("Slug already exists".into()));
        }

        let row = rows
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| AppError::NotFound("Blog post not found".into()))?;

        row.title = post.title.clone();
        row.slug = post.slug.clone();
        row.content = post.content.clone();
        row.excerpt = post.excerpt.clone();
        row.featured_image = post.featured_image.clone();
        row.published = post.published;
        row.published_at = post.published_at;
        row.updated_at = now;
        Ok(row.clone())
    }

    async fn delete_blog_post(&self, id: &Uuid) -> Result<(), AppError> {
        remove_by_id(&mut self.blog_posts.write(), id, |p| p.id, "Blog post")
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    fn draft(slug: &str, published_at: Option<DateTime<Utc>>) -> BlogPostDraft {
        BlogPostDraft {
            title: slug.to_uppercase(),
            slug: slug.into(),
            content: "Body".into(),
            excerpt: String::new(),
            featured_image: None,
            published: published_at.is_some(),
            published_at,
        }
    }

    #[actix_rt::test]
    async fn duplicate_slug_is_a_conflict() {
        let store = MemoryStore::new();
        store.create_blog_post(&draft("hello", None), at(9)).await.unwrap();

        let err = store.create_blog_post(&draft("hello", None), at(10)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[actix_rt::test]
    async fn renaming_to_a_taken_slug_is_a_conflict() {
        let store = MemoryStore::new();
        store.create_blog_post(&draft("taken", None), at(9)).await.unwrap();
        let other = store.create_blog_post(&draft("other", None), at(9)).await.unwrap();

        let err = store
            .update_blog_post(&other.id, &draft("taken", None), at(10))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // Saving under its own slug is fine
        store.update_blog_post(&other.id, &draft("other", None), at(10)).await.unwrap();
    }

    #[actix_rt::test]
    async fn posts_are_ordered_by_publication_with_drafts_last() {
        let store = MemoryStore::new();
        store.create_blog_post(&draft("draft", None), at(12)).await.unwrap();
        store.create_blog_post(&draft("old", Some(at(8))), at(8)).await.unwrap();
        store.create_blog_post(&draft("new", Some(at(10))), at(10)).await.unwrap();

        let all = store.list_blog_posts(&BlogPostFilter::default(), 10, 0).await.unwrap();
        let slugs: Vec<&str> = all.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old", "draft"]);

        let published = store.list_blog_posts(&BlogPostFilter::published_only(), 1, 1).await.unwrap();
        assert_eq!(published[0].slug, "old");
        assert_eq!(store.count_blog_posts(&BlogPostFilter::published_only()).await.unwrap(), 2);
    }

    #[actix_rt::test]
    async fn first_social_settings_is_the_earliest() {
        let store = MemoryStore::new();
        let later = SocialSettingsInsert {
            linkedin_url: None,
            twitter_url: None,
            facebook_url: None,
            github_url: Some("https://github.com/late".into()),
            created_at: at(10),
            updated_at: at(10),
        };
        let earlier = SocialSettingsInsert {
            github_url: Some("https://github.com/early".into()),
            created_at: at(10) - Duration::hours(2),
            updated_at: at(10) - Duration::hours(2),
            ..later.clone()
        };
        store.create_social_settings(&later).await.unwrap();
        store.create_social_settings(&earlier).await.unwrap();

        let first = store.get_first_social_settings().await.unwrap().unwrap();
        assert_eq!(first.github_url.as_deref(), Some("https://github.com/early"));
    }

    #[actix_rt::test]
    async fn deleting_a_missing_row_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete_skill(&Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
