use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    entities::{
        about::About,
        blog_post::{BlogPost, BlogPostSummary},
        pagination::{Paginated, Pagination},
        project::{Project, ProjectSummary},
        skill::{group_skills_by_category, Skill},
        social_settings::SocialSettings,
    },
    errors::AppError,
    repositories::{
        about::AboutRepository, blog_post::BlogPostRepository, project::ProjectRepository,
        skill::SkillRepository,
    },
    use_cases::blog::BlogPostHandler,
    utils::{markdown::safe_markdown_to_html, valid_uuid::uuid_or_not_found},
};

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub about: Option<About>,
    pub about_html: Option<String>,
    pub skills_by_category: IndexMap<String, Vec<Skill>>,
    pub projects: Vec<ProjectSummary>,
    pub social_settings: Option<SocialSettings>,
}

#[derive(Debug, Serialize)]
pub struct ProjectPage {
    pub project: Project,
    pub description_html: String,
    pub technologies_list: Vec<String>,
    pub social_settings: Option<SocialSettings>,
}

#[derive(Debug, Serialize)]
pub struct BlogListPage {
    pub title: &'static str,
    pub posts: Vec<BlogPostSummary>,
    pub pagination: Pagination,
    pub social_settings: Option<SocialSettings>,
}

#[derive(Debug, Serialize)]
pub struct BlogPostPage {
    pub post: BlogPost,
    pub post_html: String,
    pub social_settings: Option<SocialSettings>,
}

/// Assembles the public page bundles. Markdown is rendered on every call.
pub struct PageHandler {
    pub about_repo: Arc<dyn AboutRepository>,
    pub skill_repo: Arc<dyn SkillRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub blog: BlogPostHandler<dyn BlogPostRepository>,
}

impl PageHandler {
    pub fn new(
        about_repo: Arc<dyn AboutRepository>,
        skill_repo: Arc<dyn SkillRepository>,
        project_repo: Arc<dyn ProjectRepository>,
        blog_post_repo: Arc<dyn BlogPostRepository>,
    ) -> Self {
        PageHandler {
            about_repo,
            skill_repo,
            project_repo,
            blog: BlogPostHandler::new(blog_post_repo),
        }
    }

    pub async fn home(&self, social_settings: Option<SocialSettings>) -> Result<HomePage, AppError> {
        let about = self.about_repo.get_first_about().await?;
        let about_html = about.as_ref().map(|a| safe_markdown_to_html(&a.content));

        let skills = self.skill_repo.list_skills().await?;
        let projects = self.project_repo.list_projects().await?;

        Ok(HomePage {
            about,
            about_html,
            skills_by_category: group_skills_by_category(skills),
            projects: projects.into_iter().map(ProjectSummary::from).collect(),
            social_settings,
        })
    }

    /// Unknown and malformed ids are both a missing page
    pub async fn project_detail(
        &self,
        id: &str,
        social_settings: Option<SocialSettings>,
    ) -> Result<ProjectPage, AppError> {
        let project_id = uuid_or_not_found(id, "Project")?;

        let project = self
            .project_repo
            .get_project_by_id(&project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        Ok(ProjectPage {
            description_html: safe_markdown_to_html(&project.description),
            technologies_list: project.technologies_list(),
            project,
            social_settings,
        })
    }

    pub async fn blog_list(
        &self,
        page: u32,
        social_settings: Option<SocialSettings>,
    ) -> Result<BlogListPage, AppError> {
        let Paginated { items, pagination } = self.blog.published_page(page).await?;

        Ok(BlogListPage {
            title: "Blog",
            posts: items,
            pagination,
            social_settings,
        })
    }

    pub async fn blog_detail(
        &self,
        slug: &str,
        social_settings: Option<SocialSettings>,
    ) -> Result<BlogPostPage, AppError> {
        let post = self.blog.published_post_by_slug(slug).await?;

        Ok(BlogPostPage {
            post_html: safe_markdown_to_html(&post.content),
            post,
            social_settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::{
        entities::{about::AboutInsert, blog_post::BlogPostDraft, project::ProjectInsert, skill::SkillInsert},
        repositories::memory::MemoryStore,
    };

    fn pages(store: &Arc<MemoryStore>) -> PageHandler {
        PageHandler::new(store.clone(), store.clone(), store.clone(), store.clone())
    }

    #[actix_rt::test]
    async fn empty_site_renders_home_with_nulls() {
        let store = Arc::new(MemoryStore::new());
        let home = pages(&store).home(None).await.unwrap();

        assert!(home.about.is_none());
        assert!(home.about_html.is_none());
        assert!(home.skills_by_category.is_empty());
        assert!(home.projects.is_empty());
    }

    #[actix_rt::test]
    async fn home_renders_about_and_groups_skills() {
        let store = Arc::new(MemoryStore::new());
        let now = Utc::now();
        store
            .create_about(&AboutInsert {
                title: "About Me".into(),
                content: "I write **Rust**".into(),
                profile_image: None,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();
        for (name, category, years) in [("Rust", "Languages", 4), ("Docker", "Tools", 5), ("Python", "Languages", 8)] {
            store
                .create_skill(&SkillInsert {
                    name: name.into(),
                    category: category.into(),
                    years_of_experience: years,
                    created_at: now,
                })
                .await
                .unwrap();
        }

        let home = pages(&store).home(None).await.unwrap();

        assert_eq!(home.about_html.as_deref().map(|h| h.contains("<strong>Rust</strong>")), Some(true));
        let languages: Vec<&str> = home.skills_by_category["Languages"].iter().map(|s| s.name.as_str()).collect();
        assert_eq!(languages, vec!["Python", "Rust"]);
    }

    #[actix_rt::test]
    async fn featured_projects_come_first() {
        let store = Arc::new(MemoryStore::new());
        let now = Utc::now();
        for (title, featured, age) in [("Old featured", true, 3), ("Newest", false, 0), ("New featured", true, 1)] {
            let created = now - Duration::days(age);
            store
                .create_project(&ProjectInsert {
                    title: title.into(),
                    description: "Desc".into(),
                    image: None,
                    github_url: None,
                    live_url: None,
                    technologies: "Rust".into(),
                    featured,
                    created_at: created,
                    updated_at: created,
                })
                .await
                .unwrap();
        }

        let home = pages(&store).home(None).await.unwrap();
        let titles: Vec<&str> = home.projects.iter().map(|p| p.project.title.as_str()).collect();
        assert_eq!(titles, vec!["New featured", "Old featured", "Newest"]);
    }

    #[actix_rt::test]
    async fn malformed_project_id_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let err = pages(&store).project_detail("42", None).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_rt::test]
    async fn blog_detail_renders_published_posts_only() {
        let store = Arc::new(MemoryStore::new());
        let now = Utc::now();
        let mut draft = BlogPostDraft {
            title: "Hidden".into(),
            slug: "hidden".into(),
            content: "# Secret".into(),
            excerpt: String::new(),
            featured_image: None,
            published: false,
            published_at: None,
        };
        store.create_blog_post(&draft, now).await.unwrap();

        draft.slug = "visible".into();
        draft.published = true;
        draft.published_at = Some(now);
        store.create_blog_post(&draft, now).await.unwrap();

        let handler = pages(&store);
        assert!(matches!(handler.blog_detail("hidden", None).await, Err(AppError::NotFound(_))));

        let page = handler.blog_detail("visible", None).await.unwrap();
        assert!(page.post_html.contains("<h1>Secret</h1>"), "{}", page.post_html);
    }

    #[actix_rt::test]
    async fn empty_blog_has_a_first_page() {
        let store = Arc::new(MemoryStore::new());
        let page = pages(&store).blog_list(1, None).await.unwrap();

        assert_eq!(page.title, "Blog");
        assert!(page.posts.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
    }
}
