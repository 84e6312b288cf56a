use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    constants::BLOG_PAGE_SIZE,
    entities::{
        blog_post::{
            preview_path, BlogPost, BlogPostCreatedResponse, BlogPostFilter, BlogPostSummary,
            NewBlogPostRequest, UpdateBlogPostRequest,
        },
        pagination::{Paginated, Pagination},
    },
    errors::AppError,
    repositories::blog_post::BlogPostRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct BlogPostHandler<R>
where
    R: BlogPostRepository + ?Sized,
{
    pub blog_post_repo: Arc<R>,
}

impl<R> BlogPostHandler<R>
where
    R: BlogPostRepository + ?Sized,
{
    pub fn new(blog_post_repo: Arc<R>) -> Self {
        BlogPostHandler { blog_post_repo }
    }

    /// Creates a new blog post, deriving the slug and stamping the
    /// publication time where needed
    pub async fn create_blog_post(&self, request: NewBlogPostRequest) -> Result<BlogPostCreatedResponse, AppError> {
        request.validate()?;

        let now = Utc::now();
        let mut draft = request.into_draft();
        draft.apply_save_rules(now);
        draft.validate()?;

        let post = self.blog_post_repo.create_blog_post(&draft, now).await?;

        tracing::info!(post_id = %post.id, slug = %post.slug, "Blog post created");

        Ok(BlogPostCreatedResponse {
            id: post.id,
            preview_url: preview_path(&post.slug),
            slug: post.slug,
            published_at: post.published_at,
        })
    }

    /// Retrieves a blog post by its ID, published or not
    pub async fn get_blog_post_by_id(&self, post_id: &str) -> Result<BlogPost, AppError> {
        let valid_id = valid_uuid(post_id)?;

        self.blog_post_repo
            .get_blog_post_by_id(&valid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))
    }

    /// Admin listing with optional filters
    pub async fn list_blog_posts(
        &self,
        filter: &BlogPostFilter,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<BlogPost>, AppError> {
        let total = self.blog_post_repo.count_blog_posts(filter).await?;
        let pagination = Pagination::resolve(page, per_page, total)?;

        let items = self
            .blog_post_repo
            .list_blog_posts(filter, i64::from(pagination.per_page), pagination.offset())
            .await?;

        Ok(Paginated { items, pagination })
    }

    /// One page of the public blog list
    pub async fn published_page(&self, page: u32) -> Result<Paginated<BlogPostSummary>, AppError> {
        let Paginated { items, pagination } = self
            .list_blog_posts(&BlogPostFilter::published_only(), page, BLOG_PAGE_SIZE)
            .await?;

        Ok(Paginated {
            items: items.into_iter().map(BlogPostSummary::from).collect(),
            pagination,
        })
    }

    /// A published post by slug; drafts are not found
    pub async fn published_post_by_slug(&self, slug: &str) -> Result<BlogPost, AppError> {
        self.blog_post_repo
            .get_published_blog_post_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))
    }

    /// Applies a partial update
    pub async fn update_blog_post(&self, id: &str, request: UpdateBlogPostRequest) -> Result<BlogPost, AppError> {
        request.validate()?;

        let current = self.get_blog_post_by_id(id).await?;

        let now = Utc::now();
        let mut draft = request.merge_into(&current);
        draft.apply_save_rules(now);
        draft.validate()?;

        self.blog_post_repo.update_blog_post(&current.id, &draft, now).await
    }

    /// Deletes a blog post by its ID
    pub async fn delete_blog_post(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        self.blog_post_repo.delete_blog_post(&valid_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone};
    use uuid::Uuid;

    use super::*;
    use crate::{
        entities::{blog_post::BlogPostDraft, option_fields::OptionField},
        repositories::blog_post::MockBlogPostRepository,
    };

    fn stored_from(draft: &BlogPostDraft, now: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            slug: draft.slug.clone(),
            content: draft.content.clone(),
            excerpt: draft.excerpt.clone(),
            featured_image: draft.featured_image.clone(),
            published: draft.published,
            created_at: now,
            updated_at: now,
            published_at: draft.published_at,
        }
    }

    fn new_post(title: &str, published: bool) -> NewBlogPostRequest {
        NewBlogPostRequest {
            title: title.into(),
            slug: None,
            content: "Body".into(),
            excerpt: None,
            featured_image: None,
            published,
        }
    }

    #[actix_rt::test]
    async fn create_derives_slug_and_stamps_publication() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_create_blog_post()
            .withf(|draft, now| draft.slug == "hello-world" && draft.published_at == Some(*now))
            .times(1)
            .returning(|draft, now| Ok(stored_from(draft, now)));

        let handler = BlogPostHandler::new(Arc::new(repo));
        let created = handler.create_blog_post(new_post("Hello World", true)).await.unwrap();

        assert_eq!(created.slug, "hello-world");
        assert_eq!(created.preview_url, "/blog/hello-world");
        assert!(created.published_at.is_some());
    }

    #[actix_rt::test]
    async fn slug_conflict_is_passed_through() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_create_blog_post()
            .returning(|_, _| Err(AppError::Conflict("Slug already exists".into())));

        let handler = BlogPostHandler::new(Arc::new(repo));
        let err = handler.create_blog_post(new_post("Taken", false)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[actix_rt::test]
    async fn overlong_derived_slug_is_a_validation_error() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_create_blog_post().never();

        let handler = BlogPostHandler::new(Arc::new(repo));
        let err = handler
            .create_blog_post(new_post(&"long title ".repeat(10), false))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[actix_rt::test]
    async fn unpublishing_keeps_published_at() {
        let first_published = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let current = BlogPost {
            id: Uuid::new_v4(),
            title: "Launch".into(),
            slug: "launch".into(),
            content: "Body".into(),
            excerpt: String::new(),
            featured_image: None,
            published: true,
            created_at: first_published,
            updated_at: first_published,
            published_at: Some(first_published),
        };
        let id = current.id;

        let mut repo = MockBlogPostRepository::new();
        let found = current.clone();
        repo.expect_get_blog_post_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        repo.expect_update_blog_post()
            .withf(move |update_id, draft, _| {
                *update_id == id && !draft.published && draft.published_at == Some(first_published)
            })
            .times(1)
            .returning(move |_, draft, now| {
                let mut post = stored_from(draft, now);
                post.id = id;
                Ok(post)
            });

        let handler = BlogPostHandler::new(Arc::new(repo));
        let patch = UpdateBlogPostRequest {
            published: OptionField::SetToValue(false),
            ..Default::default()
        };
        let updated = handler.update_blog_post(&id.to_string(), patch).await.unwrap();
        assert_eq!(updated.published_at, Some(first_published));
    }

    #[actix_rt::test]
    async fn page_past_the_end_is_not_found() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_count_blog_posts().returning(|_| Ok(11));
        repo.expect_list_blog_posts().never();

        let handler = BlogPostHandler::new(Arc::new(repo));
        let err = handler.published_page(3).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_rt::test]
    async fn second_page_uses_offset_ten() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_count_blog_posts()
            .withf(|filter| filter.published == Some(true))
            .returning(|_| Ok(11));
        repo.expect_list_blog_posts()
            .withf(|_, limit, offset| *limit == 10 && *offset == 10)
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));

        let handler = BlogPostHandler::new(Arc::new(repo));
        let page = handler.published_page(2).await.unwrap();
        assert!(page.pagination.has_previous);
        assert!(!page.pagination.has_next);
    }

    #[actix_rt::test]
    async fn draft_is_hidden_from_slug_lookup() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_get_published_blog_post_by_slug()
            .returning(|_| Ok(None));

        let handler = BlogPostHandler::new(Arc::new(repo));
        let err = handler.published_post_by_slug("draft").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
