use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{self, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::blog_post::{BlogPost, BlogPostDraft, BlogPostFilter},
    errors::AppError,
    repositories::sqlx_repo::SqlxBlogPostRepo,
};

const SLUG_CONSTRAINT: &str = "blog_posts_slug_key";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogPostRepository: Sync + Send {
    /// Persists a draft that already went through the save rules.
    /// A taken slug is a `Conflict`.
    async fn create_blog_post(&self, post: &BlogPostDraft, now: DateTime<Utc>) -> Result<BlogPost, AppError>;
    async fn get_blog_post_by_id(&self, id: &Uuid) -> Result<Option<BlogPost>, AppError>;
    async fn get_published_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError>;
    /// Newest publication first, never-published posts last.
    async fn list_blog_posts(&self, filter: &BlogPostFilter, limit: i64, offset: i64) -> Result<Vec<BlogPost>, AppError>;
    async fn count_blog_posts(&self, filter: &BlogPostFilter) -> Result<i64, AppError>;
    async fn update_blog_post(&self, id: &Uuid, post: &BlogPostDraft, now: DateTime<Utc>) -> Result<BlogPost, AppError>;
    async fn delete_blog_post(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxBlogPostRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxBlogPostRepo { pool }
    }
}

fn map_slug_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.constraint() == Some(SLUG_CONSTRAINT) {
            return AppError::Conflict("Slug already exists".into());
        }
    }
    AppError::from(e)
}

/// ILIKE pattern matching `term` literally anywhere in the column.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &BlogPostFilter) {
    builder.push(" WHERE TRUE");

    if let Some(published) = filter.published {
        builder.push(" AND published = ").push_bind(published);
    }

    if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
        let pattern = contains_pattern(term);
        builder.push(" AND (title ILIKE ").push_bind(pattern.clone()).push(" ESCAPE '\\'");
        builder.push(" OR content ILIKE ").push_bind(pattern.clone()).push(" ESCAPE '\\'");
        builder.push(" OR excerpt ILIKE ").push_bind(pattern).push(" ESCAPE '\\'");
        builder.push(")");
    }
}

#[async_trait]
impl BlogPostRepository for SqlxBlogPostRepo {
    async fn create_blog_post(&self, post: &BlogPostDraft, now: DateTime<Utc>) -> Result<BlogPost, AppError> {
        let created = sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts (
                title, slug, content, excerpt, featured_image,
                published, published_at, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING *
            "#,
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(&post.featured_image)
        .bind(post.published)
        .bind(post.published_at)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        Ok(created)
    }

    async fn get_blog_post_by_id(&self, id: &Uuid) -> Result<Option<BlogPost>, AppError> {
        let post = sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(post)
    }

    async fn get_published_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT * FROM blog_posts
            WHERE slug = $1 AND published = TRUE
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn list_blog_posts(&self, filter: &BlogPostFilter, limit: i64, offset: i64) -> Result<Vec<BlogPost>, AppError> {
        let mut builder = QueryBuilder::new("SELECT * FROM blog_posts");
        push_filter(&mut builder, filter);

        builder.push(" ORDER BY published_at DESC NULLS LAST, created_at DESC");
        builder.push(" LIMIT ").push_bind(limit);
        builder.push(" OFFSET ").push_bind(offset);

        let posts = builder
            .build_query_as::<BlogPost>()
            .fetch_all(&self.pool)
            .await?;

        Ok(posts)
    }

    async fn count_blog_posts(&self, filter: &BlogPostFilter) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM blog_posts");
        push_filter(&mut builder, filter);

        let count: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn update_blog_post(&self, id: &Uuid, post: &BlogPostDraft, now: DateTime<Utc>) -> Result<BlogPost, AppError> {
        sqlx::query_as::<_, BlogPost>(
            r#"
            UPDATE blog_posts SET
                title = $1,
                slug = $2,
                content = $3,
                excerpt = $4,
                featured_image = $5,
                published = $6,
                published_at = $7,
                updated_at = $8
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(&post.featured_image)
        .bind(post.published)
        .bind(post.published_at)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_slug_conflict)?
        .ok_or_else(|| AppError::NotFound("Blog post not found".into()))
    }

    async fn delete_blog_post(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Blog post not found".into()));
        }

        Ok(())
    }
}
