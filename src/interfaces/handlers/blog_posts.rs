use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    constants::ADMIN_MAX_PAGE_SIZE,
    entities::{
        blog_post::{BlogPostFilter, NewBlogPostRequest, UpdateBlogPostRequest},
        pagination::parse_page_param,
    },
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

const DEFAULT_ADMIN_PAGE_SIZE: u32 = 25;

#[derive(Debug, Deserialize)]
pub struct BlogPostListQuery {
    pub published: Option<bool>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<u32>,
}

#[instrument(skip(_claims, state, data))]
pub async fn create_blog_post(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewBlogPostRequest>
) -> Result<impl Responder, AppError> {
    let response = state.blog_handler
        .create_blog_post(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn list_blog_posts(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    query: web::Query<BlogPostListQuery>,
) -> Result<impl Responder, AppError> {
    let query = query.into_inner();

    let page = parse_page_param(query.page.as_deref())?;
    let per_page = query.per_page
        .unwrap_or(DEFAULT_ADMIN_PAGE_SIZE)
        .clamp(1, ADMIN_MAX_PAGE_SIZE);

    let filter = BlogPostFilter {
        published: query.published,
        search: query.search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
    };

    let posts = state.blog_handler
        .list_blog_posts(&filter, page, per_page)
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(_claims, state))]
pub async fn get_blog_post_by_id(
    _claims: AdminClaims,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.get_blog_post_by_id(&post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_blog_post(
    _claims: AdminClaims,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let updated_post = state.blog_handler
        .update_blog_post(&post_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated_post))
}

#[instrument(skip(_claims, state))]
pub async fn delete_blog_post(
    _claims: AdminClaims,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.blog_handler.delete_blog_post(&post_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
