use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    entities::pagination::parse_page_param,
    errors::AppError,
    use_cases::extractors::SocialContext,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct BlogPageQuery {
    pub page: Option<String>,
}

#[instrument(skip(state, social))]
pub async fn home(
    state: web::Data<AppState>,
    social: SocialContext,
) -> Result<impl Responder, AppError> {
    let page = state.page_handler.home(social.0).await?;
    Ok(HttpResponse::Ok().json(page))
}

#[instrument(skip(state, social))]
pub async fn project_detail(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    social: SocialContext,
) -> Result<impl Responder, AppError> {
    let page = state.page_handler.project_detail(&project_id, social.0).await?;
    Ok(HttpResponse::Ok().json(page))
}

#[instrument(skip(state, social))]
pub async fn blog_list(
    query: web::Query<BlogPageQuery>,
    state: web::Data<AppState>,
    social: SocialContext,
) -> Result<impl Responder, AppError> {
    let page = parse_page_param(query.page.as_deref())?;

    let bundle = state.page_handler.blog_list(page, social.0).await?;
    Ok(HttpResponse::Ok().json(bundle))
}

#[instrument(skip(state, social))]
pub async fn blog_detail(
    slug: web::Path<String>,
    state: web::Data<AppState>,
    social: SocialContext,
) -> Result<impl Responder, AppError> {
    let page = state.page_handler.blog_detail(&slug, social.0).await?;
    Ok(HttpResponse::Ok().json(page))
}
