use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::about::AboutRequest, errors::AppError, use_cases::extractors::AdminClaims, AppState};

#[instrument(skip(_claims, state))]
pub async fn list_about(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let sections = state.about_handler.list_about().await?;
    Ok(HttpResponse::Ok().json(sections))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_about(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<AboutRequest>,
) -> Result<impl Responder, AppError> {
    let about = state.about_handler.create_about(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(about))
}

#[instrument(skip(_claims, state))]
pub async fn get_about(
    _claims: AdminClaims,
    about_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let about = state.about_handler.get_about(&about_id).await?;
    Ok(HttpResponse::Ok().json(about))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_about(
    _claims: AdminClaims,
    about_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<AboutRequest>,
) -> Result<impl Responder, AppError> {
    let about = state.about_handler.update_about(&about_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(about))
}

#[instrument(skip(_claims, state))]
pub async fn delete_about(
    _claims: AdminClaims,
    about_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.about_handler.delete_about(&about_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
