use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::social_settings::SocialSettingsRequest, errors::AppError,
    use_cases::extractors::AdminClaims, AppState,
};

#[instrument(skip(_claims, state))]
pub async fn list_social_settings(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let settings = state.social_handler.list_social_settings().await?;
    Ok(HttpResponse::Ok().json(settings))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_social_settings(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<SocialSettingsRequest>,
) -> Result<impl Responder, AppError> {
    let settings = state.social_handler.create_social_settings(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(settings))
}

#[instrument(skip(_claims, state))]
pub async fn get_social_settings(
    _claims: AdminClaims,
    settings_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let settings = state.social_handler.get_social_settings(&settings_id).await?;
    Ok(HttpResponse::Ok().json(settings))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_social_settings(
    _claims: AdminClaims,
    settings_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<SocialSettingsRequest>,
) -> Result<impl Responder, AppError> {
    let settings = state
        .social_handler
        .update_social_settings(&settings_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(settings))
}

#[instrument(skip(_claims, state))]
pub async fn delete_social_settings(
    _claims: AdminClaims,
    settings_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.social_handler.delete_social_settings(&settings_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
