use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::skill::SkillRequest, errors::AppError, use_cases::extractors::AdminClaims, AppState};

#[instrument(skip(_claims, state))]
pub async fn list_skills(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skills = state.skill_handler.list_skills().await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_skill(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<SkillRequest>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler.create_skill(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(skill))
}

#[instrument(skip(_claims, state))]
pub async fn get_skill(
    _claims: AdminClaims,
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler.get_skill(&skill_id).await?;
    Ok(HttpResponse::Ok().json(skill))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_skill(
    _claims: AdminClaims,
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<SkillRequest>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler.update_skill(&skill_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(skill))
}

#[instrument(skip(_claims, state))]
pub async fn delete_skill(
    _claims: AdminClaims,
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.skill_handler.delete_skill(&skill_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
