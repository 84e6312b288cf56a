use actix_web::{web, HttpResponse, Responder};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::instrument;

use crate::{
    errors::AppError,
    forms::{EntityForm, ToolbarAction, MARKDOWN_TOOLBAR},
    use_cases::extractors::AdminClaims,
};

#[derive(Debug, Serialize)]
pub struct FormDeclaration {
    #[serde(flatten)]
    pub form: EntityForm,
    /// Empty markdown editors keyed by field name
    pub widgets_html: IndexMap<&'static str, String>,
    pub markdown_toolbar: &'static [ToolbarAction],
}

#[instrument(skip(_claims))]
pub async fn get_form(
    _claims: AdminClaims,
    entity: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let form = EntityForm::for_entity(&entity)
        .ok_or_else(|| AppError::NotFound(format!("No admin form for '{}'", entity)))?;

    let widgets_html = form
        .markdown_fields()
        .map(|(field, area)| (field.name, area.render(field.name, None)))
        .collect();

    let markdown_toolbar: &'static [ToolbarAction] = if form.markdown_fields().next().is_some() {
        MARKDOWN_TOOLBAR
    } else {
        &[]
    };

    Ok(HttpResponse::Ok().json(FormDeclaration {
        form,
        widgets_html,
        markdown_toolbar,
    }))
}
