use axum::{extract::Json, response::Html};
use serde::{Deserialize, Serialize};

use crate::document::completeness::completion_score;
use crate::document::editor::{apply, DocumentEdit};
use crate::document::model::ResumeDocument;
use crate::document::suggestions::random_suggestion;
use crate::errors::AppError;
use crate::render::{render, RenderMode};
use crate::template::{all_templates, Template, TemplateData};

#[derive(Deserialize)]
pub struct EditRequest {
    pub document: ResumeDocument,
    pub edit: DocumentEdit,
}

#[derive(Serialize, Debug)]
pub struct EditResponse {
    pub document: ResumeDocument,
    pub completion: u8,
}

/// POST /api/v1/documents/edit
///
/// The stateless reducer endpoint: applies one validated edit and returns
/// the next document value. A rejected edit is a 400 with the field-level
/// message; the caller keeps its current document.
pub async fn handle_edit(Json(req): Json<EditRequest>) -> Result<Json<EditResponse>, AppError> {
    let document = apply(&req.document, req.edit).map_err(|e| AppError::Validation(e.to_string()))?;
    let completion = completion_score(&document);
    Ok(Json(EditResponse { document, completion }))
}

#[derive(Deserialize)]
pub struct RenderRequest {
    pub document: ResumeDocument,
    pub template_data: Option<TemplateData>,
    #[serde(default)]
    pub mode: RenderMode,
}

/// POST /api/v1/documents/render
pub async fn handle_render(Json(req): Json<RenderRequest>) -> Html<String> {
    Html(render(&req.document, req.template_data.as_ref(), req.mode))
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<Template>> {
    Json(all_templates())
}

#[derive(Serialize)]
pub struct SuggestionResponse {
    pub suggestion: &'static str,
}

/// GET /api/v1/suggestions
pub async fn handle_suggestion() -> Json<SuggestionResponse> {
    Json(SuggestionResponse { suggestion: random_suggestion() })
}
