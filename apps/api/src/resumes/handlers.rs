use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::document::completeness::completion_score;
use crate::document::model::ResumeDocument;
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::render::{render, RenderMode};
use crate::resumes::repo;
use crate::state::AppState;
use crate::template::{find_template, TemplateData};

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeRow>,
}

#[derive(Deserialize)]
pub struct CreateResumeRequest {
    pub user_id: Uuid,
    pub title: Option<String>,
}

#[derive(Serialize)]
pub struct ResumeResponse {
    pub resume: ResumeRow,
    pub document: ResumeDocument,
    pub completion: u8,
}

#[derive(Deserialize)]
pub struct SaveResumeRequest {
    pub user_id: Uuid,
    pub document: ResumeDocument,
    pub selected_template_id: Option<String>,
    pub custom_template_data: Option<Value>,
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = repo::list_resumes(&state.db, params.user_id).await?;
    Ok(Json(ResumeListResponse { resumes }))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(req): Json<CreateResumeRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    let title = req.title.as_deref().unwrap_or("My Resume");
    let resume = repo::create_resume(&state.db, req.user_id, title).await?;
    Ok(Json(resume_response(resume)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume = fetch_owned(&state, id, params.user_id).await?;
    Ok(Json(resume_response(resume)))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SaveResumeRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume = repo::update_resume(
        &state.db,
        id,
        req.user_id,
        &req.document,
        req.selected_template_id.as_deref(),
        req.custom_template_data.as_ref(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(resume_response(resume)))
}

/// GET /api/v1/resumes/:id/export
///
/// The printable document: the same render pipeline as the preview, in
/// print mode, against the persisted row.
pub async fn handle_export_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Html<String>, AppError> {
    let resume = fetch_owned(&state, id, params.user_id).await?;
    let document = resume.document();
    let template_data = resolve_template_data(&resume);
    Ok(Html(render(&document, template_data.as_ref(), RenderMode::Print)))
}

async fn fetch_owned(state: &AppState, id: Uuid, user_id: Uuid) -> Result<ResumeRow, AppError> {
    repo::get_resume(&state.db, id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

fn resume_response(resume: ResumeRow) -> ResumeResponse {
    let document = resume.document();
    let completion = completion_score(&document);
    ResumeResponse { resume, document, completion }
}

/// Template payload for a row: the saved custom data when it parses, else
/// the catalog entry for the saved id, else nothing (default rendering).
fn resolve_template_data(resume: &ResumeRow) -> Option<TemplateData> {
    if let Some(data) = &resume.custom_template_data {
        if let Ok(parsed) = serde_json::from_value::<TemplateData>(data.clone()) {
            return Some(parsed);
        }
    }
    resume
        .selected_template_id
        .as_deref()
        .and_then(find_template)
        .map(|t| t.data)
}
