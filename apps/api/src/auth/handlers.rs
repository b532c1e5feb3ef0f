use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::document::validation::{sanitize, validate_email, validate_password};
use crate::errors::AppError;
use crate::models::session::Session;
use crate::state::AppState;

const DISPLAY_NAME_MAX_LEN: usize = 100;
const CODE_LEN: usize = 6;

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Serialize)]
pub struct SignUpResponse {
    pub pending_verification: bool,
    pub email: String,
}

/// POST /api/v1/auth/signup
///
/// Input is validated locally before the remote call so the service is
/// never asked to reject what we can reject ourselves.
pub async fn handle_sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<Json<SignUpResponse>, AppError> {
    let full_name = validate_sign_up(&req)?;

    state
        .auth
        .sign_up(&req.email, &req.password, &full_name)
        .await
        .map_err(|e| AppError::Auth(e.user_message()))?;

    Ok(Json(SignUpResponse { pending_verification: true, email: req.email }))
}

#[derive(Deserialize)]
pub struct VerifyRequest {
    pub email: String,
    pub code: String,
}

/// POST /api/v1/auth/verify
pub async fn handle_verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<Session>, AppError> {
    validate_code(&req.code)?;

    let session = state
        .auth
        .verify_code(&req.email, &req.code)
        .await
        .map_err(|e| AppError::Auth(e.verify_message()))?;
    Ok(Json(session))
}

#[derive(Deserialize)]
pub struct ResendRequest {
    pub email: String,
}

/// POST /api/v1/auth/resend
pub async fn handle_resend(
    State(state): State<AppState>,
    Json(req): Json<ResendRequest>,
) -> Result<StatusCode, AppError> {
    state
        .auth
        .resend_code(&req.email)
        .await
        .map_err(|e| AppError::Auth(e.user_message()))?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/v1/auth/signin
pub async fn handle_sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<Session>, AppError> {
    if !validate_email(&req.email) {
        return Err(AppError::Validation("Please enter a valid email address".to_string()));
    }

    let session = state
        .auth
        .sign_in(&req.email, &req.password)
        .await
        .map_err(|e| AppError::Auth(e.user_message()))?;
    Ok(Json(session))
}

#[derive(Deserialize)]
pub struct SignOutRequest {
    pub access_token: String,
}

/// POST /api/v1/auth/signout
pub async fn handle_sign_out(
    State(state): State<AppState>,
    Json(req): Json<SignOutRequest>,
) -> Result<StatusCode, AppError> {
    state
        .auth
        .sign_out(&req.access_token)
        .await
        .map_err(|e| AppError::Auth(e.user_message()))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Local sign-up checks. Returns the sanitized display name.
fn validate_sign_up(req: &SignUpRequest) -> Result<String, AppError> {
    if !validate_email(&req.email) {
        return Err(AppError::Validation("Please enter a valid email address".to_string()));
    }

    let report = validate_password(&req.password);
    if !report.is_valid {
        return Err(AppError::Validation(format!(
            "Password requirements not met: {}",
            report.errors.join(", ")
        )));
    }

    let full_name = sanitize(&req.full_name, DISPLAY_NAME_MAX_LEN);
    if full_name.chars().count() < 2 {
        return Err(AppError::Validation(
            "Please enter your full name (at least 2 characters)".to_string(),
        ));
    }

    Ok(full_name)
}

fn validate_code(code: &str) -> Result<(), AppError> {
    if code.len() != CODE_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Please enter a valid 6-digit verification code".to_string(),
        ));
    }
    Ok(())
}
