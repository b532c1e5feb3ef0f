pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth_handlers;
use crate::document::handlers as document_handlers;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth boundary
        .route("/api/v1/auth/signup", post(auth_handlers::handle_sign_up))
        .route("/api/v1/auth/verify", post(auth_handlers::handle_verify))
        .route("/api/v1/auth/resend", post(auth_handlers::handle_resend))
        .route("/api/v1/auth/signin", post(auth_handlers::handle_sign_in))
        .route("/api/v1/auth/signout", post(auth_handlers::handle_sign_out))
        // Document engine
        .route("/api/v1/documents/edit", post(document_handlers::handle_edit))
        .route(
            "/api/v1/documents/render",
            post(document_handlers::handle_render),
        )
        .route(
            "/api/v1/templates",
            get(document_handlers::handle_list_templates),
        )
        .route(
            "/api/v1/suggestions",
            get(document_handlers::handle_suggestion),
        )
        // Resume store
        .route(
            "/api/v1/resumes",
            get(resume_handlers::handle_list_resumes).post(resume_handlers::handle_create_resume),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resume_handlers::handle_get_resume).put(resume_handlers::handle_save_resume),
        )
        .route(
            "/api/v1/resumes/:id/export",
            get(resume_handlers::handle_export_resume),
        )
        .with_state(state)
}
