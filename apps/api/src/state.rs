use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::AuthProvider;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable auth service boundary. Default: `HttpAuthClient` against
    /// `AUTH_BASE_URL`; swapped for a stub in tests.
    pub auth: Arc<dyn AuthProvider>,
    pub config: Config,
}
