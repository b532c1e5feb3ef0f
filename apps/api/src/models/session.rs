use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated session handed back by the auth service after sign-in
/// or successful code verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub access_token: String,
}
