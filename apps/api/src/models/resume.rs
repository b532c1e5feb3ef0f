use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::document::model::ResumeDocument;

/// A persisted resume. Document sections live in JSONB columns so the row
/// mirrors what the editor works with; `updated_at` is server-assigned and
/// orders "most recent first" listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub personal_details: Value,
    pub education: Value,
    pub experience: Value,
    pub projects: Value,
    pub skills: Value,
    pub selected_template_id: Option<String>,
    pub custom_template_data: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRow {
    /// Rebuilds the document from the row's JSONB columns.
    ///
    /// Hydration is tolerant: a section that fails to deserialize falls
    /// back to its empty value instead of poisoning the whole document,
    /// so one bad column never locks a user out of their resume.
    pub fn document(&self) -> ResumeDocument {
        ResumeDocument {
            personal_details: section(&self.personal_details),
            education: section(&self.education),
            experience: section(&self.experience),
            projects: section(&self.projects),
            skills: section(&self.skills),
        }
    }
}

fn section<T: serde::de::DeserializeOwned + Default>(value: &Value) -> T {
    serde_json::from_value(value.clone()).unwrap_or_default()
}
