//! Resume row store. Owner-scoped queries; `updated_at` is assigned by the
//! database so listing order never depends on client clocks.

use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::document::model::ResumeDocument;
use crate::models::resume::ResumeRow;

/// Most recently saved first.
pub async fn list_resumes(pool: &PgPool, user_id: Uuid) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Inserts a fresh row carrying an empty document.
pub async fn create_resume(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
) -> Result<ResumeRow, sqlx::Error> {
    let empty = ResumeDocument::default();
    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes
            (id, user_id, title, personal_details, education, experience, projects, skills)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(title)
    .bind(section_value(&empty.personal_details))
    .bind(section_value(&empty.education))
    .bind(section_value(&empty.experience))
    .bind(section_value(&empty.projects))
    .bind(section_value(&empty.skills))
    .fetch_one(pool)
    .await?;

    info!("Created resume {} for user {user_id}", row.id);
    Ok(row)
}

pub async fn get_resume(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// The explicit save: writes the whole document plus the template
/// selection in one statement. Returns `None` when the row does not exist
/// or belongs to someone else.
pub async fn update_resume(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    document: &ResumeDocument,
    selected_template_id: Option<&str>,
    custom_template_data: Option<&Value>,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes
        SET personal_details = $3,
            education = $4,
            experience = $5,
            projects = $6,
            skills = $7,
            selected_template_id = $8,
            custom_template_data = $9,
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(section_value(&document.personal_details))
    .bind(section_value(&document.education))
    .bind(section_value(&document.experience))
    .bind(section_value(&document.projects))
    .bind(section_value(&document.skills))
    .bind(selected_template_id)
    .bind(custom_template_data)
    .fetch_optional(pool)
    .await?;

    if let Some(row) = &row {
        info!("Saved resume {} for user {user_id}", row.id);
    }
    Ok(row)
}

fn section_value<T: serde::Serialize>(section: &T) -> Value {
    serde_json::to_value(section).unwrap_or(Value::Null)
}
