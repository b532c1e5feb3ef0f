//! The document reducer: every accepted edit produces a new
//! `ResumeDocument` value; rejected edits return a field-level error and
//! leave the input untouched. List records are addressed by their stable
//! generated id, never by position.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::document::model::{
    EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument, SkillCategory,
};
use crate::document::validation::{sanitize, validate_email, validate_text_length, validate_url};

/// Max characters for a single skill entry.
pub const SKILL_MAX_LEN: usize = 50;

/// Why an edit was rejected. Never fatal — the caller surfaces the message
/// and keeps the previous document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("email must be a valid address")]
    InvalidEmail,

    #[error("{field} must be a valid http(s) URL")]
    InvalidUrl { field: &'static str },

    #[error("skill must not be empty")]
    EmptySkill,

    #[error("skill \"{value}\" is already in {category}")]
    DuplicateSkill { value: String, category: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Location,
    Linkedin,
    Portfolio,
    Summary,
}

impl PersonalField {
    pub fn max_len(&self) -> usize {
        match self {
            PersonalField::FullName => 100,
            PersonalField::Email => 320,
            PersonalField::Phone => 20,
            PersonalField::Location => 100,
            PersonalField::Linkedin => 500,
            PersonalField::Portfolio => 500,
            PersonalField::Summary => 1000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalField::FullName => "full_name",
            PersonalField::Email => "email",
            PersonalField::Phone => "phone",
            PersonalField::Location => "location",
            PersonalField::Linkedin => "linkedin",
            PersonalField::Portfolio => "portfolio",
            PersonalField::Summary => "summary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree,
    Institution,
    Year,
    Gpa,
}

impl EducationField {
    pub fn max_len(&self) -> usize {
        match self {
            EducationField::Degree | EducationField::Institution => 200,
            EducationField::Year | EducationField::Gpa => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationField::Degree => "degree",
            EducationField::Institution => "institution",
            EducationField::Year => "year",
            EducationField::Gpa => "gpa",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Title,
    Company,
    Duration,
    Description,
    Location,
}

impl ExperienceField {
    pub fn max_len(&self) -> usize {
        match self {
            ExperienceField::Title | ExperienceField::Company | ExperienceField::Location => 100,
            ExperienceField::Duration => 50,
            ExperienceField::Description => 2000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceField::Title => "title",
            ExperienceField::Company => "company",
            ExperienceField::Duration => "duration",
            ExperienceField::Description => "description",
            ExperienceField::Location => "location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Name,
    Description,
    Technologies,
    Link,
}

impl ProjectField {
    pub fn max_len(&self) -> usize {
        match self {
            ProjectField::Name => 100,
            ProjectField::Description => 1000,
            ProjectField::Technologies => 200,
            ProjectField::Link => 500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectField::Name => "name",
            ProjectField::Description => "description",
            ProjectField::Technologies => "technologies",
            ProjectField::Link => "link",
        }
    }
}

/// One edit operation against the document. Tagged so it can travel over
/// the edit endpoint as `{"op": "...", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DocumentEdit {
    SetPersonalField { field: PersonalField, value: String },
    AddEducation,
    RemoveEducation { id: Uuid },
    UpdateEducation { id: Uuid, field: EducationField, value: String },
    AddExperience,
    RemoveExperience { id: Uuid },
    UpdateExperience { id: Uuid, field: ExperienceField, value: String },
    AddProject,
    RemoveProject { id: Uuid },
    UpdateProject { id: Uuid, field: ProjectField, value: String },
    AddSkill { category: SkillCategory, value: String },
    RemoveSkill { category: SkillCategory, value: String },
}

/// Applies one edit, returning the next document value.
///
/// Updates against an id that is no longer in the list succeed as a no-op
/// (the record was removed under the editor; there is nothing to report).
pub fn apply(doc: &ResumeDocument, edit: DocumentEdit) -> Result<ResumeDocument, EditError> {
    let mut next = doc.clone();

    match edit {
        DocumentEdit::SetPersonalField { field, value } => {
            let value = accept_text(field.as_str(), &value, field.max_len())?;
            match field {
                PersonalField::Email => {
                    if !value.is_empty() && !validate_email(&value) {
                        return Err(EditError::InvalidEmail);
                    }
                }
                PersonalField::Linkedin | PersonalField::Portfolio => {
                    if !validate_url(&value) {
                        return Err(EditError::InvalidUrl { field: field.as_str() });
                    }
                }
                _ => {}
            }
            let details = &mut next.personal_details;
            match field {
                PersonalField::FullName => details.full_name = value,
                PersonalField::Email => details.email = value,
                PersonalField::Phone => details.phone = value,
                PersonalField::Location => details.location = value,
                PersonalField::Linkedin => details.linkedin = value,
                PersonalField::Portfolio => details.portfolio = value,
                PersonalField::Summary => details.summary = value,
            }
        }

        DocumentEdit::AddEducation => next.education.push(EducationEntry::empty()),
        DocumentEdit::RemoveEducation { id } => next.education.retain(|e| e.id != id),
        DocumentEdit::UpdateEducation { id, field, value } => {
            let value = accept_text(field.as_str(), &value, field.max_len())?;
            if let Some(entry) = next.education.iter_mut().find(|e| e.id == id) {
                match field {
                    EducationField::Degree => entry.degree = value,
                    EducationField::Institution => entry.institution = value,
                    EducationField::Year => entry.year = value,
                    EducationField::Gpa => entry.gpa = non_empty(value),
                }
            }
        }

        DocumentEdit::AddExperience => next.experience.push(ExperienceEntry::empty()),
        DocumentEdit::RemoveExperience { id } => next.experience.retain(|e| e.id != id),
        DocumentEdit::UpdateExperience { id, field, value } => {
            let value = accept_text(field.as_str(), &value, field.max_len())?;
            if let Some(entry) = next.experience.iter_mut().find(|e| e.id == id) {
                match field {
                    ExperienceField::Title => entry.title = value,
                    ExperienceField::Company => entry.company = value,
                    ExperienceField::Duration => entry.duration = value,
                    ExperienceField::Description => entry.description = value,
                    ExperienceField::Location => entry.location = value,
                }
            }
        }

        DocumentEdit::AddProject => next.projects.push(ProjectEntry::empty()),
        DocumentEdit::RemoveProject { id } => next.projects.retain(|p| p.id != id),
        DocumentEdit::UpdateProject { id, field, value } => {
            let value = accept_text(field.as_str(), &value, field.max_len())?;
            if field == ProjectField::Link && !validate_url(&value) {
                return Err(EditError::InvalidUrl { field: field.as_str() });
            }
            if let Some(entry) = next.projects.iter_mut().find(|p| p.id == id) {
                match field {
                    ProjectField::Name => entry.name = value,
                    ProjectField::Description => entry.description = value,
                    ProjectField::Technologies => entry.technologies = value,
                    ProjectField::Link => entry.link = non_empty(value),
                }
            }
        }

        DocumentEdit::AddSkill { category, value } => {
            if !validate_text_length(&value, SKILL_MAX_LEN) {
                return Err(EditError::TooLong { field: "skill", max: SKILL_MAX_LEN });
            }
            let value = sanitize(&value, SKILL_MAX_LEN);
            if value.is_empty() {
                return Err(EditError::EmptySkill);
            }
            let set = next.skills.category_mut(category);
            if set.iter().any(|s| s == &value) {
                return Err(EditError::DuplicateSkill { value, category: category.as_str() });
            }
            set.push(value);
        }
        DocumentEdit::RemoveSkill { category, value } => {
            next.skills.category_mut(category).retain(|s| s != &value);
        }
    }

    Ok(next)
}

/// Length-gates the raw value, then applies the uniform sanitizer.
/// The cap is checked before truncation so oversized input is rejected
/// loudly instead of silently clipped.
fn accept_text(field: &'static str, raw: &str, max_len: usize) -> Result<String, EditError> {
    if !validate_text_length(raw, max_len) {
        return Err(EditError::TooLong { field, max: max_len });
    }
    Ok(sanitize(raw, max_len))
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::model::SkillCategory::{Languages, Technical};

    fn set_personal(doc: &ResumeDocument, field: PersonalField, value: &str) -> ResumeDocument {
        apply(doc, DocumentEdit::SetPersonalField { field, value: value.to_string() }).unwrap()
    }

    // ── personal details ────────────────────────────────────────────────────

    #[test]
    fn test_set_personal_field_commits_sanitized_value() {
        let doc = ResumeDocument::default();
        let next = set_personal(&doc, PersonalField::FullName, "  Jane <Doe>  ");
        assert_eq!(next.personal_details.full_name, "Jane Doe");
        // The input document is untouched.
        assert_eq!(doc.personal_details.full_name, "");
    }

    #[test]
    fn test_invalid_email_rejected_document_unchanged() {
        let doc = set_personal(&ResumeDocument::default(), PersonalField::Email, "a@b.co");
        let err = apply(
            &doc,
            DocumentEdit::SetPersonalField {
                field: PersonalField::Email,
                value: "not-an-email".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, EditError::InvalidEmail);
        assert_eq!(doc.personal_details.email, "a@b.co");
    }

    #[test]
    fn test_clearing_email_is_allowed() {
        let doc = set_personal(&ResumeDocument::default(), PersonalField::Email, "a@b.co");
        let next = set_personal(&doc, PersonalField::Email, "");
        assert_eq!(next.personal_details.email, "");
    }

    #[test]
    fn test_url_fields_validated() {
        let doc = ResumeDocument::default();
        let err = apply(
            &doc,
            DocumentEdit::SetPersonalField {
                field: PersonalField::Portfolio,
                value: "ftp://x.io".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, EditError::InvalidUrl { field: "portfolio" }));

        let next = set_personal(&doc, PersonalField::Linkedin, "linkedin.com/in/jane");
        assert_eq!(next.personal_details.linkedin, "linkedin.com/in/jane");
    }

    #[test]
    fn test_oversized_value_rejected_not_truncated() {
        let doc = ResumeDocument::default();
        let err = apply(
            &doc,
            DocumentEdit::SetPersonalField {
                field: PersonalField::Phone,
                value: "9".repeat(21),
            },
        )
        .unwrap_err();
        assert_eq!(err, EditError::TooLong { field: "phone", max: 20 });
    }

    // ── list sections ───────────────────────────────────────────────────────

    #[test]
    fn test_add_then_remove_education_round_trips() {
        let doc = ResumeDocument::default();
        let with_entry = apply(&doc, DocumentEdit::AddEducation).unwrap();
        assert_eq!(with_entry.education.len(), 1);

        let id = with_entry.education[0].id;
        let back = apply(&with_entry, DocumentEdit::RemoveEducation { id }).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_update_education_by_id() {
        let doc = apply(&ResumeDocument::default(), DocumentEdit::AddEducation).unwrap();
        let doc = apply(&doc, DocumentEdit::AddEducation).unwrap();
        let target = doc.education[1].id;

        let next = apply(
            &doc,
            DocumentEdit::UpdateEducation {
                id: target,
                field: EducationField::Degree,
                value: "BSc Computer Science".to_string(),
            },
        )
        .unwrap();
        assert_eq!(next.education[0].degree, "");
        assert_eq!(next.education[1].degree, "BSc Computer Science");
    }

    #[test]
    fn test_update_unmatched_id_is_noop() {
        let doc = apply(&ResumeDocument::default(), DocumentEdit::AddExperience).unwrap();
        let next = apply(
            &doc,
            DocumentEdit::UpdateExperience {
                id: Uuid::new_v4(),
                field: ExperienceField::Title,
                value: "Engineer".to_string(),
            },
        )
        .unwrap();
        assert_eq!(next, doc);
    }

    #[test]
    fn test_empty_gpa_stored_as_none() {
        let doc = apply(&ResumeDocument::default(), DocumentEdit::AddEducation).unwrap();
        let id = doc.education[0].id;

        let with_gpa = apply(
            &doc,
            DocumentEdit::UpdateEducation { id, field: EducationField::Gpa, value: "3.8".into() },
        )
        .unwrap();
        assert_eq!(with_gpa.education[0].gpa.as_deref(), Some("3.8"));

        let cleared = apply(
            &with_gpa,
            DocumentEdit::UpdateEducation { id, field: EducationField::Gpa, value: "".into() },
        )
        .unwrap();
        assert_eq!(cleared.education[0].gpa, None);
    }

    #[test]
    fn test_project_link_url_checked() {
        let doc = apply(&ResumeDocument::default(), DocumentEdit::AddProject).unwrap();
        let id = doc.projects[0].id;
        let err = apply(
            &doc,
            DocumentEdit::UpdateProject {
                id,
                field: ProjectField::Link,
                value: "ftp://bad".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, EditError::InvalidUrl { field: "link" }));
    }

    #[test]
    fn test_experience_description_cap_is_2000() {
        let doc = apply(&ResumeDocument::default(), DocumentEdit::AddExperience).unwrap();
        let id = doc.experience[0].id;
        let ok = apply(
            &doc,
            DocumentEdit::UpdateExperience {
                id,
                field: ExperienceField::Description,
                value: "x".repeat(2000),
            },
        );
        assert!(ok.is_ok());

        let err = apply(
            &doc,
            DocumentEdit::UpdateExperience {
                id,
                field: ExperienceField::Description,
                value: "x".repeat(2001),
            },
        )
        .unwrap_err();
        assert_eq!(err, EditError::TooLong { field: "description", max: 2000 });
    }

    // ── skills ──────────────────────────────────────────────────────────────

    #[test]
    fn test_duplicate_skill_rejected() {
        let doc = apply(
            &ResumeDocument::default(),
            DocumentEdit::AddSkill { category: Technical, value: "Python".into() },
        )
        .unwrap();

        let err = apply(
            &doc,
            DocumentEdit::AddSkill { category: Technical, value: "Python".into() },
        )
        .unwrap_err();
        assert_eq!(
            err,
            EditError::DuplicateSkill { value: "Python".into(), category: "technical" }
        );
        assert_eq!(doc.skills.technical, vec!["Python".to_string()]);
    }

    #[test]
    fn test_same_skill_allowed_across_categories() {
        let doc = apply(
            &ResumeDocument::default(),
            DocumentEdit::AddSkill { category: Technical, value: "Python".into() },
        )
        .unwrap();
        let doc = apply(
            &doc,
            DocumentEdit::AddSkill { category: Languages, value: "Python".into() },
        )
        .unwrap();
        assert_eq!(doc.skills.technical, vec!["Python".to_string()]);
        assert_eq!(doc.skills.languages, vec!["Python".to_string()]);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let doc = apply(
            &ResumeDocument::default(),
            DocumentEdit::AddSkill { category: Technical, value: "python".into() },
        )
        .unwrap();
        let doc = apply(
            &doc,
            DocumentEdit::AddSkill { category: Technical, value: "Python".into() },
        )
        .unwrap();
        assert_eq!(doc.skills.technical.len(), 2);
    }

    #[test]
    fn test_blank_skill_rejected() {
        let err = apply(
            &ResumeDocument::default(),
            DocumentEdit::AddSkill { category: Technical, value: "   ".into() },
        )
        .unwrap_err();
        assert_eq!(err, EditError::EmptySkill);
    }

    #[test]
    fn test_oversized_skill_rejected() {
        let err = apply(
            &ResumeDocument::default(),
            DocumentEdit::AddSkill { category: Technical, value: "x".repeat(51) },
        )
        .unwrap_err();
        assert_eq!(err, EditError::TooLong { field: "skill", max: 50 });
    }

    #[test]
    fn test_remove_skill_by_value() {
        let doc = apply(
            &ResumeDocument::default(),
            DocumentEdit::AddSkill { category: Technical, value: "Rust".into() },
        )
        .unwrap();
        let next = apply(
            &doc,
            DocumentEdit::RemoveSkill { category: Technical, value: "Rust".into() },
        )
        .unwrap();
        assert!(next.skills.technical.is_empty());
    }

    // ── wire format ─────────────────────────────────────────────────────────

    #[test]
    fn test_edit_deserializes_from_tagged_json() {
        let edit: DocumentEdit = serde_json::from_value(serde_json::json!({
            "op": "set_personal_field",
            "field": "full_name",
            "value": "Jane"
        }))
        .unwrap();
        assert_eq!(
            edit,
            DocumentEdit::SetPersonalField {
                field: PersonalField::FullName,
                value: "Jane".to_string()
            }
        );

        let edit: DocumentEdit = serde_json::from_value(serde_json::json!({
            "op": "add_skill",
            "category": "technical",
            "value": "Rust"
        }))
        .unwrap();
        assert!(matches!(edit, DocumentEdit::AddSkill { category: Technical, .. }));
    }
}
