//! Coarse completion scoring: five equal-weight checks, no partial credit.

use crate::document::model::ResumeDocument;

/// Fraction of the five section checks satisfied, expressed 0–100.
///
/// Checks: name+email present, ≥1 education, ≥1 experience, ≥1 project,
/// ≥1 technical or language skill.
pub fn completion_score(doc: &ResumeDocument) -> u8 {
    let checks = [
        !doc.personal_details.full_name.is_empty() && !doc.personal_details.email.is_empty(),
        !doc.education.is_empty(),
        !doc.experience.is_empty(),
        !doc.projects.is_empty(),
        !doc.skills.technical.is_empty() || !doc.skills.languages.is_empty(),
    ];

    let satisfied = checks.iter().filter(|c| **c).count();
    ((satisfied as f64 / checks.len() as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::editor::{apply, DocumentEdit, PersonalField};
    use crate::document::model::SkillCategory;

    #[test]
    fn test_empty_document_scores_zero() {
        assert_eq!(completion_score(&ResumeDocument::default()), 0);
    }

    #[test]
    fn test_name_and_email_scores_twenty() {
        let mut doc = ResumeDocument::default();
        doc.personal_details.full_name = "Jane Doe".to_string();
        doc.personal_details.email = "jane@example.com".to_string();
        assert_eq!(completion_score(&doc), 20);
    }

    #[test]
    fn test_name_without_email_scores_zero() {
        let mut doc = ResumeDocument::default();
        doc.personal_details.full_name = "Jane Doe".to_string();
        assert_eq!(completion_score(&doc), 0);
    }

    #[test]
    fn test_framework_skills_do_not_count() {
        // Only technical and languages satisfy the skills check.
        let doc = apply(
            &ResumeDocument::default(),
            DocumentEdit::AddSkill {
                category: SkillCategory::Frameworks,
                value: "Axum".to_string(),
            },
        )
        .unwrap();
        assert_eq!(completion_score(&doc), 0);
    }

    #[test]
    fn test_full_document_scores_hundred() {
        let doc = ResumeDocument::default();
        let doc = apply(
            &doc,
            DocumentEdit::SetPersonalField {
                field: PersonalField::FullName,
                value: "Jane Doe".to_string(),
            },
        )
        .unwrap();
        let doc = apply(
            &doc,
            DocumentEdit::SetPersonalField {
                field: PersonalField::Email,
                value: "jane@example.com".to_string(),
            },
        )
        .unwrap();
        let doc = apply(&doc, DocumentEdit::AddEducation).unwrap();
        let doc = apply(&doc, DocumentEdit::AddExperience).unwrap();
        let doc = apply(&doc, DocumentEdit::AddProject).unwrap();
        let doc = apply(
            &doc,
            DocumentEdit::AddSkill {
                category: SkillCategory::Technical,
                value: "Rust".to_string(),
            },
        )
        .unwrap();
        assert_eq!(completion_score(&doc), 100);
    }
}
