//! The resume document aggregate — one value per resume, serialized in the
//! camelCase shape the stored rows carry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The full in-memory document. Created empty, mutated only through
/// `editor::apply`, persisted whole on explicit save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_details: PersonalDetails,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: SkillSet,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub portfolio: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

impl EducationEntry {
    /// A blank record with a freshly generated id, ready for in-place edits.
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            degree: String::new(),
            institution: String::new(),
            year: String::new(),
            gpa: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    pub location: String,
}

impl ExperienceEntry {
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            company: String::new(),
            duration: String::new(),
            description: String::new(),
            location: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub technologies: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ProjectEntry {
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            technologies: String::new(),
            link: None,
        }
    }
}

/// Four parallel skill sets. Within each set: no duplicates (case-sensitive
/// exact match), no empty entries — both enforced by the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
}

impl SkillSet {
    pub fn category_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Languages => &mut self.languages,
            SkillCategory::Frameworks => &mut self.frameworks,
            SkillCategory::Tools => &mut self.tools,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.technical.is_empty()
            && self.languages.is_empty()
            && self.frameworks.is_empty()
            && self.tools.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Languages,
    Frameworks,
    Tools,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Languages => "languages",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Tools => "tools",
        }
    }
}
