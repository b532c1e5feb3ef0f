//! The rendering pipeline: (document, template data) → markup.
//!
//! Pure and total — the same inputs always produce the same string, missing
//! optional fields are omitted rather than rendered as placeholders, and
//! every user-entered value is HTML-escaped on the way out.
//!
//! One section pipeline feeds both output modes: `Screen` returns the
//! resume fragment for live preview, `Print` wraps the identical fragment
//! in a standalone document (inline CSS, no external assets) for the
//! browser's print dialog. Preview and export cannot drift.

pub mod html;

use serde::{Deserialize, Serialize};

use crate::document::model::{PersonalDetails, ResumeDocument};
use crate::template::{default_palette, Palette, TemplateData};
use html::escape;

/// Output mode. `Screen` is the default for preview requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    #[default]
    Screen,
    Print,
}

/// The two layout variants. Anything the catalog doesn't mark as classic
/// renders through the modern variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Modern,
    Classic,
}

impl Layout {
    fn resolve(data: Option<&TemplateData>) -> Layout {
        match data {
            Some(d) if d.layout == "classic" => Layout::Classic,
            _ => Layout::Modern,
        }
    }
}

/// Renders the document with the selected template, falling back to the
/// default palette and the modern layout when none is selected.
pub fn render(doc: &ResumeDocument, data: Option<&TemplateData>, mode: RenderMode) -> String {
    let colors = data.map(|d| d.colors.clone()).unwrap_or_else(default_palette);
    let body = match Layout::resolve(data) {
        Layout::Modern => modern_layout(doc, &colors),
        Layout::Classic => classic_layout(doc, &colors),
    };

    match mode {
        RenderMode::Screen => body,
        RenderMode::Print => print_document(doc, &colors, &body),
    }
}

fn display_name(details: &PersonalDetails) -> String {
    if details.full_name.is_empty() {
        "Your Name".to_string()
    } else {
        escape(&details.full_name)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Modern layout — colored header block, stacked sections
// ────────────────────────────────────────────────────────────────────────────

fn modern_layout(doc: &ResumeDocument, colors: &Palette) -> String {
    let mut out = String::new();
    let d = &doc.personal_details;

    out.push_str("<div class=\"resume modern\" style=\"font-family:Arial,Helvetica,sans-serif;line-height:1.5;\">\n");

    out.push_str(&format!(
        "<header style=\"background-color:{};color:#ffffff;padding:24px;\">\n<h1 style=\"margin:0 0 8px 0;\">{}</h1>\n",
        escape(&colors.primary),
        display_name(d)
    ));
    out.push_str("<div class=\"contact\" style=\"font-size:0.85em;\">\n");
    for line in contact_lines(d) {
        out.push_str(&format!("<div>{line}</div>\n"));
    }
    out.push_str("</div>\n</header>\n");

    out.push_str("<div class=\"sections\" style=\"padding:24px;\">\n");
    if !d.summary.is_empty() {
        out.push_str(&section_open("Professional Summary", colors, false));
        out.push_str(&format!(
            "<p style=\"white-space:pre-wrap;margin:0;\">{}</p>\n</section>\n",
            escape(&d.summary)
        ));
    }
    out.push_str(&experience_section(doc, colors, false));
    out.push_str(&education_section(doc, colors, false));
    out.push_str(&projects_section(doc, colors, false));
    out.push_str(&skills_chips_section(doc, colors));
    out.push_str("</div>\n</div>\n");
    out
}

fn skills_chips_section(doc: &ResumeDocument, colors: &Palette) -> String {
    if doc.skills.is_empty() {
        return String::new();
    }
    let mut out = section_open("Skills", colors, false);
    for (label, entries) in skill_groups(doc) {
        if entries.is_empty() {
            continue;
        }
        out.push_str(&format!("<h3 style=\"margin:8px 0 4px 0;\">{label}</h3>\n<div class=\"chips\">\n"));
        for skill in entries {
            out.push_str(&format!(
                "<span style=\"display:inline-block;background-color:{};color:#ffffff;border-radius:9999px;padding:2px 10px;margin:2px;font-size:0.8em;\">{}</span>\n",
                escape(&colors.secondary),
                escape(skill)
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Classic layout — centered serif header, stacked sections
// ────────────────────────────────────────────────────────────────────────────

fn classic_layout(doc: &ResumeDocument, colors: &Palette) -> String {
    let mut out = String::new();
    let d = &doc.personal_details;

    out.push_str("<div class=\"resume classic\" style=\"font-family:Georgia,'Times New Roman',serif;line-height:1.5;padding:32px;\">\n");

    out.push_str(&format!(
        "<header style=\"text-align:center;border-bottom:2px solid {};padding-bottom:16px;margin-bottom:24px;\">\n<h1 style=\"margin:0 0 8px 0;color:{};\">{}</h1>\n",
        escape(&colors.primary),
        escape(&colors.primary),
        display_name(d)
    ));
    out.push_str(&format!(
        "<p class=\"contact\" style=\"margin:0;font-size:0.85em;\">{}</p>\n</header>\n",
        contact_lines(d).join(" &bull; ")
    ));

    if !d.summary.is_empty() {
        out.push_str(&section_open("Professional Summary", colors, true));
        out.push_str(&format!(
            "<p style=\"white-space:pre-wrap;margin:0;\">{}</p>\n</section>\n",
            escape(&d.summary)
        ));
    }
    out.push_str(&experience_section(doc, colors, true));
    out.push_str(&education_section(doc, colors, true));
    out.push_str(&skills_inline_section(doc, colors));
    out.push_str(&projects_section(doc, colors, true));
    out.push_str("</div>\n");
    out
}

fn skills_inline_section(doc: &ResumeDocument, colors: &Palette) -> String {
    if doc.skills.is_empty() {
        return String::new();
    }
    let mut out = section_open("Skills", colors, true);
    for (label, entries) in skill_groups(doc) {
        if entries.is_empty() {
            continue;
        }
        let joined = entries.iter().map(|s| escape(s)).collect::<Vec<_>>().join(", ");
        out.push_str(&format!("<p style=\"margin:0 0 4px 0;\"><strong>{label}:</strong> {joined}</p>\n"));
    }
    out.push_str("</section>\n");
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Shared sections
// ────────────────────────────────────────────────────────────────────────────

fn section_open(title: &str, colors: &Palette, classic: bool) -> String {
    let heading_style = if classic {
        format!(
            "color:{};text-transform:uppercase;letter-spacing:0.05em;font-size:1.05em;",
            escape(&colors.primary)
        )
    } else {
        format!("color:{};font-size:1.2em;", escape(&colors.primary))
    };
    format!(
        "<section style=\"margin-bottom:20px;\">\n<h2 style=\"{heading_style}margin:0 0 10px 0;\">{title}</h2>\n"
    )
}

fn contact_lines(d: &PersonalDetails) -> Vec<String> {
    let mut lines = Vec::new();
    if !d.email.is_empty() {
        lines.push(escape(&d.email));
    }
    if !d.phone.is_empty() {
        lines.push(escape(&d.phone));
    }
    if !d.location.is_empty() {
        lines.push(escape(&d.location));
    }
    if !d.linkedin.is_empty() {
        lines.push(format!("LinkedIn: {}", escape(&d.linkedin)));
    }
    if !d.portfolio.is_empty() {
        lines.push(format!("Portfolio: {}", escape(&d.portfolio)));
    }
    lines
}

fn experience_section(doc: &ResumeDocument, colors: &Palette, classic: bool) -> String {
    if doc.experience.is_empty() {
        return String::new();
    }
    let title = if classic { "Professional Experience" } else { "Experience" };
    let mut out = section_open(title, colors, classic);
    for exp in &doc.experience {
        out.push_str("<div class=\"entry\" style=\"margin-bottom:14px;\">\n");
        if classic {
            out.push_str(&format!(
                "<div style=\"display:flex;justify-content:space-between;\"><h3 style=\"margin:0;\">{} - {}</h3><span>{}</span></div>\n",
                escape(&exp.title),
                escape(&exp.company),
                escape(&exp.duration)
            ));
            if !exp.location.is_empty() {
                out.push_str(&format!(
                    "<p style=\"margin:2px 0;font-size:0.85em;\">{}</p>\n",
                    escape(&exp.location)
                ));
            }
        } else {
            out.push_str(&format!(
                "<div style=\"display:flex;justify-content:space-between;\"><div><h3 style=\"margin:0;\">{}</h3><p style=\"margin:0;color:{};\">{}</p></div><div style=\"text-align:right;font-size:0.85em;\"><div>{}</div>",
                escape(&exp.title),
                escape(&colors.secondary),
                escape(&exp.company),
                escape(&exp.duration)
            ));
            if !exp.location.is_empty() {
                out.push_str(&format!("<div>{}</div>", escape(&exp.location)));
            }
            out.push_str("</div></div>\n");
        }
        if !exp.description.is_empty() {
            out.push_str(&format!(
                "<p style=\"white-space:pre-wrap;margin:6px 0 0 0;\">{}</p>\n",
                escape(&exp.description)
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
    out
}

fn education_section(doc: &ResumeDocument, colors: &Palette, classic: bool) -> String {
    if doc.education.is_empty() {
        return String::new();
    }
    let mut out = section_open("Education", colors, classic);
    for edu in &doc.education {
        out.push_str(&format!(
            "<div class=\"entry\" style=\"display:flex;justify-content:space-between;margin-bottom:8px;\"><div><h3 style=\"margin:0;\">{}</h3><p style=\"margin:0;\">{}</p></div><div style=\"text-align:right;font-size:0.85em;\"><div>{}</div>",
            escape(&edu.degree),
            escape(&edu.institution),
            escape(&edu.year)
        ));
        if let Some(gpa) = &edu.gpa {
            out.push_str(&format!("<div>GPA: {}</div>", escape(gpa)));
        }
        out.push_str("</div></div>\n");
    }
    out.push_str("</section>\n");
    out
}

fn projects_section(doc: &ResumeDocument, colors: &Palette, classic: bool) -> String {
    if doc.projects.is_empty() {
        return String::new();
    }
    let mut out = section_open("Projects", colors, classic);
    for project in &doc.projects {
        out.push_str("<div class=\"entry\" style=\"margin-bottom:12px;\">\n");
        out.push_str(&format!("<h3 style=\"margin:0;\">{}</h3>\n", escape(&project.name)));
        if let Some(link) = &project.link {
            out.push_str(&format!(
                "<p style=\"margin:2px 0;font-size:0.85em;\"><a href=\"{}\" style=\"color:{};\">{}</a></p>\n",
                escape(link),
                escape(&colors.primary),
                escape(link)
            ));
        }
        if !project.description.is_empty() {
            out.push_str(&format!(
                "<p style=\"white-space:pre-wrap;margin:4px 0;\">{}</p>\n",
                escape(&project.description)
            ));
        }
        if !project.technologies.is_empty() {
            out.push_str(&format!(
                "<p style=\"margin:0;font-size:0.85em;\">Technologies: {}</p>\n",
                escape(&project.technologies)
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
    out
}

fn skill_groups(doc: &ResumeDocument) -> [(&'static str, &Vec<String>); 4] {
    [
        ("Technical Skills", &doc.skills.technical),
        ("Frameworks", &doc.skills.frameworks),
        ("Languages", &doc.skills.languages),
        ("Tools", &doc.skills.tools),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Print wrapper
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the rendered fragment in a self-contained document for the print
/// dialog. Inline CSS only — the exported file must stand alone.
fn print_document(doc: &ResumeDocument, colors: &Palette, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Resume - {}</title>\n<style>\nbody {{ margin: 0; padding: 20px; color: {}; background: #ffffff; }}\na {{ text-decoration: none; }}\n@media print {{ body {{ margin: 0; padding: 0; }} }}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        display_name(&doc.personal_details),
        escape(&colors.text),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::editor::{apply, DocumentEdit, EducationField, ExperienceField, PersonalField};
    use crate::document::model::SkillCategory;
    use crate::template::find_template;

    fn sample_document() -> ResumeDocument {
        let doc = ResumeDocument::default();
        let doc = apply(
            &doc,
            DocumentEdit::SetPersonalField {
                field: PersonalField::FullName,
                value: "Jane Doe".into(),
            },
        )
        .unwrap();
        let doc = apply(
            &doc,
            DocumentEdit::SetPersonalField {
                field: PersonalField::Email,
                value: "jane@example.com".into(),
            },
        )
        .unwrap();
        let doc = apply(&doc, DocumentEdit::AddExperience).unwrap();
        let id = doc.experience[0].id;
        let doc = apply(
            &doc,
            DocumentEdit::UpdateExperience {
                id,
                field: ExperienceField::Title,
                value: "Staff Engineer".into(),
            },
        )
        .unwrap();
        apply(
            &doc,
            DocumentEdit::AddSkill { category: SkillCategory::Technical, value: "Rust".into() },
        )
        .unwrap()
    }

    #[test]
    fn test_no_template_uses_default_palette_and_modern_layout() {
        let out = render(&sample_document(), None, RenderMode::Screen);
        assert!(out.contains("resume modern"));
        assert!(out.contains("#2563eb"));
        assert!(out.contains("#64748b"));
    }

    #[test]
    fn test_classic_layout_selected_by_name() {
        let data = TemplateData { layout: "classic".into(), colors: default_palette() };
        let out = render(&sample_document(), Some(&data), RenderMode::Screen);
        assert!(out.contains("resume classic"));
        assert!(out.contains("Professional Experience"));
    }

    #[test]
    fn test_catalog_templates_render_modern_with_their_palette() {
        let template = find_template("executive-pro").unwrap();
        let out = render(&sample_document(), Some(&template.data), RenderMode::Screen);
        assert!(out.contains("resume modern"));
        assert!(out.contains("#1e3a8a"));
        assert!(!out.contains("#2563eb"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let doc = sample_document();
        assert_eq!(
            render(&doc, None, RenderMode::Screen),
            render(&doc, None, RenderMode::Screen)
        );
    }

    #[test]
    fn test_empty_name_renders_placeholder() {
        let out = render(&ResumeDocument::default(), None, RenderMode::Screen);
        assert!(out.contains("Your Name"));
    }

    #[test]
    fn test_missing_optional_fields_are_omitted() {
        let out = render(&sample_document(), None, RenderMode::Screen);
        assert!(!out.contains("GPA:"));
        assert!(!out.contains("Portfolio:"));
        assert!(!out.contains("LinkedIn:"));
        // Empty sections are skipped entirely.
        assert!(!out.contains("Projects"));
        assert!(!out.contains("Education"));
    }

    #[test]
    fn test_gpa_rendered_when_present() {
        let doc = apply(&sample_document(), DocumentEdit::AddEducation).unwrap();
        let id = doc.education[0].id;
        let doc = apply(
            &doc,
            DocumentEdit::UpdateEducation { id, field: EducationField::Gpa, value: "3.8".into() },
        )
        .unwrap();
        let out = render(&doc, None, RenderMode::Screen);
        assert!(out.contains("GPA: 3.8"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut doc = sample_document();
        // Bypass the reducer to prove the renderer escapes on its own.
        doc.personal_details.full_name = "Jane & \"Co\"".to_string();
        let out = render(&doc, None, RenderMode::Screen);
        assert!(out.contains("Jane &amp; &quot;Co&quot;"));
    }

    #[test]
    fn test_print_mode_wraps_screen_fragment() {
        let doc = sample_document();
        let screen = render(&doc, None, RenderMode::Screen);
        let print = render(&doc, None, RenderMode::Print);
        assert!(print.starts_with("<!DOCTYPE html>"));
        assert!(print.contains("<title>Resume - Jane Doe</title>"));
        assert!(print.contains("@media print"));
        // The print body embeds exactly the screen fragment.
        assert!(print.contains(&screen));
    }

    #[test]
    fn test_skills_rendered_as_chips_in_modern_and_inline_in_classic() {
        let doc = sample_document();
        let modern = render(&doc, None, RenderMode::Screen);
        assert!(modern.contains("Technical Skills"));
        assert!(modern.contains("Rust"));

        let data = TemplateData { layout: "classic".into(), colors: default_palette() };
        let classic = render(&doc, Some(&data), RenderMode::Screen);
        assert!(classic.contains("<strong>Technical Skills:</strong> Rust"));
    }
}
