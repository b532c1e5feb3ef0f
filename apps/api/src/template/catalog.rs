//! Built-in templates. The catalog is static — templates are presets, not
//! user data — and every entry carries the full rendering payload.

use serde::{Deserialize, Serialize};

/// Color palette applied by the renderer. Hex strings, `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
}

/// The rendering payload attached to a template (and persisted alongside a
/// resume as `custom_template_data`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateData {
    pub layout: String,
    pub colors: Palette,
}

/// One catalog entry. Serialize-only: the catalog is compiled in, never
/// parsed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub is_premium: bool,
    pub data: TemplateData,
}

/// Palette used when no template is selected.
pub fn default_palette() -> Palette {
    palette("#2563eb", "#64748b", "#ffffff", "#1f2937")
}

fn palette(primary: &str, secondary: &str, accent: &str, text: &str) -> Palette {
    Palette {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        accent: accent.to_string(),
        text: text.to_string(),
    }
}

fn template(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    is_premium: bool,
    colors: Palette,
) -> Template {
    Template {
        id,
        name,
        description,
        category,
        is_premium,
        data: TemplateData { layout: id.to_string(), colors },
    }
}

/// The full catalog, in display order.
pub fn all_templates() -> Vec<Template> {
    vec![
        template(
            "executive-pro",
            "Executive Professional",
            "Premium executive template with sophisticated navy blue design and clean white typography",
            "EXECUTIVE",
            true,
            palette("#1e3a8a", "#3b82f6", "#ffffff", "#1f2937"),
        ),
        template(
            "modern-classic",
            "Modern Classic",
            "Timeless design combining modern aesthetics with classic professionalism",
            "PROFESSIONAL",
            false,
            palette("#0f172a", "#475569", "#f8fafc", "#334155"),
        ),
        template(
            "tech-leader",
            "Tech Leadership",
            "Perfect for senior tech roles with clean lines and technical focus",
            "TECHNOLOGY",
            true,
            palette("#1e40af", "#2563eb", "#eff6ff", "#1e293b"),
        ),
        template(
            "corporate-elite",
            "Corporate Elite",
            "High-end corporate design for C-level and senior management positions",
            "CORPORATE",
            true,
            palette("#1f2937", "#4b5563", "#f9fafb", "#111827"),
        ),
        template(
            "consulting-pro",
            "Consulting Professional",
            "Sophisticated template designed for consulting and advisory roles",
            "CONSULTING",
            false,
            palette("#164e63", "#0891b2", "#f0f9ff", "#0c4a6e"),
        ),
        template(
            "finance-executive",
            "Finance Executive",
            "Professional template tailored for finance and banking professionals",
            "FINANCE",
            true,
            palette("#134e4a", "#14b8a6", "#f0fdfa", "#042f2e"),
        ),
        template(
            "minimalist-pro",
            "Minimalist Professional",
            "Clean, minimal design focusing on content and readability",
            "MINIMAL",
            false,
            palette("#374151", "#6b7280", "#ffffff", "#1f2937"),
        ),
        template(
            "creative-director",
            "Creative Director",
            "Elegant template for creative leadership and design roles",
            "CREATIVE",
            true,
            palette("#581c87", "#8b5cf6", "#faf5ff", "#4c1d95"),
        ),
        template(
            "startup-founder",
            "Startup Founder",
            "Dynamic template perfect for entrepreneurs and startup professionals",
            "STARTUP",
            false,
            palette("#dc2626", "#ef4444", "#fef2f2", "#991b1b"),
        ),
        template(
            "academic-scholar",
            "Academic Scholar",
            "Refined template for academic, research, and educational professionals",
            "ACADEMIC",
            true,
            palette("#92400e", "#d97706", "#fffbeb", "#78350f"),
        ),
        template(
            "healthcare-pro",
            "Healthcare Professional",
            "Clean, trustworthy design for medical and healthcare professionals",
            "HEALTHCARE",
            false,
            palette("#065f46", "#10b981", "#ecfdf5", "#064e3b"),
        ),
        template(
            "luxury-brand",
            "Luxury Brand Manager",
            "Premium template with golden accents for luxury brand professionals",
            "LUXURY",
            true,
            palette("#a16207", "#eab308", "#fffef7", "#713f12"),
        ),
    ]
}

/// Looks up a catalog entry by id.
pub fn find_template(id: &str) -> Option<Template> {
    all_templates().into_iter().find(|t| t.id == id)
}
