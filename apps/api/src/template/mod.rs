//! The template catalog: a static registry of named color/layout presets
//! and the default palette used when no template is selected.

pub mod catalog;

pub use catalog::{all_templates, default_palette, find_template, Palette, Template, TemplateData};
