//! Static lookup tables: niches, image styles and font styles.

use serde::Serialize;

mod fonts;
mod niches;
mod styles;

pub use fonts::{FONT_STYLE_OPTIONS, DEFAULT_FONT_STYLE_ID};
pub use niches::NICHES;
pub use styles::{IMAGE_STYLES, STYLE_TYPOGRAPHY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Niche {
    pub id: &'static str,
    pub name: &'static str,
    /// lucide icon name, rendered as a label in the terminal grid.
    pub icon: &'static str,
    pub description: &'static str,
    pub prompt_hint: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub look: Option<&'static str>,
    pub color_scheme: Option<&'static str>,
    pub best_for: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontStyleOption {
    pub id: &'static str,
    pub name: &'static str,
    /// Preview class used by the overlay renderer.
    pub css_class: &'static str,
    /// Descriptor injected into image prompts.
    pub ai_description: &'static str,
    pub details: Option<&'static str>,
}

pub fn niche_by_id(id: &str) -> Option<&'static Niche> {
    NICHES.iter().find(|n| n.id.eq_ignore_ascii_case(id.trim()))
}

pub fn style_by_id(id: &str) -> Option<&'static ImageStyle> {
    IMAGE_STYLES.iter().find(|s| s.id.eq_ignore_ascii_case(id.trim()))
}

/// Style lookup by display name; the flows receive names, not ids.
pub fn style_by_name(name: &str) -> Option<&'static ImageStyle> {
    IMAGE_STYLES.iter().find(|s| s.name.eq_ignore_ascii_case(name.trim()))
}

pub fn font_by_id(id: &str) -> Option<&'static FontStyleOption> {
    FONT_STYLE_OPTIONS.iter().find(|f| f.id.eq_ignore_ascii_case(id.trim()))
}

/// Font used for preview rendering. Unknown ids fall back to the first option.
pub fn font_or_first(id: &str) -> &'static FontStyleOption {
    font_by_id(id).unwrap_or(&FONT_STYLE_OPTIONS[0])
}

pub fn default_style() -> &'static ImageStyle {
    &IMAGE_STYLES[0]
}

/// Typography directive for a style, if the table carries one.
pub fn typography_for(style_id: &str) -> Option<&'static str> {
    STYLE_TYPOGRAPHY
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(style_id))
        .map(|(_, directive)| *directive)
}
