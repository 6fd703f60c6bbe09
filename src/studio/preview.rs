use serde::Serialize;

use crate::wire::non_blank;

pub const DEFAULT_ALT: &str = "AI generated image based on post idea";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverlayPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayBlock {
    pub text: String,
    pub font_size: u32,
    pub css_class: &'static str,
    pub position: OverlayPosition,
}

/// What the image pane shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PreviewPane {
    Loading,
    Image { url: String, alt: String },
    /// No image yet, but hook/content text exists: draw it over a faint backdrop.
    TextOverlay {
        background: String,
        hint: String,
        hook: Option<OverlayBlock>,
        content: Option<OverlayBlock>,
    },
    Placeholder { hint: String },
}

/// Inputs the pane is computed from.
pub struct PreviewInputs<'a> {
    pub loading: bool,
    pub image_url: Option<&'a str>,
    pub post_idea: &'a str,
    pub niche_name: Option<&'a str>,
    pub style_name: Option<&'a str>,
    pub hook_text: &'a str,
    pub content_text: &'a str,
    pub hook_font_size: u32,
    pub content_font_size: u32,
    pub hook_css_class: &'static str,
    pub content_css_class: &'static str,
}

/// `tech <niche>` with the niche lowercased and its first space removed.
pub fn placeholder_hint(niche_name: Option<&str>) -> String {
    match niche_name {
        Some(n) => format!("tech {}", n.to_lowercase().replacen(' ', "", 1)),
        None => "digital art".to_string(),
    }
}

pub fn compute(p: &PreviewInputs<'_>) -> PreviewPane {
    if p.loading {
        return PreviewPane::Loading;
    }
    if let Some(url) = p.image_url {
        let alt = if p.post_idea.is_empty() { DEFAULT_ALT } else { p.post_idea };
        return PreviewPane::Image { url: url.to_string(), alt: alt.to_string() };
    }

    let hint = placeholder_hint(p.niche_name);
    let hook = non_blank(Some(p.hook_text)).map(|t| OverlayBlock {
        text: t.to_string(),
        font_size: p.hook_font_size,
        css_class: p.hook_css_class,
        position: OverlayPosition::Top,
    });
    let content = non_blank(Some(p.content_text)).map(|t| OverlayBlock {
        text: t.to_string(),
        font_size: p.content_font_size,
        css_class: p.content_css_class,
        position: OverlayPosition::Bottom,
    });

    if hook.is_none() && content.is_none() {
        return PreviewPane::Placeholder { hint };
    }

    let background = p
        .style_name
        .or(p.niche_name)
        .unwrap_or("Preview")
        .to_string();
    PreviewPane::TextOverlay {
        background,
        hint: format!("{} {}", p.style_name.unwrap_or(""), hint),
        hook,
        content,
    }
}
