use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

use crate::catalog::{FontStyleOption, ImageStyle, Niche};
use crate::studio::preview::{OverlayBlock, PreviewPane};
use crate::studio::{Notice, NoticeLevel, Operation, Studio};

pub fn render_niches(niches: &[Niche], selected: Option<&Niche>) -> String {
    let mut out = format!("\n{}\n", "=== NICHES ===".bold());
    for (i, n) in niches.iter().enumerate() {
        let marker = if selected.map(|s| s.id) == Some(n.id) { "●".green().bold() } else { "○".normal() };
        out.push_str(&format!(
            "{} {}. {}  {}  [{}]\n     {}\n     {}\n",
            marker,
            i + 1,
            n.name.bold(),
            format!("({})", n.id).dimmed(),
            n.icon.cyan(),
            n.description,
            n.prompt_hint.dimmed(),
        ));
    }
    out
}

pub fn render_styles(styles: &[ImageStyle], selected: Option<&ImageStyle>) -> String {
    let mut out = format!("\n{}\n", "=== IMAGE STYLES ===".bold());
    for (i, s) in styles.iter().enumerate() {
        let marker = if selected.map(|x| x.id) == Some(s.id) { "●".green().bold() } else { "○".normal() };
        out.push_str(&format!("{} {}. {}  {}\n", marker, i + 1, s.name.bold(), format!("({})", s.id).dimmed()));
        if let Some(d) = s.description {
            out.push_str(&format!("     {d}\n"));
        }
        for (label, v) in [("Look", s.look), ("Colors", s.color_scheme), ("Best for", s.best_for)] {
            if let Some(v) = v {
                out.push_str(&format!("     {}: {}\n", label.dimmed(), v));
            }
        }
    }
    out
}

pub fn render_fonts(fonts: &[FontStyleOption]) -> String {
    let mut out = format!("\n{}\n", "=== FONT STYLES ===".bold());
    for (i, f) in fonts.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}  {}  <{}>\n",
            i + 1,
            f.name.bold(),
            format!("({})", f.id).dimmed(),
            f.css_class
        ));
        if let Some(d) = f.details {
            out.push_str(&format!("   {d}\n"));
        }
    }
    out
}

pub fn render_form(studio: &Studio) -> String {
    let d = &studio.draft;
    let or_dash = |s: &str| if s.trim().is_empty() { "-".dimmed().to_string() } else { s.to_string() };
    let mut out = format!("\n{}\n", "=== POST ===".bold());
    out.push_str(&format!("  Niche:        {}\n", d.niche.map(|n| n.name).unwrap_or("(none selected)")));
    out.push_str(&format!("  Post idea:    {}\n", or_dash(&d.post_idea)));
    out.push_str(&format!("  Hook:         {}\n", or_dash(&d.hook_text)));
    out.push_str(&format!("  Content:      {}\n", or_dash(&d.content_text)));
    out.push_str(&format!("  Style:        {}\n", d.style.map(|s| s.name).unwrap_or("(none)")));
    out.push_str(&format!("  Hook font:    {} @ {}px\n", d.hook_font_id, d.hook_font_size));
    out.push_str(&format!("  Content font: {} @ {}px\n", d.content_font_id, d.content_font_size));
    if studio.any_loading() {
        out.push_str(&format!("  {}\n", "(busy: actions disabled)".yellow()));
    }
    out
}

fn render_block(label: &str, b: &OverlayBlock) -> String {
    format!(
        "  {} {}  {}\n",
        format!("[{label} {:?} {}px {}]", b.position, b.font_size, b.css_class).dimmed(),
        "▌".normal(),
        b.text.bold()
    )
}

pub fn render_preview(pane: &PreviewPane) -> String {
    let mut out = format!("\n{}\n", "=== PREVIEW ===".bold());
    match pane {
        PreviewPane::Loading => out.push_str(&format!("  {}\n", "Generating your masterpiece...".cyan())),
        PreviewPane::Image { url, alt } => {
            let kind = url.split(',').next().unwrap_or("");
            out.push_str(&format!("  {} {}\n", "Image:".green().bold(), alt));
            out.push_str(&format!("  {} ({} bytes)\n", kind.dimmed(), url.len()));
        }
        PreviewPane::TextOverlay { background, hint, hook, content } => {
            out.push_str(&format!("  {} {}\n", "Text Preview on".dimmed(), background));
            if let Some(h) = hook {
                out.push_str(&render_block("hook", h));
            }
            if let Some(c) = content {
                out.push_str(&render_block("content", c));
            }
            out.push_str(&format!("  {}\n", format!("hint: {}", hint.trim()).dimmed()));
        }
        PreviewPane::Placeholder { hint } => {
            out.push_str("  Your Image Will Appear Here\n");
            out.push_str(&format!(
                "  {}\n",
                "Select niche, add post idea, and generate hook/content to see a preview.".dimmed()
            ));
            out.push_str(&format!("  {}\n", format!("hint: {hint}").dimmed()));
        }
    }
    out
}

/// Empty when the pane is hidden (no image yet, or the image is regenerating).
pub fn render_caption_pane(studio: &Studio) -> String {
    if !studio.caption_pane_visible() {
        return String::new();
    }
    let mut out = format!("\n{}\n", "=== VIRAL CAPTION ===".bold());
    if studio.is_loading(Operation::Caption) {
        out.push_str(&format!("  {}\n", "AI is crafting your viral caption...".cyan()));
    }
    if let Some(c) = &studio.generated.viral_caption {
        out.push_str(&format!("  {} {}\n", "Caption (max 280 chars):".bold(), c));
    }
    if let Some(h) = &studio.generated.viral_hashtags {
        out.push_str(&format!("  {} {}\n", "Hashtags:".bold(), h.cyan()));
    }
    if studio.generated.viral_caption.is_none() && !studio.is_loading(Operation::Caption) {
        out.push_str(&format!("  {}\n", "Generate a viral caption and hashtags for your new image.".dimmed()));
    }
    out
}

pub fn print_notices(notices: &[Notice]) {
    for n in notices {
        match n.level {
            NoticeLevel::Info => println!("{} {}", format!("[{}]", n.title).green().bold(), n.description),
            NoticeLevel::Error => eprintln!("{} {}", format!("[{}]", n.title).red().bold(), n.description),
        }
    }
}

/// Read one line. `None` on EOF or read error.
pub fn ask(prompt: &str) -> Option<String> {
    print!("{} ", prompt.bold());
    let _ = io::stdout().flush();
    let mut s = String::new();
    match io::stdin().read_line(&mut s) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(s.trim_end_matches(['\r', '\n']).to_string()),
    }
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FONT_STYLE_OPTIONS, IMAGE_STYLES, NICHES};

    #[test]
    fn tables_list_every_entry() {
        colored::control::set_override(false);
        let n = render_niches(&NICHES, Some(&NICHES[2]));
        assert!(n.contains("● 3. AI Solutions"));
        assert!(n.contains("○ 1. Web Development"));
        let s = render_styles(&IMAGE_STYLES, None);
        assert!(s.contains("10. AI-Enhanced Realism"));
        assert!(s.contains("Best for: Lifestyle and product shots"));
        let f = render_fonts(&FONT_STYLE_OPTIONS);
        assert!(f.contains("<font-mono>"));
    }

    #[test]
    fn preview_variants_render() {
        colored::control::set_override(false);
        let p = render_preview(&PreviewPane::Placeholder { hint: "digital art".into() });
        assert!(p.contains("Your Image Will Appear Here"));
        let p = render_preview(&PreviewPane::Image { url: "data:image/png;base64,AAAA".into(), alt: "edge".into() });
        assert!(p.contains("Image: edge"));
        assert!(p.contains("data:image/png;base64"));
    }
}
