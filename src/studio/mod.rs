//! The studio state container: the post being drafted, generated results,
//! per-operation phases and pending notices.
//!
//! Each generation runs as `begin_*` (validate, mark loading, build input) then
//! `finish_*` (apply the whole result or leave state alone and raise a notice).
//! The `generate_*` helpers chain the two around the action call.

use std::path::{Path, PathBuf};

use crate::actions::Actions;
use crate::catalog::{self, ImageStyle, Niche};
use crate::config::Config;
use crate::errors::StudioError;
use crate::wire::{
    non_blank, HookContentInput, HookContentOutput, ImageInput, ImageOutput, ViralCaptionInput,
    ViralCaptionOutput,
};

pub mod download;
pub mod preview;

pub use preview::PreviewPane;

pub const BUSY: &str = "Wait for the current generation to finish.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    HookContent,
    Image,
    Caption,
}

/// `Succeeded` and `Failed` are resting states; a new request may start from either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Phases {
    pub hook_content: Phase,
    pub image: Phase,
    pub caption: Phase,
}

impl Phases {
    pub fn get(&self, op: Operation) -> Phase {
        match op {
            Operation::HookContent => self.hook_content,
            Operation::Image => self.image,
            Operation::Caption => self.caption,
        }
    }

    fn set(&mut self, op: Operation, phase: Phase) {
        match op {
            Operation::HookContent => self.hook_content = phase,
            Operation::Image => self.image = phase,
            Operation::Caption => self.caption = phase,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub niche: Option<&'static Niche>,
    pub post_idea: String,
    pub hook_text: String,
    pub content_text: String,
    pub style: Option<&'static ImageStyle>,
    pub hook_font_id: String,
    pub content_font_id: String,
    pub hook_font_size: u32,
    pub content_font_size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    pub image_url: Option<String>,
    pub viral_caption: Option<String>,
    pub viral_hashtags: Option<String>,
}

pub struct Studio {
    actions: Actions,
    pub draft: PostDraft,
    pub generated: Generated,
    phases: Phases,
    notices: Vec<Notice>,
}

impl Studio {
    pub fn new(actions: Actions, cfg: &Config) -> Self {
        let style = catalog::style_by_id(&cfg.default_style).or(Some(catalog::default_style()));
        let font = match catalog::font_by_id(&cfg.default_font) {
            Some(f) => f.id,
            None => catalog::DEFAULT_FONT_STYLE_ID,
        };
        Self {
            actions,
            draft: PostDraft {
                niche: None,
                post_idea: String::new(),
                hook_text: String::new(),
                content_text: String::new(),
                style,
                hook_font_id: font.to_string(),
                content_font_id: font.to_string(),
                hook_font_size: cfg.hook_font_size,
                content_font_size: cfg.content_font_size,
            },
            generated: Generated::default(),
            phases: Phases::default(),
            notices: Vec::new(),
        }
    }

    // ---------- form state ----------

    /// Switch niche. Everything derived from the previous post is dropped.
    /// Refused while any generation is in flight.
    pub fn select_niche(&mut self, niche: &'static Niche) -> Result<(), StudioError> {
        if self.any_loading() {
            return Err(StudioError::Validation(BUSY.into()));
        }
        self.draft.niche = Some(niche);
        self.draft.post_idea.clear();
        self.draft.hook_text.clear();
        self.draft.content_text.clear();
        self.generated = Generated::default();
        Ok(())
    }

    pub fn select_niche_by_id(&mut self, id: &str) -> Result<(), StudioError> {
        let niche = catalog::niche_by_id(id)
            .ok_or_else(|| StudioError::Validation(format!("Unknown niche '{id}'.")))?;
        self.select_niche(niche)
    }

    pub fn set_post_idea(&mut self, text: impl Into<String>) {
        self.draft.post_idea = text.into();
    }

    pub fn set_hook_text(&mut self, text: impl Into<String>) {
        self.draft.hook_text = text.into();
    }

    pub fn set_content_text(&mut self, text: impl Into<String>) {
        self.draft.content_text = text.into();
    }

    pub fn select_style_by_id(&mut self, id: &str) -> Result<(), StudioError> {
        let style = catalog::style_by_id(id)
            .ok_or_else(|| StudioError::Validation(format!("Unknown image style '{id}'.")))?;
        self.draft.style = Some(style);
        Ok(())
    }

    pub fn clear_style(&mut self) {
        self.draft.style = None;
    }

    pub fn set_hook_font(&mut self, id: &str) -> Result<(), StudioError> {
        self.draft.hook_font_id = known_font(id)?;
        Ok(())
    }

    pub fn set_content_font(&mut self, id: &str) -> Result<(), StudioError> {
        self.draft.content_font_id = known_font(id)?;
        Ok(())
    }

    pub fn set_hook_font_size(&mut self, px: u32) -> Result<(), StudioError> {
        self.draft.hook_font_size = positive_size(px)?;
        Ok(())
    }

    pub fn set_content_font_size(&mut self, px: u32) -> Result<(), StudioError> {
        self.draft.content_font_size = positive_size(px)?;
        Ok(())
    }

    // ---------- derived view state ----------

    pub fn phase(&self, op: Operation) -> Phase {
        self.phases.get(op)
    }

    pub fn is_loading(&self, op: Operation) -> bool {
        self.phases.get(op) == Phase::Loading
    }

    pub fn any_loading(&self) -> bool {
        [Operation::HookContent, Operation::Image, Operation::Caption]
            .into_iter()
            .any(|op| self.is_loading(op))
    }

    /// The caption pane only exists once an image is shown.
    pub fn caption_pane_visible(&self) -> bool {
        self.generated.image_url.is_some() && !self.is_loading(Operation::Image)
    }

    pub fn preview(&self) -> PreviewPane {
        let hook_font = catalog::font_or_first(&self.draft.hook_font_id);
        let content_font = catalog::font_or_first(&self.draft.content_font_id);
        preview::compute(&preview::PreviewInputs {
            loading: self.is_loading(Operation::Image),
            image_url: self.generated.image_url.as_deref(),
            post_idea: &self.draft.post_idea,
            niche_name: self.draft.niche.map(|n| n.name),
            style_name: self.draft.style.map(|s| s.name),
            hook_text: &self.draft.hook_text,
            content_text: &self.draft.content_text,
            hook_font_size: self.draft.hook_font_size,
            content_font_size: self.draft.content_font_size,
            hook_css_class: hook_font.css_class,
            content_css_class: content_font.css_class,
        })
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, level: NoticeLevel, title: &str, description: impl Into<String>) {
        self.notices.push(Notice { level, title: title.to_string(), description: description.into() });
    }

    /// Shared precondition of all three generations: nothing else in flight,
    /// a niche and a post idea.
    fn require_context(&mut self, title: &str, message: &str) -> Option<&'static Niche> {
        if self.any_loading() {
            return None;
        }
        let niche = self.draft.niche;
        match niche {
            Some(n) if !self.draft.post_idea.trim().is_empty() => Some(n),
            _ => {
                self.notify(NoticeLevel::Error, title, message);
                None
            }
        }
    }

    // ---------- hook + content ----------

    pub fn begin_hook_content(&mut self) -> Option<HookContentInput> {
        let niche = self.require_context(
            "Missing Information",
            "Please enter a post idea and select a niche to generate hook and content.",
        )?;
        self.phases.set(Operation::HookContent, Phase::Loading);
        Some(HookContentInput {
            post_idea: self.draft.post_idea.clone(),
            niche: Some(niche.name.to_string()),
        })
    }

    pub fn finish_hook_content(&mut self, result: Result<HookContentOutput, StudioError>) {
        match result {
            Ok(out) => {
                self.draft.hook_text = out.hook;
                self.draft.content_text = out.content;
                self.phases.set(Operation::HookContent, Phase::Succeeded);
            }
            Err(e) => {
                self.notify(NoticeLevel::Error, "Error Generating Hook/Content", e.user_message());
                self.phases.set(Operation::HookContent, Phase::Failed);
            }
        }
    }

    pub async fn generate_hook_content(&mut self) -> Phase {
        if let Some(input) = self.begin_hook_content() {
            let result = self.actions.handle_generate_hook_content(&input).await;
            self.finish_hook_content(result);
        }
        self.phase(Operation::HookContent)
    }

    // ---------- image ----------

    pub fn begin_image(&mut self) -> Option<ImageInput> {
        let niche = self.require_context(
            "Missing Information",
            "Please select a niche and enter a post idea to generate an image.",
        )?;
        self.phases.set(Operation::Image, Phase::Loading);

        let hook = non_blank(Some(self.draft.hook_text.as_str())).map(str::to_string);
        let content = non_blank(Some(self.draft.content_text.as_str())).map(str::to_string);
        let font_desc = |id: &str| catalog::font_by_id(id).map(|f| f.ai_description.to_string());
        Some(ImageInput {
            niche: niche.name.to_string(),
            post_idea: self.draft.post_idea.clone(),
            image_style: self.draft.style.map(|s| s.id.to_string()),
            hook_font_description: hook.as_ref().and_then(|_| font_desc(&self.draft.hook_font_id)),
            content_font_description: content.as_ref().and_then(|_| font_desc(&self.draft.content_font_id)),
            hook_text: hook,
            content_text: content,
        })
    }

    /// A new image invalidates the caption written for the previous one.
    pub fn finish_image(&mut self, result: Result<ImageOutput, StudioError>) {
        match result {
            Ok(out) => {
                self.generated.image_url = Some(out.image_url);
                self.generated.viral_caption = None;
                self.generated.viral_hashtags = None;
                self.phases.set(Operation::Image, Phase::Succeeded);
            }
            Err(e) => {
                self.notify(NoticeLevel::Error, "Error Generating Image", e.user_message());
                self.phases.set(Operation::Image, Phase::Failed);
            }
        }
    }

    pub async fn generate_image(&mut self) -> Phase {
        if let Some(input) = self.begin_image() {
            let result = self.actions.handle_generate_image(&input).await;
            self.finish_image(result);
        }
        self.phase(Operation::Image)
    }

    // ---------- viral caption ----------

    pub fn begin_caption(&mut self) -> Option<ViralCaptionInput> {
        let niche = self.require_context(
            "Context Missing",
            "Cannot generate caption without niche and post idea.",
        )?;
        self.phases.set(Operation::Caption, Phase::Loading);
        Some(ViralCaptionInput {
            post_idea: self.draft.post_idea.clone(),
            niche: niche.name.to_string(),
            hook_text: non_blank(Some(self.draft.hook_text.as_str())).map(str::to_string),
            content_text: non_blank(Some(self.draft.content_text.as_str())).map(str::to_string),
            image_style: self.draft.style.map(|s| s.id.to_string()),
        })
    }

    pub fn finish_caption(&mut self, result: Result<ViralCaptionOutput, StudioError>) {
        match result {
            Ok(out) => {
                self.generated.viral_caption = Some(out.viral_caption);
                self.generated.viral_hashtags = Some(out.viral_hashtags);
                self.phases.set(Operation::Caption, Phase::Succeeded);
            }
            Err(e) => {
                self.notify(NoticeLevel::Error, "Error Generating Caption", e.user_message());
                self.phases.set(Operation::Caption, Phase::Failed);
            }
        }
    }

    pub async fn generate_caption(&mut self) -> Phase {
        if let Some(input) = self.begin_caption() {
            let result = self.actions.handle_generate_viral_caption(&input).await;
            self.finish_caption(result);
        }
        self.phase(Operation::Caption)
    }

    // ---------- download ----------

    pub fn download_stem(&self) -> String {
        download::download_stem(&self.draft.post_idea, self.draft.niche)
    }

    pub fn download(&mut self, dir: &Path) -> Result<PathBuf, StudioError> {
        let url = match (&self.generated.image_url, self.is_loading(Operation::Image)) {
            (Some(u), false) => u.clone(),
            _ => return Err(StudioError::Download("no image to download".into())),
        };
        let path = download::save_image(&url, dir, &self.download_stem())?;
        self.notify(NoticeLevel::Info, "Image Saved", path.display().to_string());
        Ok(path)
    }
}

fn known_font(id: &str) -> Result<String, StudioError> {
    catalog::font_by_id(id)
        .map(|f| f.id.to_string())
        .ok_or_else(|| StudioError::Validation(format!("Unknown font style '{id}'.")))
}

fn positive_size(px: u32) -> Result<u32, StudioError> {
    if px == 0 {
        return Err(StudioError::Validation("Font size must be greater than zero.".into()));
    }
    Ok(px)
}
