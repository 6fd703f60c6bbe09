use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ========================================
// Request/Response contracts for the generative endpoints
// ========================================

pub const SCHEMA_VERSION: &str = "v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    HookContent,
    Image,
    ViralCaption,
    SuggestPrompt,
}

impl Flow {
    pub fn stage(&self) -> &'static str {
        match self {
            Flow::HookContent => "hook_content",
            Flow::Image => "image",
            Flow::ViralCaption => "viral_caption",
            Flow::SuggestPrompt => "suggest_prompt",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tx {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl Tx {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(), timestamp: Utc::now() }
    }
}

impl Default for Tx {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub system: String,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
}

/// A structured-output request: the model must answer with an object that
/// satisfies `output_schema`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    pub schema_version: String,
    pub flow: Flow,
    pub transaction: Tx,
    pub instruction: Instruction,
    pub output_schema: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Modality {
    Text,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    pub schema_version: String,
    pub transaction: Tx,
    pub prompt: String,
    pub modalities: Vec<Modality>,
    #[serde(default)]
    pub safety: Vec<SafetySetting>,
}

/// What an image endpoint handed back. `url` is a data URI when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// ---- flow inputs / outputs ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookContentInput {
    pub post_idea: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookContentOutput {
    pub hook: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInput {
    pub niche: String,
    pub post_idea: String,
    /// Style id from the catalog. Unknown ids are used verbatim as a style name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_font_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_font_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOutput {
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViralCaptionInput {
    pub post_idea: String,
    pub niche: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViralCaptionOutput {
    pub viral_caption: String,
    pub viral_hashtags: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestPromptInput {
    pub niche: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestPromptOutput {
    pub prompt_suggestion: String,
}

/// Treat blank strings as absent; the prompt builders only mention fields
/// that carry text.
pub fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}
