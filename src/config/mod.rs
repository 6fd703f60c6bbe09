use anyhow::Context;
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog;
use crate::cli::{Args, ProviderKind};
use crate::wire::SafetySetting;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub schema_version: String,
    pub provider: ProviderKind,
    pub text_model: String,
    pub image_model: String,
    /// Overrides the provider's default API base URL.
    pub api_base: Option<String>,
    pub timeout_secs: u64,
    pub out_dir: String,
    pub save_request: bool,
    pub save_response: bool,
    pub default_style: String,
    pub default_font: String,
    pub hook_font_size: u32,
    pub content_font_size: u32,
    pub safety_threshold: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: "2025-10-01".into(),
            provider: ProviderKind::Gemini,
            text_model: "gemini-2.0-flash".into(),
            image_model: "gemini-2.0-flash-exp".into(),
            api_base: None,
            timeout_secs: 120,
            out_dir: ".niche-studio".into(),
            save_request: false,
            save_response: false,
            default_style: catalog::default_style().id.into(),
            default_font: catalog::DEFAULT_FONT_STYLE_ID.into(),
            hook_font_size: 32,
            content_font_size: 24,
            safety_threshold: "BLOCK_ONLY_HIGH".into(),
        }
    }
}

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

impl Config {
    /// Defaults, then the optional TOML file on top. Models the file leaves
    /// out follow the file's provider.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(p) = path else { return Ok(Self::default()) };
        let raw = fs::read_to_string(p)?;
        let table: toml::Table =
            toml::from_str(&raw).with_context(|| format!("invalid config file {}", p.display()))?;
        let mut cfg: Self = toml::from_str(&raw).with_context(|| format!("invalid config file {}", p.display()))?;
        let fresh = Self::defaults_for(cfg.provider);
        if !table.contains_key("text_model") {
            cfg.text_model = fresh.text_model;
        }
        if !table.contains_key("image_model") {
            cfg.image_model = fresh.image_model;
        }
        Ok(cfg)
    }

    /// CLI flags win over file values.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(p) = args.provider {
            if p != self.provider {
                // model names are provider specific
                let fresh = Self::defaults_for(p);
                self.text_model = fresh.text_model;
                self.image_model = fresh.image_model;
            }
            self.provider = p;
        }
        if let Some(m) = &args.text_model {
            self.text_model = m.clone();
        }
        if let Some(m) = &args.image_model {
            self.image_model = m.clone();
        }
        if let Some(t) = args.timeout_secs {
            self.timeout_secs = t;
        }
        if let Some(o) = &args.out {
            self.out_dir = o.clone();
        }
        self.save_request |= args.save_request;
        self.save_response |= args.save_response;
    }

    pub fn defaults_for(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::Gemini => Self::default(),
            ProviderKind::OpenAI => Self {
                provider: ProviderKind::OpenAI,
                text_model: "gpt-4.1-mini".into(),
                image_model: "gpt-image-1".into(),
                ..Self::default()
            },
        }
    }

    pub fn safety_settings(&self) -> Vec<SafetySetting> {
        HARM_CATEGORIES
            .iter()
            .map(|c| SafetySetting { category: (*c).into(), threshold: self.safety_threshold.clone() })
            .collect()
    }
}
