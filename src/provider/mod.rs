use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::cli::ProviderKind;
use crate::config::Config;
use crate::errors::StudioError;
use crate::wire::{ImageRequest, MediaReply, TextRequest};

pub mod gemini;
pub mod openai;

/// A hosted generative model, seen only through its request/response contract.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Structured text generation. The returned value should match `req.output_schema`.
    async fn generate_json(&self, req: &TextRequest) -> Result<Value>;

    /// Image generation. `MediaReply::url` carries a data URI on success.
    async fn generate_image(&self, req: &ImageRequest) -> Result<MediaReply>;
}

pub type DynProvider = Arc<dyn Provider>;

/// First non-empty value among the given env vars.
fn api_key(vars: &[&str]) -> Result<String, StudioError> {
    vars.iter()
        .find_map(|v| std::env::var(v).ok().filter(|k| !k.trim().is_empty()))
        .ok_or_else(|| StudioError::Provider(format!("{} env var is not set", vars.join(" or "))))
}

pub fn make_provider(cfg: &Config) -> Result<DynProvider> {
    match cfg.provider {
        ProviderKind::Gemini => {
            let key = api_key(&["GEMINI_API_KEY", "GOOGLE_API_KEY"])?;
            Ok(Arc::new(gemini::GeminiProvider::new(
                key,
                cfg.text_model.clone(),
                cfg.image_model.clone(),
                cfg.api_base.clone(),
                cfg.timeout_secs,
            )?))
        }
        ProviderKind::OpenAI => {
            let key = api_key(&["OPENAI_API_KEY"])?;
            Ok(Arc::new(openai::OpenAIProvider::new(
                key,
                cfg.text_model.clone(),
                cfg.image_model.clone(),
                cfg.api_base.clone(),
                cfg.timeout_secs,
            )?))
        }
    }
}

/// Parse a model's text reply as a JSON object, falling back to the first
/// balanced `{...}` inside it (models sometimes wrap JSON in prose or fences).
pub fn parse_json_reply(content: &str) -> Result<Value> {
    if let Ok(v @ Value::Object(_)) = serde_json::from_str::<Value>(content.trim()) {
        return Ok(v);
    }
    if let Some(obj) = extract_first_json_object(content) {
        if let Ok(v) = serde_json::from_str::<Value>(obj) {
            return Ok(v);
        }
    }
    Err(anyhow!(
        "Model did not return a valid JSON object.\n--- content start ---\n{}\n--- content end ---",
        content
    ))
}

/// Extracts the first top-level JSON object substring from a string.
/// Braces inside string literals are ignored.
fn extract_first_json_object(s: &str) -> Option<&str> {
    let mut start = None;
    let mut depth = 0usize;
    let mut in_str = false;
    let mut escaped = false;

    for (i, b) in s.bytes().enumerate() {
        if in_str {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_str = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' if start.is_some() => in_str = true,
            b'{' => {
                if start.is_none() {
                    start = Some(i);
                }
                depth += 1;
            }
            b'}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return start.map(|st| &s[st..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_json() {
        let v = parse_json_reply(r#" {"hook":"h","content":"c"} "#).unwrap();
        assert_eq!(v, json!({"hook":"h","content":"c"}));
    }

    #[test]
    fn fenced_json_with_braces_in_strings() {
        let raw = "Sure!\n```json\n{\"hook\": \"Use {curly} braces\", \"content\": \"ok\"}\n```";
        let v = parse_json_reply(raw).unwrap();
        assert_eq!(v["hook"], "Use {curly} braces");
    }

    #[test]
    fn no_object_is_an_error() {
        assert!(parse_json_reply("I cannot help with that.").is_err());
        assert!(parse_json_reply("[1,2,3]").is_err());
    }

    #[test]
    fn missing_api_key_is_a_provider_error() {
        let err = api_key(&["NICHE_STUDIO_TEST_UNSET_KEY"]).unwrap_err();
        assert_eq!(err, StudioError::Provider("NICHE_STUDIO_TEST_UNSET_KEY env var is not set".into()));
    }
}
