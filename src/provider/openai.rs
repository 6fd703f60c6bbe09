use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use super::{parse_json_reply, Provider};
use crate::wire::{ImageRequest, MediaReply, TextRequest};

const DEFAULT_BASE: &str = "https://api.openai.com";

/// OpenAI adapter: chat completions in JSON mode for text, the images API
/// (base64 output) for pictures.
pub struct OpenAIProvider {
    api_key: String,
    text_model: String,
    image_model: String,
    api_base: String,
    client: Client,
}

impl OpenAIProvider {
    pub fn new(
        api_key: String,
        text_model: String,
        image_model: String,
        api_base: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(timeout_secs)).build()?;
        Ok(Self {
            api_key,
            text_model,
            image_model,
            api_base: api_base.unwrap_or_else(|| DEFAULT_BASE.to_string()),
            client,
        })
    }

    async fn post(&self, path: &str, body: &Value) -> Result<String> {
        let url = format!("{}{}", self.api_base.trim_end_matches('/'), path);
        tracing::debug!(%url, "openai: POST");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .context("openai request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("openai read body failed")?;
        tracing::debug!(%status, bytes = text.len(), "openai: response");

        if !status.is_success() {
            return Err(anyhow!("OpenAI API error ({}): {}", status, text));
        }
        Ok(text)
    }
}

fn chat_body(model: &str, req: &TextRequest) -> Value {
    let mut system = req.instruction.system.clone();
    system.push_str("\n\nOutput JSON schema:\n");
    system.push_str(&req.output_schema.to_string());
    if let Some(dev) = &req.instruction.developer {
        system.push_str("\n\n");
        system.push_str(dev);
    }
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": system },
            { "role": "user", "content": req.instruction.user }
        ],
        "response_format": { "type": "json_object" }
    })
}

fn image_body(model: &str, req: &ImageRequest) -> Value {
    let mut body = json!({
        "model": model,
        "prompt": req.prompt,
        "n": 1,
        "size": "1024x1024"
    });
    // gpt-image models always answer with b64_json and reject the field
    if !model.starts_with("gpt-image") {
        body["response_format"] = json!("b64_json");
    }
    body
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct ImageData {
    #[serde(default)]
    b64_json: Option<String>,
    #[serde(default)]
    revised_prompt: Option<String>,
}

#[derive(Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

fn media_of(resp: ImagesResponse) -> MediaReply {
    match resp.data.into_iter().next() {
        None => MediaReply::default(),
        Some(d) => MediaReply {
            url: d.b64_json.map(|b| format!("data:image/png;base64,{b}")),
            text: d.revised_prompt,
        },
    }
}

#[async_trait]
impl Provider for OpenAIProvider {
    async fn generate_json(&self, req: &TextRequest) -> Result<Value> {
        let text = self.post("/v1/chat/completions", &chat_body(&self.text_model, req)).await?;
        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse OpenAI response: {e}\nRaw: {text}"))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();
        parse_json_reply(&content)
    }

    async fn generate_image(&self, req: &ImageRequest) -> Result<MediaReply> {
        let text = self.post("/v1/images/generations", &image_body(&self.image_model, req)).await?;
        let parsed: ImagesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse OpenAI images response: {e}"))?;
        Ok(media_of(parsed))
    }
}
