use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use super::{parse_json_reply, Provider};
use crate::wire::{ImageRequest, Instruction, MediaReply, TextRequest};

const DEFAULT_BASE: &str = "https://generativelanguage.googleapis.com";

/// Google AI (Gemini) `generateContent` adapter.
pub struct GeminiProvider {
    api_key: String,
    text_model: String,
    image_model: String,
    api_base: String,
    client: Client,
}

impl GeminiProvider {
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

    fn url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            model
        )
    }

    async fn post(&self, model: &str, body: &Value) -> Result<GenerateResponse> {
        let url = self.url(model);
        tracing::debug!(%url, model, "gemini: POST");

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .context("gemini request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("gemini read body failed")?;
        tracing::debug!(%status, bytes = text.len(), "gemini: response");

        if !status.is_success() {
            return Err(anyhow!("Gemini API error ({}): {}", status, text));
        }
        serde_json::from_str(&text).map_err(|e| anyhow!("gemini response parse error: {}", e))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

fn system_text(ins: &Instruction) -> String {
    let mut system = ins.system.clone();
    if let Some(dev) = &ins.developer {
        system.push_str("\n\n");
        system.push_str(dev);
    }
    system
}

fn text_body(req: &TextRequest) -> Value {
    json!({
        "systemInstruction": { "parts": [ { "text": system_text(&req.instruction) } ] },
        "contents": [ { "role": "user", "parts": [ { "text": req.instruction.user } ] } ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": req.output_schema,
        }
    })
}

fn image_body(req: &ImageRequest) -> Value {
    json!({
        "contents": [ { "role": "user", "parts": [ { "text": req.prompt } ] } ],
        "generationConfig": { "responseModalities": req.modalities },
        "safetySettings": req.safety,
    })
}

fn parts(resp: &GenerateResponse) -> Result<&[Part]> {
    let cand = resp.candidates.first().ok_or_else(|| match &resp.prompt_feedback {
        Some(fb) => anyhow!("gemini: no candidates (prompt feedback: {})", fb),
        None => anyhow!("gemini: no candidates"),
    })?;
    match &cand.content {
        Some(c) => Ok(&c.parts),
        None => Err(anyhow!(
            "gemini: empty candidate (finish reason: {})",
            cand.finish_reason.as_deref().unwrap_or("unknown")
        )),
    }
}

fn text_of(resp: &GenerateResponse) -> Result<String> {
    let text: String = parts(resp)?.iter().filter_map(|p| p.text.as_deref()).collect();
    if text.trim().is_empty() {
        return Err(anyhow!("gemini: empty content"));
    }
    Ok(text)
}

fn media_of(resp: &GenerateResponse) -> Result<MediaReply> {
    let parts = parts(resp)?;
    let url = parts
        .iter()
        .find_map(|p| p.inline_data.as_ref())
        .map(|d| format!("data:{};base64,{}", d.mime_type, d.data));
    let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
    Ok(MediaReply { url, text: if text.is_empty() { None } else { Some(text) } })
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn generate_json(&self, req: &TextRequest) -> Result<Value> {
        let resp = self.post(&self.text_model, &text_body(req)).await?;
        parse_json_reply(&text_of(&resp)?)
    }

    async fn generate_image(&self, req: &ImageRequest) -> Result<MediaReply> {
        let resp = self.post(&self.image_model, &image_body(req)).await?;
        media_of(&resp)
    }
}
