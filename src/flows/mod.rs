//! One function per generative flow: build the prompt, call the provider,
//! parse the reply into the declared output type.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::StudioError;
use crate::log::Artifacts;
use crate::prompt;
use crate::provider::DynProvider;
use crate::wire::{
    Flow, HookContentInput, HookContentOutput, ImageInput, ImageOutput, ImageRequest, Instruction,
    Modality, SafetySetting, SuggestPromptInput, SuggestPromptOutput, TextRequest, Tx,
    ViralCaptionInput, ViralCaptionOutput, SCHEMA_VERSION,
};

/// Everything a flow needs besides its input.
#[derive(Clone)]
pub struct FlowContext {
    pub provider: DynProvider,
    pub artifacts: Artifacts,
    pub safety: Vec<SafetySetting>,
}

impl FlowContext {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider, artifacts: Artifacts::disabled(), safety: Vec::new() }
    }
}

async fn run_text<T: DeserializeOwned>(
    ctx: &FlowContext,
    flow: Flow,
    instruction: Instruction,
    output_schema: Value,
) -> Result<T> {
    let req = TextRequest {
        schema_version: SCHEMA_VERSION.into(),
        flow,
        transaction: Tx::new(),
        instruction,
        output_schema,
    };
    tracing::debug!(flow = flow.stage(), tx = %req.transaction.id, "sending text request");
    let value = ctx.provider.generate_json(&req).await?;
    ctx.artifacts.record(flow.stage(), req.transaction.id, &req, &value);

    let out = serde_json::from_value(value)
        .map_err(|e| StudioError::Schema(format!("{} reply does not match schema: {e}", flow.stage())))?;
    Ok(out)
}

pub async fn generate_hook_content(ctx: &FlowContext, input: &HookContentInput) -> Result<HookContentOutput> {
    run_text(ctx, Flow::HookContent, prompt::hook_content(input), prompt::hook_content_schema()).await
}

pub async fn generate_viral_caption(ctx: &FlowContext, input: &ViralCaptionInput) -> Result<ViralCaptionOutput> {
    run_text(ctx, Flow::ViralCaption, prompt::viral_caption(input), prompt::viral_caption_schema()).await
}

pub async fn suggest_prompt(ctx: &FlowContext, input: &SuggestPromptInput) -> Result<SuggestPromptOutput> {
    run_text(ctx, Flow::SuggestPrompt, prompt::suggest_prompt(input), prompt::suggest_prompt_schema()).await
}

/// Returns whatever media reference came back; an empty `image_url` means the
/// model answered without an image.
pub async fn generate_image(ctx: &FlowContext, input: &ImageInput) -> Result<ImageOutput> {
    let req = ImageRequest {
        schema_version: SCHEMA_VERSION.into(),
        transaction: Tx::new(),
        prompt: prompt::image_prompt(input),
        modalities: vec![Modality::Text, Modality::Image],
        safety: ctx.safety.clone(),
    };
    tracing::debug!(tx = %req.transaction.id, prompt_len = req.prompt.len(), "sending image request");
    let media = ctx.provider.generate_image(&req).await?;
    ctx.artifacts.record(Flow::Image.stage(), req.transaction.id, &req, &media);

    if let Some(note) = &media.text {
        tracing::debug!(note = %note, "image model text");
    }
    Ok(ImageOutput { image_url: media.url.unwrap_or_default() })
}
