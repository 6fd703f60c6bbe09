//! Request handlers in front of the flows. Validation happens before any
//! network call; flow failures are logged and replaced by a generic message.

use crate::errors::StudioError;
use crate::flows::{self, FlowContext};
use crate::wire::{
    HookContentInput, HookContentOutput, ImageInput, ImageOutput, SuggestPromptInput,
    SuggestPromptOutput, ViralCaptionInput, ViralCaptionOutput,
};

pub const HOOK_CONTENT_FAILED: &str = "Failed to generate hook and content. Please try again.";
pub const IMAGE_FAILED: &str = "Failed to generate image. Please try again.";
pub const CAPTION_FAILED: &str = "Failed to generate viral caption. Please try again.";
pub const SUGGEST_FAILED: &str = "Failed to suggest prompt. Please try again.";

fn require(value: &str, what: &str) -> Result<(), StudioError> {
    if value.trim().is_empty() {
        return Err(StudioError::Validation(format!("{what} is required.")));
    }
    Ok(())
}

fn generic(action: &str, message: &str, err: anyhow::Error) -> StudioError {
    tracing::error!(action, error = %format!("{err:#}"), "generation failed");
    StudioError::Generation(message.to_string())
}

#[derive(Clone)]
pub struct Actions {
    ctx: FlowContext,
}

impl Actions {
    pub fn new(ctx: FlowContext) -> Self {
        Self { ctx }
    }

    pub async fn handle_generate_hook_content(
        &self,
        input: &HookContentInput,
    ) -> Result<HookContentOutput, StudioError> {
        require(&input.post_idea, "Post idea")?;
        flows::generate_hook_content(&self.ctx, input)
            .await
            .map_err(|e| generic("hook_content", HOOK_CONTENT_FAILED, e))
    }

    pub async fn handle_generate_image(&self, input: &ImageInput) -> Result<ImageOutput, StudioError> {
        require(&input.niche, "Niche")?;
        require(&input.post_idea, "Post idea")?;
        let out = flows::generate_image(&self.ctx, input)
            .await
            .map_err(|e| generic("image", IMAGE_FAILED, e))?;
        if out.image_url.trim().is_empty() {
            tracing::error!("image generation returned no URL");
            return Err(StudioError::EmptyResult(IMAGE_FAILED.to_string()));
        }
        Ok(out)
    }

    /// The caption is passed through untouched, whatever its length.
    pub async fn handle_generate_viral_caption(
        &self,
        input: &ViralCaptionInput,
    ) -> Result<ViralCaptionOutput, StudioError> {
        require(&input.niche, "Niche")?;
        require(&input.post_idea, "Post idea")?;
        flows::generate_viral_caption(&self.ctx, input)
            .await
            .map_err(|e| generic("viral_caption", CAPTION_FAILED, e))
    }

    pub async fn handle_suggest_prompt(
        &self,
        input: &SuggestPromptInput,
    ) -> Result<SuggestPromptOutput, StudioError> {
        require(&input.niche, "Niche")?;
        flows::suggest_prompt(&self.ctx, input)
            .await
            .map_err(|e| generic("suggest_prompt", SUGGEST_FAILED, e))
    }
}
