use serde_json::{json, Map, Value};

use crate::catalog;
use crate::wire::{
    non_blank, HookContentInput, ImageInput, Instruction, SuggestPromptInput, ViralCaptionInput,
};

fn json_contract() -> &'static str {
    "Respond with exactly one JSON object that matches the declared output schema. No markdown, no code fences, no extra keys."
}

/// JSON schema for an object whose properties are all required strings.
fn object_schema(fields: &[(&str, &str)]) -> Value {
    let mut props = Map::new();
    for (name, description) in fields {
        props.insert(
            (*name).to_string(),
            json!({ "type": "string", "description": description }),
        );
    }
    let required: Vec<&str> = fields.iter().map(|(n, _)| *n).collect();
    json!({ "type": "object", "properties": props, "required": required })
}

// ---------- hook + content ----------

pub fn hook_content_schema() -> Value {
    object_schema(&[
        ("hook", "One catchy, attention-grabbing sentence generated from the post idea."),
        ("content", "A short piece of content (2-3 sentences) generated from the post idea, suitable for a social media post."),
    ])
}

pub fn hook_content(input: &HookContentInput) -> Instruction {
    let mut system = String::from("You are a creative content assistant.");
    if let Some(niche) = non_blank(input.niche.as_deref()) {
        system.push_str(&format!("\nYou are specializing in content for the '{niche}' niche."));
    }

    let user = format!(
"Based on the following post idea, generate a catchy hook and a short piece of content (around 2-3 sentences) suitable for a social media post.

Post Idea: {idea}

Output the hook and content in the specified format. Ensure the hook is engaging and the content is concise and relevant.",
        idea = input.post_idea.trim(),
    );

    Instruction { system, user, developer: Some(json_contract().to_string()) }
}

// ---------- image ----------

/// Resolved style: display name plus the typography directive from the table.
fn resolve_style(style: Option<&str>) -> Option<(String, Option<&'static str>)> {
    let raw = non_blank(style)?;
    match catalog::style_by_id(raw).or_else(|| catalog::style_by_name(raw)) {
        Some(s) => Some((s.name.to_string(), catalog::typography_for(s.id))),
        None => Some((raw.to_string(), None)),
    }
}

pub fn image_prompt(input: &ImageInput) -> String {
    let mut p = format!(
        "Generate a visually appealing image suitable for the niche '{}', based on the post idea: \"{}\".",
        input.niche.trim(),
        input.post_idea.trim()
    );

    let style = resolve_style(input.image_style.as_deref());
    if let Some((name, _)) = &style {
        p.push_str(&format!(" The image should be in a '{name}' style."));
    }

    let hook = non_blank(input.hook_text.as_deref());
    let content = non_blank(input.content_text.as_deref());

    if let Some(hook) = hook {
        p.push_str(&format!(
            " Prominently incorporate the following hook text into the image as the main headline: \"{hook}\"."
        ));
        if let Some(font) = non_blank(input.hook_font_description.as_deref()) {
            p.push_str(&format!(" Render the hook text in {font}"));
            if !font.ends_with('.') {
                p.push('.');
            }
        }
    }
    if let Some(content) = content {
        p.push_str(&format!(
            " Also include the following supporting text, smaller than the headline: \"{content}\"."
        ));
        if let Some(font) = non_blank(input.content_font_description.as_deref()) {
            p.push_str(&format!(" Render the supporting text in {font}"));
            if !font.ends_with('.') {
                p.push('.');
            }
        }
    }

    if hook.is_some() || content.is_some() {
        if let Some((_, Some(directive))) = &style {
            p.push_str(&format!(" Typography guidance for this style: {directive}"));
        }
        p.push_str(" All text must be clearly legible, spelled exactly as given, and well integrated into the composition.");
    }

    p.push_str(" Focus on clarity, engagement, and relevance to the post idea.");
    p
}

// ---------- viral caption ----------

pub fn viral_caption_schema() -> Value {
    object_schema(&[
        ("viralCaption", "A highly engaging and viral caption, 280 characters or less."),
        ("viralHashtags", "3-5 relevant and trending viral hashtags, space-separated (e.g., #tech #ai #innovation)."),
    ])
}

pub fn viral_caption(input: &ViralCaptionInput) -> Instruction {
    let system = "You are an expert social media marketing strategist specializing in creating viral content for platforms like Instagram and Twitter/X.
Your goal is to craft a compelling caption and select highly effective hashtags based on the provided post details.".to_string();

    let mut details = format!(
        "Post Details:\n- Niche: {}\n- Post Idea: {}\n",
        input.niche.trim(),
        input.post_idea.trim()
    );
    if let Some(hook) = non_blank(input.hook_text.as_deref()) {
        details.push_str(&format!("- Hook: \"{hook}\"\n"));
    }
    if let Some(content) = non_blank(input.content_text.as_deref()) {
        details.push_str(&format!("- Content: \"{content}\"\n"));
    }
    if let Some((name, _)) = resolve_style(input.image_style.as_deref()) {
        details.push_str(&format!("- Image Style: {name}\n"));
    }

    let user = format!(
"{details}
Instructions:
1.  Generate a highly engaging and viral caption.
    - The caption MUST be concise and impactful, 280 characters or less.
    - It should be attention-grabbing and encourage interaction (likes, comments, shares).
2.  Provide 3-5 relevant and trending viral hashtags.
    - Hashtags should be space-separated (e.g., #innovation #futuretech #socialmedia).
    - Choose hashtags that will maximize reach and visibility for the given niche and post idea.

Output the viralCaption and viralHashtags in the specified format.
Focus on creating content that has a high potential to go viral."
    );

    Instruction { system, user, developer: Some(json_contract().to_string()) }
}

// ---------- legacy prompt suggestion ----------

pub fn suggest_prompt_schema() -> Value {
    object_schema(&[(
        "promptSuggestion",
        "A suggested prompt for generating an image based on the selected niche.",
    )])
}

pub fn suggest_prompt(input: &SuggestPromptInput) -> Instruction {
    Instruction {
        system: "You are an AI prompt engineer specializing in generating prompts for text-to-image models.".into(),
        user: format!(
"Based on the selected niche provided by the user, suggest a prompt that would produce a visually appealing image.
The prompt should be descriptive and specific.

Selected Niche: {}",
            input.niche.trim()
        ),
        developer: Some(json_contract().to_string()),
    }
}
