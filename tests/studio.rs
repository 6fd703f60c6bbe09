mod common;

use common::{ready_studio, studio, FakeProvider, PNG_URI};
use niche_studio::actions::{CAPTION_FAILED, HOOK_CONTENT_FAILED, IMAGE_FAILED};
use niche_studio::errors::StudioError;
use niche_studio::studio::{NoticeLevel, Operation, Phase, PreviewPane, BUSY};
use niche_studio::wire::{HookContentOutput, MediaReply};
use serde_json::json;

#[tokio::test]
async fn hook_content_replaces_both_fields() {
    let fake = FakeProvider::new();
    fake.push_text(Ok(json!({ "hook": "Stop waiting on deploys.", "content": "Edge functions cut latency. Try them today." })));
    let mut s = ready_studio(&fake);
    s.set_hook_text("old hook");

    assert_eq!(s.generate_hook_content().await, Phase::Succeeded);
    assert_eq!(s.draft.hook_text, "Stop waiting on deploys.");
    assert_eq!(s.draft.content_text, "Edge functions cut latency. Try them today.");
    assert!(s.notices().is_empty());

    let req = fake.text_calls.lock().unwrap()[0].clone();
    assert!(req.instruction.system.contains("'Web Development' niche"));
    assert!(req.instruction.user.contains("Post Idea: Ship faster with edge functions"));
}

#[tokio::test]
async fn partial_hook_reply_changes_nothing() {
    let fake = FakeProvider::new();
    fake.push_text(Ok(json!({ "hook": "Only a hook" })));
    let mut s = ready_studio(&fake);
    s.set_hook_text("mine");
    s.set_content_text("also mine");

    assert_eq!(s.generate_hook_content().await, Phase::Failed);
    assert_eq!(s.draft.hook_text, "mine");
    assert_eq!(s.draft.content_text, "also mine");
    let notices = s.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].description, HOOK_CONTENT_FAILED);
}

#[tokio::test]
async fn missing_context_is_caught_before_any_call() {
    let fake = FakeProvider::new();
    let mut s = studio(&fake);
    s.set_post_idea("no niche yet");
    assert_eq!(s.generate_image().await, Phase::Idle);
    assert_eq!(s.generate_hook_content().await, Phase::Idle);

    s.select_niche_by_id("lead-gen").unwrap();
    s.set_post_idea("   ");
    assert_eq!(s.generate_caption().await, Phase::Idle);

    assert_eq!(fake.text_count() + fake.image_count(), 0);
    let titles: Vec<_> = s.take_notices().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, ["Missing Information", "Missing Information", "Context Missing"]);
}

#[tokio::test]
async fn niche_switch_clears_dependent_state() {
    let fake = FakeProvider::new();
    let mut s = ready_studio(&fake);
    s.generate_hook_content().await;
    s.generate_image().await;
    s.generate_caption().await;
    assert!(s.generated.viral_caption.is_some());
    let style = s.draft.style;

    s.select_niche_by_id("motivation").unwrap();
    assert_eq!(s.draft.niche.map(|n| n.id), Some("motivation"));
    assert!(s.draft.post_idea.is_empty());
    assert!(s.draft.hook_text.is_empty());
    assert!(s.draft.content_text.is_empty());
    assert_eq!(s.generated.image_url, None);
    assert_eq!(s.generated.viral_caption, None);
    assert_eq!(s.generated.viral_hashtags, None);
    // form choices that do not belong to a post survive
    assert_eq!(s.draft.style, style);

    // re-selecting the same niche clears too
    s.set_post_idea("again");
    s.select_niche_by_id("motivation").unwrap();
    assert!(s.draft.post_idea.is_empty());
}

#[tokio::test]
async fn identical_requests_are_not_cached() {
    let fake = FakeProvider::new();
    let mut s = ready_studio(&fake);
    s.generate_image().await;
    s.generate_image().await;
    assert_eq!(fake.image_count(), 2);

    s.generate_hook_content().await;
    s.set_hook_text("");
    s.set_content_text("");
    s.generate_hook_content().await;
    assert_eq!(fake.text_count(), 2);

    let calls = fake.image_calls.lock().unwrap();
    assert_eq!(calls[0].prompt, calls[1].prompt);
    assert_ne!(calls[0].transaction.id, calls[1].transaction.id);
}

#[tokio::test]
async fn caption_is_passed_through_untruncated() {
    let fake = FakeProvider::new();
    let long = "x".repeat(400);
    fake.push_text(Ok(json!({ "viralCaption": long, "viralHashtags": "#one" })));
    let mut s = ready_studio(&fake);
    s.generate_image().await;
    assert_eq!(s.generate_caption().await, Phase::Succeeded);
    assert_eq!(s.generated.viral_caption.as_deref().map(str::len), Some(400));
    assert_eq!(s.generated.viral_hashtags.as_deref(), Some("#one"));

    let req = fake.text_calls.lock().unwrap()[0].clone();
    assert!(req.instruction.user.contains("280 characters or less"));
    assert!(req.instruction.user.contains("- Image Style: Neo-Minimalism"));
}

#[tokio::test]
async fn failed_image_keeps_previous_results() {
    let fake = FakeProvider::new();
    let mut s = ready_studio(&fake);
    s.generate_image().await;
    s.generate_caption().await;
    let before = s.generated.clone();

    fake.push_image(Err("503 upstream overloaded"));
    assert_eq!(s.generate_image().await, Phase::Failed);
    assert_eq!(s.generated, before);
    let n = s.take_notices();
    assert_eq!(n[0].title, "Error Generating Image");
    // the upstream detail is logged, not shown
    assert_eq!(n[0].description, IMAGE_FAILED);
}

#[tokio::test]
async fn image_without_media_is_an_error() {
    let fake = FakeProvider::new();
    fake.push_image(Ok(MediaReply { url: None, text: Some("I can only describe it.".into()) }));
    let mut s = ready_studio(&fake);
    assert_eq!(s.generate_image().await, Phase::Failed);
    assert_eq!(s.generated.image_url, None);
    assert_eq!(s.take_notices()[0].description, IMAGE_FAILED);
}

#[tokio::test]
async fn new_image_drops_old_caption() {
    let fake = FakeProvider::new();
    let mut s = ready_studio(&fake);
    s.generate_image().await;
    s.generate_caption().await;
    assert!(s.generated.viral_caption.is_some());

    fake.push_image(Ok(MediaReply { url: Some("data:image/png;base64,AAAA".into()), text: None }));
    s.generate_image().await;
    assert_eq!(s.generated.image_url.as_deref(), Some("data:image/png;base64,AAAA"));
    assert_eq!(s.generated.viral_caption, None);
    assert_eq!(s.generated.viral_hashtags, None);
}

#[tokio::test]
async fn caption_failure_surfaces_notice() {
    let fake = FakeProvider::new();
    let mut s = ready_studio(&fake);
    s.generate_image().await;
    fake.push_text(Err("quota"));
    assert_eq!(s.generate_caption().await, Phase::Failed);
    assert_eq!(s.generated.viral_caption, None);
    assert_eq!(s.take_notices()[0].description, CAPTION_FAILED);
}

#[test]
fn any_loading_blocks_every_generation_and_niche_switch() {
    let fake = FakeProvider::new();
    let mut s = ready_studio(&fake);
    assert!(s.begin_hook_content().is_some());
    assert!(s.is_loading(Operation::HookContent));
    assert!(s.any_loading());

    assert!(s.begin_hook_content().is_none());
    assert!(s.begin_image().is_none());
    assert!(s.begin_caption().is_none());
    assert_eq!(s.select_niche_by_id("motivation"), Err(StudioError::Validation(BUSY.into())));
    assert_eq!(s.draft.niche.map(|n| n.id), Some("web-dev"));
    assert_eq!(s.draft.post_idea, "Ship faster with edge functions");
    // a busy refusal is silent
    assert!(s.notices().is_empty());

    s.finish_hook_content(Ok(HookContentOutput { hook: "h".into(), content: "c".into() }));
    assert_eq!(s.phase(Operation::HookContent), Phase::Succeeded);
    assert!(!s.any_loading());
    assert!(s.begin_image().is_some());
    assert!(s.begin_hook_content().is_none());
}

#[test]
fn late_result_overwrites_current_state() {
    let fake = FakeProvider::new();
    let mut s = ready_studio(&fake);
    let input = s.begin_hook_content().unwrap();
    assert_eq!(input.niche.as_deref(), Some("Web Development"));

    s.set_post_idea("edited while waiting");
    s.finish_hook_content(Ok(HookContentOutput { hook: "late".into(), content: "arrival".into() }));
    assert_eq!(s.draft.hook_text, "late");
    assert_eq!(s.draft.post_idea, "edited while waiting");

    // no request id ties a result to the niche it was asked for
    s.select_niche_by_id("ai-solutions").unwrap();
    s.finish_hook_content(Ok(HookContentOutput { hook: "older".into(), content: "reply".into() }));
    assert_eq!(s.draft.hook_text, "older");
    assert_eq!(s.draft.niche.map(|n| n.id), Some("ai-solutions"));
}

#[test]
fn image_input_carries_fonts_only_for_present_text() {
    let fake = FakeProvider::new();
    let mut s = ready_studio(&fake);
    s.set_hook_font("retro-y2k").unwrap();
    s.set_hook_text("  ");
    s.set_content_text("Latency is a feature.");
    s.select_style_by_id("dark-mode-first").unwrap();

    let input = s.begin_image().unwrap();
    assert_eq!(input.hook_text, None);
    assert_eq!(input.hook_font_description, None);
    assert_eq!(input.content_text.as_deref(), Some("Latency is a feature."));
    assert!(input.content_font_description.unwrap().contains("minimalist sans-serif"));
    assert_eq!(input.image_style.as_deref(), Some("dark-mode-first"));
}

#[tokio::test]
async fn image_prompt_reaches_provider_with_typography() {
    let fake = FakeProvider::new();
    let mut s = ready_studio(&fake);
    s.select_style_by_id("handwritten-overlay").unwrap();
    s.set_hook_text("Edge or bust");
    s.generate_image().await;

    let prompt = fake.last_image_prompt();
    assert!(prompt.contains("'Handwritten + Hand-Drawn Overlay' style"));
    assert!(prompt.contains("handwritten marker or pen lettering"));
    assert!(prompt.contains("\"Edge or bust\""));
    let req = fake.image_calls.lock().unwrap()[0].clone();
    assert_eq!(serde_json::to_value(&req.modalities).unwrap(), json!(["TEXT", "IMAGE"]));
}

#[test]
fn unknown_form_choices_are_rejected() {
    let fake = FakeProvider::new();
    let mut s = studio(&fake);
    assert!(s.select_niche_by_id("cooking").is_err());
    assert!(s.select_style_by_id("baroque").is_err());
    assert!(s.set_content_font("comic-sans").is_err());
    assert!(s.set_hook_font_size(0).is_err());
    assert!(s.set_hook_font_size(40).is_ok());
    assert_eq!(s.draft.hook_font_size, 40);
}

#[tokio::test]
async fn preview_and_caption_pane_follow_state() {
    let fake = FakeProvider::new();
    let mut s = ready_studio(&fake);
    assert!(matches!(s.preview(), PreviewPane::Placeholder { .. }));
    assert!(!s.caption_pane_visible());

    s.set_hook_text("Hook");
    assert!(matches!(s.preview(), PreviewPane::TextOverlay { .. }));

    assert!(s.begin_image().is_some());
    assert_eq!(s.preview(), PreviewPane::Loading);
    assert!(!s.caption_pane_visible());
    s.finish_image(Ok(niche_studio::wire::ImageOutput { image_url: PNG_URI.into() }));

    assert!(s.caption_pane_visible());
    match s.preview() {
        PreviewPane::Image { url, alt } => {
            assert_eq!(url, PNG_URI);
            assert_eq!(alt, "Ship faster with edge functions");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn download_uses_post_idea_slug() {
    let fake = FakeProvider::new();
    let dir = tempfile::tempdir().unwrap();
    let mut s = ready_studio(&fake);
    assert!(s.download(dir.path()).is_err());

    s.generate_image().await;
    let path = s.download(dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "ship-faster-with-edge-functions.png");
    assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    assert_eq!(s.take_notices()[0].level, NoticeLevel::Info);

    s.set_post_idea("");
    assert_eq!(s.download_stem(), "web-development-image");
}
