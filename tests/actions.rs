mod common;

use common::{actions, FakeProvider};
use niche_studio::actions::{Actions, HOOK_CONTENT_FAILED, SUGGEST_FAILED};
use niche_studio::errors::StudioError;
use niche_studio::flows::FlowContext;
use niche_studio::log::Artifacts;
use niche_studio::wire::{Flow, HookContentInput, ImageInput, SuggestPromptInput, ViralCaptionInput};
use serde_json::json;

#[tokio::test]
async fn blank_post_idea_never_reaches_provider() {
    let fake = FakeProvider::new();
    let a = actions(&fake);
    let err = a
        .handle_generate_hook_content(&HookContentInput { post_idea: "  ".into(), niche: None })
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::Validation(_)));

    let err = a
        .handle_generate_image(&ImageInput { niche: "AI Solutions".into(), ..Default::default() })
        .await
        .unwrap_err();
    assert_eq!(err, StudioError::Validation("Post idea is required.".into()));

    let err = a
        .handle_generate_viral_caption(&ViralCaptionInput { post_idea: "x".into(), ..Default::default() })
        .await
        .unwrap_err();
    assert_eq!(err, StudioError::Validation("Niche is required.".into()));

    assert_eq!(fake.text_count() + fake.image_count(), 0);
}

#[tokio::test]
async fn provider_errors_become_generic_messages() {
    let fake = FakeProvider::new();
    fake.push_text(Err("HTTP 500: secret stack trace"));
    let err = actions(&fake)
        .handle_generate_hook_content(&HookContentInput { post_idea: "idea".into(), niche: None })
        .await
        .unwrap_err();
    assert_eq!(err, StudioError::Generation(HOOK_CONTENT_FAILED.into()));
    assert!(!err.user_message().contains("secret"));
}

#[tokio::test]
async fn schema_mismatch_is_a_generation_failure() {
    let fake = FakeProvider::new();
    fake.push_text(Ok(json!({ "suggestion": "wrong key" })));
    let err = actions(&fake)
        .handle_suggest_prompt(&SuggestPromptInput { niche: "Web Development".into() })
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), SUGGEST_FAILED);
}

#[tokio::test]
async fn suggest_prompt_declares_its_schema() {
    let fake = FakeProvider::new();
    let out = actions(&fake)
        .handle_suggest_prompt(&SuggestPromptInput { niche: "AI Solutions".into() })
        .await
        .unwrap();
    assert_eq!(out.prompt_suggestion, "A neon city at dusk");

    let req = fake.text_calls.lock().unwrap()[0].clone();
    assert_eq!(req.flow, Flow::SuggestPrompt);
    assert_eq!(req.output_schema["required"], json!(["promptSuggestion"]));
    assert!(req.instruction.user.contains("Selected Niche: AI Solutions"));
}

#[tokio::test]
async fn artifacts_are_written_per_transaction() {
    let fake = FakeProvider::new();
    let dir = tempfile::tempdir().unwrap();
    let a = Actions::new(FlowContext {
        provider: fake.clone(),
        artifacts: Artifacts { root: dir.path().to_path_buf(), save_request: true, save_response: true },
        safety: Vec::new(),
    });
    a.handle_generate_hook_content(&HookContentInput { post_idea: "idea".into(), niche: None })
        .await
        .unwrap();

    let tx = fake.text_calls.lock().unwrap()[0].transaction.id;
    let tx_dir = dir.path().join("tx").join(tx.to_string());
    let req: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(tx_dir.join("hook_content.request.json")).unwrap()).unwrap();
    assert_eq!(req["flow"], "hook_content");
    let resp: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(tx_dir.join("hook_content.response.json")).unwrap()).unwrap();
    assert_eq!(resp["hook"], "Default hook");
}
