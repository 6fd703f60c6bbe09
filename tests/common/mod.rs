#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use niche_studio::actions::Actions;
use niche_studio::config::Config;
use niche_studio::flows::FlowContext;
use niche_studio::provider::Provider;
use niche_studio::studio::Studio;
use niche_studio::wire::{Flow, ImageRequest, MediaReply, TextRequest};

pub const PNG_URI: &str = "data:image/png;base64,aGVsbG8=";

/// Records every request and answers from a script, or with canned defaults.
#[derive(Default)]
pub struct FakeProvider {
    pub text_calls: Mutex<Vec<TextRequest>>,
    pub image_calls: Mutex<Vec<ImageRequest>>,
    text_replies: Mutex<VecDeque<Result<Value, String>>>,
    image_replies: Mutex<VecDeque<Result<MediaReply, String>>>,
}

impl FakeProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_text(&self, reply: Result<Value, &str>) {
        self.text_replies.lock().unwrap().push_back(reply.map_err(str::to_string));
    }

    pub fn push_image(&self, reply: Result<MediaReply, &str>) {
        self.image_replies.lock().unwrap().push_back(reply.map_err(str::to_string));
    }

    pub fn text_count(&self) -> usize {
        self.text_calls.lock().unwrap().len()
    }

    pub fn image_count(&self) -> usize {
        self.image_calls.lock().unwrap().len()
    }

    pub fn last_image_prompt(&self) -> String {
        self.image_calls.lock().unwrap().last().map(|r| r.prompt.clone()).unwrap_or_default()
    }
}

fn default_text(flow: Flow) -> Value {
    match flow {
        Flow::HookContent => json!({ "hook": "Default hook", "content": "Default content." }),
        Flow::ViralCaption => json!({ "viralCaption": "Default caption", "viralHashtags": "#a #b #c" }),
        Flow::SuggestPrompt => json!({ "promptSuggestion": "A neon city at dusk" }),
        Flow::Image => json!({}),
    }
}

#[async_trait]
impl Provider for FakeProvider {
    async fn generate_json(&self, req: &TextRequest) -> Result<Value> {
        self.text_calls.lock().unwrap().push(req.clone());
        match self.text_replies.lock().unwrap().pop_front() {
            Some(Ok(v)) => Ok(v),
            Some(Err(e)) => Err(anyhow!(e)),
            None => Ok(default_text(req.flow)),
        }
    }

    async fn generate_image(&self, req: &ImageRequest) -> Result<MediaReply> {
        self.image_calls.lock().unwrap().push(req.clone());
        match self.image_replies.lock().unwrap().pop_front() {
            Some(Ok(m)) => Ok(m),
            Some(Err(e)) => Err(anyhow!(e)),
            None => Ok(MediaReply { url: Some(PNG_URI.into()), text: None }),
        }
    }
}

pub fn actions(fake: &Arc<FakeProvider>) -> Actions {
    Actions::new(FlowContext::new(fake.clone()))
}

pub fn studio(fake: &Arc<FakeProvider>) -> Studio {
    Studio::new(actions(fake), &Config::default())
}

/// Studio with a niche and post idea already filled in.
pub fn ready_studio(fake: &Arc<FakeProvider>) -> Studio {
    let mut s = studio(fake);
    s.select_niche_by_id("web-dev").unwrap();
    s.set_post_idea("Ship faster with edge functions");
    s
}
