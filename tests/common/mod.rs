//! Scripted in-memory backend shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Notify;
use xhs_copilot::ai::{
    GenerateContentRequest, GenerateContentResponse, GenerationError, GenerationResult,
    GenerativeBackend, STYLE_VARIATIONS,
};
use xhs_copilot::config::AppConfig;

pub const TEXT_MODEL: &str = "test-text-model";
pub const IMAGE_MODEL: &str = "test-image-model";

pub const COFFEE_POST_JSON: &str = r#"{
    "title": "☕【新手必看】3分钟学会手冲咖啡",
    "content": "Intro text\n---\nStep 1 text\n---\nOutro text",
    "tags": ["咖啡", "新手教程"],
    "imagePrompt": "a cup of coffee, morning light"
}"#;

pub fn test_config() -> AppConfig {
    AppConfig {
        api_key: Some("test-key".to_string()),
        text_model: TEXT_MODEL.to_string(),
        image_model: IMAGE_MODEL.to_string(),
        ..AppConfig::default()
    }
}

/// What the backend does with one call.
pub struct Scripted {
    pub delay: Duration,
    pub result: GenerationResult<GenerateContentResponse>,
}

impl Scripted {
    pub fn ok(response: GenerateContentResponse) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(response),
        }
    }

    pub fn err(error: GenerationError) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(error),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub model: String,
    pub request: GenerateContentRequest,
}

type Responder = Box<dyn Fn(&str, &GenerateContentRequest) -> Scripted + Send + Sync>;

pub struct ScriptedBackend {
    responder: Responder,
    calls: Mutex<Vec<RecordedCall>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    text_gate: Option<Notify>,
}

impl ScriptedBackend {
    pub fn new(
        responder: impl Fn(&str, &GenerateContentRequest) -> Scripted + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            text_gate: None,
        }
    }

    /// Text calls block until `release_text` is called.
    pub fn gated(mut self) -> Self {
        self.text_gate = Some(Notify::new());
        self
    }

    pub fn release_text(&self) {
        if let Some(gate) = &self.text_gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, model: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.model == model)
            .collect()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GenerationResult<GenerateContentResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            request: request.clone(),
        });
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if model == TEXT_MODEL
            && let Some(gate) = &self.text_gate
        {
            gate.notified().await;
        }

        let scripted = (self.responder)(model, request);
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        scripted.result
    }
}

/// Index of the style suffix a prompt was built with.
pub fn style_index(prompt: &str) -> usize {
    STYLE_VARIATIONS
        .iter()
        .position(|style| prompt.ends_with(style))
        .expect("prompt carries a style suffix")
}

pub fn image_response(label: &str) -> GenerateContentResponse {
    GenerateContentResponse::from_inline_data("image/png", label)
}

pub fn image_uri(label: &str) -> String {
    format!("data:image/png;base64,{label}")
}

/// Text model answers with the coffee post, image model with one image per style.
pub fn happy_backend() -> ScriptedBackend {
    ScriptedBackend::new(|model, request| {
        if model == TEXT_MODEL {
            Scripted::ok(GenerateContentResponse::from_text(COFFEE_POST_JSON))
        } else {
            let index = style_index(&request.prompt_text());
            Scripted::ok(image_response(&format!("img{index}")))
        }
    })
}
