//! Generation session state and the orchestrator that drives it.
//!
//! A session runs `Idle → GeneratingText → GeneratingImage → Complete`, and any
//! loading stage may drop to `Error`. The orchestrator is the only writer; renderers
//! observe snapshots through a `watch` channel.

use crate::ai::{
    ContentClient, FALLBACK_ERROR_MESSAGE, GenerationError, GenerativeBackend, ImageClient,
};
use crate::config::AppConfig;
use crate::types::{GeneratedPost, LoadingStage};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use time::OffsetDateTime;
use tokio::sync::watch;

/// Number of cover variations requested per session.
pub const IMAGE_VARIATIONS: usize = 5;

pub const TEXT_STAGE_LABEL: &str = "正在构思干货文案...";
pub const IMAGE_STAGE_LABEL: &str = "正在绘制 5 张美图...";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationSession {
    pub idea: String,
    pub post: Option<GeneratedPost>,
    pub images: Vec<String>,
    pub stage: LoadingStage,
    pub error: Option<String>,
    pub started_at: Option<OffsetDateTime>,
}

impl GenerationSession {
    /// Fresh session for `idea`; nothing from an earlier session carries over.
    pub fn begin(idea: &str) -> Self {
        Self {
            idea: idea.to_string(),
            post: None,
            images: Vec::new(),
            stage: LoadingStage::GeneratingText,
            error: None,
            started_at: Some(OffsetDateTime::now_utc()),
        }
    }

    pub fn text_ready(&mut self, post: GeneratedPost) {
        if self.stage != LoadingStage::GeneratingText {
            tracing::warn!(stage = ?self.stage, "post text arrived outside the text stage");
            return;
        }
        self.post = Some(post);
        self.stage = LoadingStage::GeneratingImage;
    }

    pub fn images_ready(&mut self, images: Vec<String>) {
        if self.stage != LoadingStage::GeneratingImage {
            tracing::warn!(stage = ?self.stage, "images arrived outside the image stage");
            return;
        }
        self.images = images;
        self.stage = LoadingStage::Complete;
    }

    /// Moves to `Error`. A post committed by a finished text stage stays visible.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.stage = LoadingStage::Error;
    }

    pub fn is_loading(&self) -> bool {
        self.stage.is_loading()
    }

    pub fn stage_label(&self) -> Option<&'static str> {
        match self.stage {
            LoadingStage::GeneratingText => Some(TEXT_STAGE_LABEL),
            LoadingStage::GeneratingImage => Some(IMAGE_STAGE_LABEL),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Blank idea: nothing happened.
    Ignored,
    /// Another generation is still running; this trigger was rejected.
    Busy,
    /// The session reached a terminal stage.
    Finished(LoadingStage),
}

/// Clears the in-flight flag however `trigger` exits. A trigger dropped mid-flight
/// leaves its session in `Error` rather than stuck in a loading stage.
struct InFlightGuard<'a> {
    in_flight: &'a AtomicBool,
    state: &'a watch::Sender<GenerationSession>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|session| {
            if !session.is_loading() {
                return false;
            }
            tracing::warn!(stage = ?session.stage, "generation cancelled before finishing");
            session.fail(FALLBACK_ERROR_MESSAGE);
            true
        });
        self.in_flight.store(false, Ordering::Release);
    }
}

pub struct Orchestrator {
    content: ContentClient,
    images: ImageClient,
    image_count: usize,
    state: watch::Sender<GenerationSession>,
    in_flight: AtomicBool,
}

impl Orchestrator {
    pub fn new(content: ContentClient, images: ImageClient) -> Self {
        let (state, _) = watch::channel(GenerationSession::default());
        Self {
            content,
            images,
            image_count: IMAGE_VARIATIONS,
            state,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_backend(backend: Arc<dyn GenerativeBackend>, config: &AppConfig) -> Self {
        Self::new(
            ContentClient::new(backend.clone(), &config.text_model),
            ImageClient::new(backend, &config.image_model),
        )
    }

    pub fn subscribe(&self) -> watch::Receiver<GenerationSession> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> GenerationSession {
        self.state.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Runs one full generation for `idea`: post text first, then the cover variations.
    pub async fn trigger(&self, idea: &str) -> TriggerOutcome {
        if idea.trim().is_empty() {
            return TriggerOutcome::Ignored;
        }
        if self.in_flight.swap(true, Ordering::AcqRel) {
            tracing::warn!("generation already in progress; ignoring new trigger");
            return TriggerOutcome::Busy;
        }
        let _guard = InFlightGuard {
            in_flight: &self.in_flight,
            state: &self.state,
        };

        self.state.send_replace(GenerationSession::begin(idea));
        tracing::info!("generating post text");

        let post = match self.content.generate_text(idea).await {
            Ok(post) => post,
            Err(err) => return self.fail(err),
        };
        let image_prompt = post.image_prompt.clone();
        self.state.send_modify(|session| session.text_ready(post));
        tracing::info!(count = self.image_count, "generating cover images");

        match self
            .images
            .generate_images(&image_prompt, self.image_count)
            .await
        {
            Ok(images) => {
                self.state.send_modify(|session| session.images_ready(images));
                tracing::info!("generation complete");
                TriggerOutcome::Finished(LoadingStage::Complete)
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&self, err: GenerationError) -> TriggerOutcome {
        tracing::error!(%err, "generation failed");
        let message = err.user_message();
        self.state.send_modify(|session| session.fail(message));
        TriggerOutcome::Finished(LoadingStage::Error)
    }
}
