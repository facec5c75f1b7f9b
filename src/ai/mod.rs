/// AI module for XHS Copilot
///
/// This module wraps the two hosted generative models the app depends on: a text model
/// that drafts the structured post and an image model that paints the cover variations.
///
/// # Architecture
///
/// - `gemini` - Gemini REST wire types and the reqwest-backed `GeminiBackend`
/// - `content` - Content generation client (idea → `GeneratedPost`)
/// - `images` - Image generation client (prompt → styled cover variations)
///
/// # Usage
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use xhs_copilot::ai::{ContentClient, GeminiBackend};
/// use xhs_copilot::config::AppConfig;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = AppConfig::from_env();
/// let backend = Arc::new(GeminiBackend::from_config(&config));
/// let post = ContentClient::new(backend, &config.text_model)
///     .generate_text("手冲咖啡教程")
///     .await?;
/// # Ok(())
/// # }
/// ```
mod content;
mod gemini;
mod images;

use async_trait::async_trait;

pub use content::{ContentClient, POST_SCHEMA, TEXT_TEMPERATURE, system_instruction};
pub use gemini::{
    Candidate, Content, GeminiBackend, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, ImageConfig, InlineData, Part,
};
pub use images::{
    COVER_ASPECT_RATIO, ImageClient, STYLE_VARIATIONS, style_for, styled_prompt,
};

/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "生成过程中发生错误，请重试。";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("No text returned from Gemini")]
    EmptyResponse,

    #[error("Generated post did not match the expected structure: {0}")]
    SchemaParse(String),

    #[error("No image data found")]
    NoImageData,

    #[error("Failed to generate any images.")]
    AllImagesFailed,

    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("{message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },
}

impl GenerationError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// Text for the error panel: the error's own message, or the generic fallback.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            status: err.status().map(|status| status.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::SchemaParse(err.to_string())
    }
}

pub type GenerationResult<T> = Result<T, GenerationError>;

/// A hosted model endpoint that answers `generateContent` requests.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GenerationResult<GenerateContentResponse>;
}
