use super::{
    GenerateContentRequest, GenerationConfig, GenerationError, GenerationResult, GenerativeBackend,
};
use crate::types::GeneratedPost;
use once_cell::sync::Lazy;
use serde_json::{Value, json};
use std::sync::Arc;

/// Favors creative variation over determinism.
pub const TEXT_TEMPERATURE: f64 = 0.85;

/// Response schema the text model must satisfy.
pub static POST_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "A viral Xiaohongshu title using emojis, 【】 brackets and numbers."
            },
            "content": {
                "type": "STRING",
                "description": "Post body split into slides by a line containing only '---'. Friendly, emoji rich, with **keyword** highlights."
            },
            "tags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "5-10 relevant hashtags, most relevant first"
            },
            "imagePrompt": {
                "type": "STRING",
                "description": "A detailed English prompt for a lifestyle cover photo: subject, lighting, composition."
            }
        },
        "required": ["title", "content", "tags", "imagePrompt"]
    })
});

/// Persona and formatting rules sent alongside every idea.
pub fn system_instruction(idea: &str) -> String {
    format!(
        r#"You are a leading Xiaohongshu (Little Red Book) creator with over 100k followers, famous for step-by-step "保姆级" tutorials.

Turn the user's idea into a multi-page carousel post (图文).

Rules:
1. Actionable steps only, no filler.
2. Separate pages with a line containing only '---' (three dashes).
   - First page: hook the reader and state the problem or the payoff.
   - Middle pages: one major step per page.
   - Last page: recap plus a call to action.
   Aim for 4-6 pages.
3. Wrap key tools, numbers and results in double asterisks (**keyword**); they are highlighted in the final design.
4. The title is high-emotion clickbait with emojis, 【】 brackets and numbers.
5. Provide 5-10 tags, most relevant first.
6. Tone: enthusiastic, authentic, detailed; XHS slang is welcome (绝绝子, 亲测有效, 避雷).
7. Answer with JSON matching the response schema: title, content, tags, imagePrompt.

Input idea: "{idea}""#
    )
}

/// Turns a raw idea into a `GeneratedPost` with a single structured request.
#[derive(Clone)]
pub struct ContentClient {
    backend: Arc<dyn GenerativeBackend>,
    model: String,
}

impl ContentClient {
    pub fn new(backend: Arc<dyn GenerativeBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub fn build_request(idea: &str) -> GenerateContentRequest {
        GenerateContentRequest::from_prompt(idea)
            .with_system_instruction(system_instruction(idea))
            .with_config(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(POST_SCHEMA.clone()),
                temperature: Some(TEXT_TEMPERATURE),
                image_config: None,
            })
    }

    /// One backend call, no retry. Any failure goes straight back to the caller.
    pub async fn generate_text(&self, idea: &str) -> GenerationResult<GeneratedPost> {
        let request = Self::build_request(idea);
        tracing::debug!(model = %self.model, "requesting post text");

        let response = self
            .backend
            .generate(&self.model, &request)
            .await
            .inspect_err(|err| tracing::error!(%err, "text generation failed"))?;

        let text = response
            .text()
            .filter(|text| !text.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        decode_post(&text)
    }
}

/// Validating decode of the model's JSON into a post.
pub(crate) fn decode_post(text: &str) -> GenerationResult<GeneratedPost> {
    let post = serde_json::from_str::<GeneratedPost>(text.trim())?;
    tracing::debug!(
        title = %post.title,
        tags = post.tags.len(),
        "decoded generated post"
    );
    Ok(post)
}
