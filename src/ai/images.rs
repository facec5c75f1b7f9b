use super::{
    GenerateContentRequest, GenerationConfig, GenerationError, GenerationResult,
    GenerativeBackend, ImageConfig,
};
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;

pub const COVER_ASPECT_RATIO: &str = "3:4";

/// Style suffixes cycled across variations so each cover looks different.
pub const STYLE_VARIATIONS: [&str; 5] = [
    "cinematic lighting, shallow depth of field, 4k resolution, highly detailed",
    "bright natural sunlight, minimalist aesthetic, clean composition, high quality",
    "warm cozy atmosphere, soft shadows, film grain, authentic vibe",
    "studio lighting, sharp focus, professional product photography style",
    "POV shot, candid lifestyle, iPhone photography style, authentic",
];

pub fn style_for(index: usize) -> &'static str {
    STYLE_VARIATIONS[index % STYLE_VARIATIONS.len()]
}

pub fn styled_prompt(base_prompt: &str, index: usize) -> String {
    format!("{base_prompt}. Style: {}", style_for(index))
}

/// Fans one prompt out into several styled image requests.
#[derive(Clone)]
pub struct ImageClient {
    backend: Arc<dyn GenerativeBackend>,
    model: String,
}

impl ImageClient {
    pub fn new(backend: Arc<dyn GenerativeBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub fn build_request(prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest::from_prompt(prompt).with_config(GenerationConfig {
            image_config: Some(ImageConfig {
                aspect_ratio: COVER_ASPECT_RATIO.to_string(),
            }),
            ..GenerationConfig::default()
        })
    }

    /// Generates a single image and returns it as a data URI.
    pub async fn generate_single(&self, prompt: &str) -> GenerationResult<String> {
        let request = Self::build_request(prompt);
        let response = self.backend.generate(&self.model, &request).await?;
        response
            .first_inline_data()
            .map(|data| data.to_data_uri())
            .ok_or(GenerationError::NoImageData)
    }

    /// Dispatches `count` styled requests at once and waits for every one to settle.
    ///
    /// Successful images are returned in the order they finished. The call only fails
    /// when none succeed.
    pub async fn generate_images(
        &self,
        base_prompt: &str,
        count: usize,
    ) -> GenerationResult<Vec<String>> {
        tracing::info!(count, model = %self.model, "dispatching image variations");

        let mut pending: FuturesUnordered<_> = (0..count)
            .map(|index| {
                let prompt = styled_prompt(base_prompt, index);
                async move { (index, self.generate_single(&prompt).await) }
            })
            .collect();

        let mut images = Vec::with_capacity(count);
        while let Some((index, outcome)) = pending.next().await {
            match outcome {
                Ok(uri) => {
                    tracing::debug!(index, "image variation ready");
                    images.push(uri);
                }
                Err(err) => tracing::warn!(index, %err, "image variation failed"),
            }
        }

        if images.is_empty() {
            tracing::error!(count, "every image variation failed");
            return Err(GenerationError::AllImagesFailed);
        }

        tracing::info!(succeeded = images.len(), count, "image variations settled");
        Ok(images)
    }
}
