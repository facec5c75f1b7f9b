use serde::{Deserialize, Serialize};

/// Structured post returned by the text model.
///
/// Every field is required; a payload missing any of them fails to decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub image_prompt: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadingStage {
    #[default]
    Idle,
    GeneratingText,
    GeneratingImage,
    Complete,
    Error,
}

impl LoadingStage {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::GeneratingText | Self::GeneratingImage)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_decodes_camel_case() {
        let raw = r##"{"title":"t","content":"c","tags":["a","#b"],"imagePrompt":"p"}"##;
        let post: GeneratedPost = serde_json::from_str(raw).unwrap();
        assert_eq!(post.image_prompt, "p");
        assert_eq!(post.tags, vec!["a".to_string(), "#b".to_string()]);
    }

    #[test]
    fn test_post_rejects_missing_fields() {
        let raw = r#"{"title":"t","content":"c","tags":[]}"#;
        assert!(serde_json::from_str::<GeneratedPost>(raw).is_err());
    }

    #[test]
    fn test_loading_stage_flags() {
        assert!(LoadingStage::GeneratingText.is_loading());
        assert!(LoadingStage::GeneratingImage.is_loading());
        assert!(!LoadingStage::Idle.is_loading());
        assert!(LoadingStage::Error.is_terminal());
        assert!(!LoadingStage::GeneratingImage.is_terminal());
        assert_eq!(
            serde_json::to_string(&LoadingStage::GeneratingText).unwrap(),
            "\"GENERATING_TEXT\""
        );
    }
}
