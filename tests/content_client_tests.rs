//! Integration tests for the content generation client

mod common;

use common::{COFFEE_POST_JSON, Scripted, ScriptedBackend, TEXT_MODEL};
use std::sync::Arc;
use xhs_copilot::ai::{ContentClient, GenerateContentResponse, GenerationError, TEXT_TEMPERATURE};

fn client(backend: &Arc<ScriptedBackend>) -> ContentClient {
    ContentClient::new(backend.clone(), TEXT_MODEL)
}

#[tokio::test]
async fn test_generate_text_decodes_post() {
    let backend = Arc::new(ScriptedBackend::new(|_, _| {
        Scripted::ok(GenerateContentResponse::from_text(COFFEE_POST_JSON))
    }));

    let post = client(&backend).generate_text("手冲咖啡教程").await.unwrap();

    assert_eq!(post.title, "☕【新手必看】3分钟学会手冲咖啡");
    assert_eq!(post.tags, vec!["咖啡", "新手教程"]);
    assert_eq!(post.image_prompt, "a cup of coffee, morning light");

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].model, TEXT_MODEL);
    assert_eq!(calls[0].request.prompt_text(), "手冲咖啡教程");
    let config = calls[0].request.generation_config.clone().unwrap();
    assert_eq!(config.temperature, Some(TEXT_TEMPERATURE));
    assert!(config.response_schema.is_some());
    assert!(calls[0].request.system_instruction.is_some());
}

#[tokio::test]
async fn test_missing_text_is_empty_response() {
    let backend = Arc::new(ScriptedBackend::new(|_, _| {
        Scripted::ok(GenerateContentResponse::default())
    }));
    let err = client(&backend).generate_text("idea").await.unwrap_err();
    assert_eq!(err, GenerationError::EmptyResponse);

    let backend = Arc::new(ScriptedBackend::new(|_, _| {
        Scripted::ok(GenerateContentResponse::from_text("   "))
    }));
    let err = client(&backend).generate_text("idea").await.unwrap_err();
    assert_eq!(err, GenerationError::EmptyResponse);
}

#[tokio::test]
async fn test_malformed_json_is_schema_failure() {
    let backend = Arc::new(ScriptedBackend::new(|_, _| {
        Scripted::ok(GenerateContentResponse::from_text(
            r#"{"title":"t","content":"c","tags":["a"]}"#,
        ))
    }));

    let err = client(&backend).generate_text("idea").await.unwrap_err();
    assert!(matches!(err, GenerationError::SchemaParse(_)));
}

#[tokio::test]
async fn test_transport_failure_propagates_without_retry() {
    let backend = Arc::new(ScriptedBackend::new(|_, _| {
        Scripted::err(GenerationError::Transport {
            status: Some(503),
            message: "UNAVAILABLE: overloaded".to_string(),
        })
    }));

    let err = client(&backend).generate_text("idea").await.unwrap_err();

    assert_eq!(
        err,
        GenerationError::Transport {
            status: Some(503),
            message: "UNAVAILABLE: overloaded".to_string(),
        }
    );
    assert_eq!(backend.calls().len(), 1);
}
