//! # Translator Integration Tests
//!
//! These tests run the `Translator` against a mocked chat-completions API to
//! verify prompt dispatch, response parsing, and upstream error mapping.

use anyhow::Result;
use httpmock::{Method, MockServer};
use lexibridge::providers::ai::deepseek::DeepSeekProvider;
use lexibridge::{TranslateError, Translator};
use serde_json::json;

fn mock_translator(server: &MockServer) -> Result<Translator> {
    let provider = DeepSeekProvider::new(
        Some(server.url("/v1/chat/completions")),
        "test_api_key".to_string(),
        None,
    )?;
    Ok(Translator::new(Box::new(provider)))
}

fn chat_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
}

#[tokio::test]
async fn test_translate_word_happy_path() -> Result<()> {
    let server = MockServer::start();
    let chat_mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer test_api_key")
            .body_contains("hello")
            .body_contains("deepseek-chat");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(chat_body(
                "Chinese: 你好\nEnglish: greeting\nPhonetic: /hɛˈloʊ/",
            ));
    });

    let translator = mock_translator(&server)?;
    let translation = translator.translate_word("hello").await?;

    assert_eq!(translation.chinese, "你好");
    assert_eq!(translation.english, "greeting");
    assert_eq!(translation.phonetic.as_deref(), Some("/hɛˈloʊ/"));
    chat_mock.assert();

    Ok(())
}

#[tokio::test]
async fn test_translate_word_api_error_carries_status() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::POST).path("/v1/chat/completions");
        then.status(429).body("rate limited");
    });

    let translator = mock_translator(&server)?;
    let err = translator
        .translate_word("hello")
        .await
        .expect_err("expected upstream failure");

    match &err {
        TranslateError::AiApi { status, body } => {
            assert_eq!(*status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("429"));

    Ok(())
}

#[tokio::test]
async fn test_translate_word_incomplete_response_fails() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::POST).path("/v1/chat/completions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(chat_body("Chinese: 你好\nPhonetic: /hɛˈloʊ/"));
    });

    let translator = mock_translator(&server)?;
    let err = translator
        .translate_word("hello")
        .await
        .expect_err("expected incomplete response to fail");

    assert!(matches!(err, TranslateError::Incomplete("English")));

    Ok(())
}

#[tokio::test]
async fn test_translate_word_tolerates_missing_phonetic() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::POST).path("/v1/chat/completions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(chat_body("Chinese: 苹果\nEnglish: a common round fruit"));
    });

    let translator = mock_translator(&server)?;
    let translation = translator.translate_word("apple").await?;

    assert_eq!(translation.chinese, "苹果");
    assert!(translation.phonetic.is_none());

    Ok(())
}
