//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Remote learning content over the completion adapter with wiremock
//! - Fallback to static content when the endpoint fails
//! - Strategy selection from configuration

use std::sync::Arc;

use ai_core::CompletionConfig;
use application::ports::{CompletionPort, LearningContentPort};
use application::services::learning_content_strategy;
use domain::vocabulary::{advice_templates, words_for};
use domain::{Difficulty, LearnerLevel};
use infrastructure::CompletionAdapter;
use secrecy::SecretString;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion_config(base_url: &str) -> CompletionConfig {
    CompletionConfig {
        api_key: Some(SecretString::from("sk-test")),
        base_url: base_url.to_string(),
        timeout_ms: 5000,
        ..Default::default()
    }
}

fn content_for(config: &CompletionConfig) -> Arc<dyn LearningContentPort> {
    let completion = CompletionAdapter::from_config(config)
        .unwrap()
        .map(|adapter| Arc::new(adapter) as Arc<dyn CompletionPort>);
    learning_content_strategy(completion)
}

fn chat_reply(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

// ============================================================================
// Remote learning content
// ============================================================================

#[tokio::test]
async fn advice_comes_from_completion_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-3.5-turbo",
            "max_tokens": 100,
            "messages": [
                {"role": "system", "content": "You are a helpful English learning assistant for children. Provide simple, encouraging feedback."},
                {"role": "user", "content": "The child just learned the word \"star\". Give a short, encouraging message and a simple example sentence. Keep it under 50 words."}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(
            "Amazing! \"Star\" shines bright. The star twinkles at night.",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let content = content_for(&completion_config(&mock_server.uri()));
    let advice = content
        .learning_advice("star", &LearnerLevel::default())
        .await;

    assert!(advice.success);
    assert_eq!(
        advice.advice,
        "Amazing! \"Star\" shines bright. The star twinkles at night."
    );
}

#[tokio::test]
async fn next_word_is_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({ "max_tokens": 10 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(" Butterfly \n")))
        .mount(&mock_server)
        .await;

    let content = content_for(&completion_config(&mock_server.uri()));
    let learned = vec!["cat".to_string()];
    let word = content.next_word(&learned, Difficulty::Medium).await;

    assert!(word.success);
    assert_eq!(word.word, "butterfly");
}

#[tokio::test]
async fn server_error_falls_back_to_static_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let content = content_for(&completion_config(&mock_server.uri()));

    let advice = content
        .learning_advice("fish", &LearnerLevel::default())
        .await;
    assert!(advice.success);
    assert!(advice_templates("fish").contains(&advice.advice));

    let word = content.next_word(&[], Difficulty::Hard).await;
    assert!(words_for(Difficulty::Hard).contains(&word.word.as_str()));
}

#[tokio::test]
async fn rate_limit_falls_back_to_static_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let content = content_for(&completion_config(&mock_server.uri()));
    let word = content.next_word(&[], Difficulty::Easy).await;

    assert!(words_for(Difficulty::Easy).contains(&word.word.as_str()));
}

// ============================================================================
// Strategy selection
// ============================================================================

#[tokio::test]
async fn placeholder_key_never_calls_the_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("never")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = CompletionConfig {
        api_key: Some(SecretString::from("YOUR_OPENAI_API_KEY")),
        base_url: mock_server.uri(),
        ..Default::default()
    };
    let content = content_for(&config);

    let advice = content
        .learning_advice("ball", &LearnerLevel::new("intermediate"))
        .await;
    assert!(advice_templates("ball").contains(&advice.advice));
}
