//! Integration tests for the completion client using WireMock
//!
//! These tests mock the `/chat/completions` HTTP API to verify client
//! behavior without a real language-model endpoint.

use ai_core::{
    CompletionConfig, CompletionEngine, CompletionError, CompletionRequest, OpenAiCompletionClient,
};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

// =============================================================================
// Test Helpers
// =============================================================================

fn config_for_mock(base_url: &str) -> CompletionConfig {
    CompletionConfig {
        api_key: Some(SecretString::from("test-key")),
        model: "test-model".to_string(),
        base_url: base_url.to_string(),
        timeout_ms: 5000,
    }
}

fn chat_success_response(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "model": "test-model",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ]
    })
}

fn advice_request() -> CompletionRequest {
    CompletionRequest::with_system("You are helpful", "Say hi")
        .with_max_tokens(100)
        .with_temperature(0.7)
}

// =============================================================================
// Completion Tests
// =============================================================================

#[tokio::test]
async fn complete_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response("Hi there!")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OpenAiCompletionClient::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create client");

    let response = client.complete(advice_request()).await.unwrap();

    assert_eq!(response.content, "Hi there!");
    assert_eq!(response.model, "test-model");
}

#[tokio::test]
async fn complete_sends_model_messages_and_sampling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-model",
            "messages": [
                {"role": "system", "content": "You are helpful"},
                {"role": "user", "content": "Say hi"}
            ],
            "max_tokens": 100
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response("ok")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OpenAiCompletionClient::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create client");

    assert!(client.complete(advice_request()).await.is_ok());
}

#[tokio::test]
async fn complete_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OpenAiCompletionClient::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create client");

    let err = client.complete(advice_request()).await.unwrap_err();
    assert!(matches!(err, CompletionError::ServerError(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn complete_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = OpenAiCompletionClient::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create client");

    let err = client.complete(advice_request()).await.unwrap_err();
    assert!(matches!(err, CompletionError::RateLimited));
}

#[tokio::test]
async fn complete_invalid_json_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = OpenAiCompletionClient::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create client");

    let err = client.complete(advice_request()).await.unwrap_err();
    assert!(matches!(err, CompletionError::InvalidResponse(_)));
}

#[tokio::test]
async fn complete_without_choices_is_invalid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&mock_server)
        .await;

    let client = OpenAiCompletionClient::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create client");

    let err = client.complete(advice_request()).await.unwrap_err();
    assert!(matches!(err, CompletionError::InvalidResponse(_)));
}

#[tokio::test]
async fn complete_connection_refused() {
    // Nothing listens on port 1
    let client = OpenAiCompletionClient::new(config_for_mock("http://127.0.0.1:1"))
        .expect("Failed to create client");

    assert!(client.complete(advice_request()).await.is_err());
}

#[tokio::test]
async fn complete_timeout_reports_configured_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_millis(1500))
                .set_body_json(chat_success_response("late")),
        )
        .mount(&mock_server)
        .await;

    let config = CompletionConfig {
        timeout_ms: 200,
        ..config_for_mock(&mock_server.uri())
    };
    let client = OpenAiCompletionClient::new(config).expect("Failed to create client");

    let err = client.complete(advice_request()).await.unwrap_err();
    assert!(matches!(err, CompletionError::Timeout(200)));
    assert_eq!(err.to_string(), "Completion timeout after 200ms");
}
