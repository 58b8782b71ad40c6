//! Tests for the OpenAI-compatible provider against a mock completion API.

use recetario::llm::{LlmError, LlmProvider, OpenAiProvider};
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(base_url: String) -> OpenAiProvider {
    OpenAiProvider::new(
        "test-key".to_string(),
        "gpt-4o-mini".to_string(),
        base_url,
        500,
    )
}

#[tokio::test]
async fn complete_sends_expected_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 500
        })))
        .and(body_string_contains(r#""role":"system""#))
        .and(body_string_contains("Imprime una receta"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"choices":[{"message":{"content":"Paella$arroz, azafrán$Cocina el arroz."}}]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let result = provider(server.uri())
        .complete("Imprime una receta española.")
        .await
        .unwrap();

    assert_eq!(result, "Paella$arroz, azafrán$Cocina el arroz.");
}

#[tokio::test]
async fn api_error_surfaces_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_raw(
            r#"{"error":{"message":"backend exploded","type":"server_error"}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let result = provider(server.uri()).complete("hola").await;

    match result {
        Err(LlmError::ApiError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "backend exploded");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn non_json_error_body_is_kept_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let result = provider(server.uri()).complete("hola").await;

    match result {
        Err(LlmError::ApiError { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream down");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn rate_limit_carries_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
        .mount(&server)
        .await;

    let result = provider(server.uri()).complete("hola").await;

    match result {
        Err(LlmError::RateLimited { retry_after_secs }) => {
            assert_eq!(retry_after_secs, Some(7));
        }
        other => panic!("Expected RateLimited, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_choices_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"choices":[]}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let result = provider(server.uri()).complete("hola").await;

    assert!(matches!(result, Err(LlmError::ParseError(_))));
}

#[tokio::test]
async fn null_content_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"choices":[{"message":{"content":null}}]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let result = provider(server.uri()).complete("hola").await;

    assert!(matches!(result, Err(LlmError::ParseError(_))));
}

#[tokio::test]
async fn undecodable_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("esto no es json"))
        .mount(&server)
        .await;

    let result = provider(server.uri()).complete("hola").await;

    assert!(matches!(result, Err(LlmError::ParseError(_))));
}

#[tokio::test]
async fn transport_failure_is_request_failed() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let result = provider(uri).complete("hola").await;

    assert!(matches!(result, Err(LlmError::RequestFailed(_))));
}
