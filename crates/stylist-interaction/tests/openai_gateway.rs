use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;
use stylist_core::completion::{CompletionGateway, CompletionResult, ERROR_PREFIX};
use stylist_core::config::GatewayConfig;
use stylist_interaction::OpenAIChatGateway;

fn gateway_for(server: &MockServer) -> OpenAIChatGateway {
    OpenAIChatGateway::new(GatewayConfig::new("sk-test").with_base_url(server.base_url()))
}

#[tokio::test]
async fn success_returns_first_choice_content() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer sk-test")
                .json_body(json!({
                    "model": "gpt-3.5-turbo",
                    "messages": [{"role": "user", "content": "Simplify this.\n\nText:\nhello"}],
                    "temperature": 0.7,
                    "max_tokens": 800
                }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "id": "chatcmpl-1",
                    "choices": [
                        {"index": 0, "message": {"role": "assistant", "content": "  Hi there!\n"}},
                        {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
                    ]
                }));
        })
        .await;

    let result = gateway_for(&server)
        .complete("Simplify this.\n\nText:\nhello")
        .await;

    mock.assert_async().await;
    assert_eq!(result, CompletionResult::Success("  Hi there!\n".to_string()));
}

#[tokio::test]
async fn api_error_message_becomes_failure() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(401)
                .header("content-type", "application/json")
                .json_body(json!({
                    "error": {
                        "message": "Incorrect API key provided",
                        "type": "invalid_request_error",
                        "code": "invalid_api_key"
                    }
                }));
        })
        .await;

    let result = gateway_for(&server).complete("prompt").await;

    // One attempt only, even for retryable-looking failures.
    mock.assert_hits_async(1).await;
    assert!(!result.is_success());
    assert_eq!(
        result.text(),
        format!("{}Incorrect API key provided", ERROR_PREFIX)
    );
}

#[tokio::test]
async fn rate_limit_is_not_retried() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(429).body("slow down");
        })
        .await;

    let result = gateway_for(&server).complete("prompt").await;

    mock.assert_hits_async(1).await;
    assert!(result.text().starts_with(ERROR_PREFIX));
    assert!(result.text().contains("429"));
    assert!(result.text().contains("slow down"));
}

#[tokio::test]
async fn malformed_body_becomes_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200)
                .header("content-type", "application/json")
                .body("not json at all");
        })
        .await;

    let result = gateway_for(&server).complete("prompt").await;

    assert!(result.text().starts_with(ERROR_PREFIX));
    assert!(result.text().contains("Failed to parse OpenAI response"));
}

#[tokio::test]
async fn missing_content_becomes_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"choices": []}));
        })
        .await;

    let result = gateway_for(&server).complete("prompt").await;

    assert_eq!(
        result.text(),
        format!("{}OpenAI API returned no content in the response", ERROR_PREFIX)
    );
}

#[tokio::test]
async fn unreachable_endpoint_becomes_failure() {
    let config = GatewayConfig::new("sk-test").with_base_url("http://127.0.0.1:1/v1");
    let result = OpenAIChatGateway::new(config).complete("prompt").await;

    assert!(result.text().starts_with(ERROR_PREFIX));
    assert!(result.text().contains("OpenAI API request failed"));
}
