//! OpenAIChatGateway - Direct REST API implementation of the completion gateway.
//!
//! Calls the OpenAI Chat Completions API (or a compatible endpoint) once per
//! prompt and folds every failure into `CompletionResult::Failure`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use stylist_core::completion::{CompletionGateway, CompletionResult};
use stylist_core::config::GatewayConfig;
use thiserror::Error;

/// Gateway implementation that talks to the OpenAI HTTP API.
#[derive(Clone)]
pub struct OpenAIChatGateway {
    client: Client,
    config: GatewayConfig,
}

impl OpenAIChatGateway {
    /// Creates a new gateway; request parameters are fixed by `config`.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn build_request<'a>(&'a self, prompt: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature(),
            max_tokens: self.config.max_tokens(),
        }
    }

    async fn send_request(&self, body: &ChatCompletionRequest<'_>) -> Result<String, GatewayError> {
        let response = self
            .client
            .post(self.config.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(GatewayError::Request)?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| GatewayError::Parse(err.to_string()))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl CompletionGateway for OpenAIChatGateway {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> CompletionResult {
        let request = self.build_request(prompt);
        tracing::debug!(
            model = %self.config.model,
            prompt_chars = prompt.chars().count(),
            "[OpenAIChatGateway] Sending completion request"
        );

        match self.send_request(&request).await {
            Ok(text) => {
                tracing::debug!(
                    response_chars = text.chars().count(),
                    "[OpenAIChatGateway] Completion succeeded"
                );
                CompletionResult::Success(text)
            }
            Err(err) => {
                tracing::warn!(error = %err, "[OpenAIChatGateway] Completion failed");
                CompletionResult::failure(err)
            }
        }
    }
}

/// Internal failure reasons; only their `Display` form leaves this module.
#[derive(Debug, Error)]
enum GatewayError {
    #[error("OpenAI API request failed: {0}")]
    Request(reqwest::Error),

    #[error("{0}")]
    Http(String),

    #[error("Failed to parse OpenAI response: {0}")]
    Parse(String),

    #[error("OpenAI API returned no content in the response")]
    NoContent,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String, GatewayError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(GatewayError::NoContent)
}

fn map_http_error(status: StatusCode, body: String) -> GatewayError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| format!("HTTP {}: {}", status, body));

    GatewayError::Http(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_fixed_parameters() {
        let gateway = OpenAIChatGateway::new(GatewayConfig::new("sk-test"));
        let request = gateway.build_request("Text:\nhello");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "Text:\nhello"}],
                "temperature": 0.7,
                "max_tokens": 800,
            })
        );
    }

    #[test]
    fn test_map_http_error_prefers_api_message() {
        let err = map_http_error(
            StatusCode::UNAUTHORIZED,
            r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#
                .to_string(),
        );
        assert_eq!(err.to_string(), "Incorrect API key provided");
    }

    #[test]
    fn test_map_http_error_falls_back_to_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream gone".to_string());
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway: upstream gone");
    }

    #[test]
    fn test_extract_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"content": "first"}}, {"message": {"content": "second"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text_response(response).unwrap(), "first");
    }

    #[test]
    fn test_extract_without_choices() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            extract_text_response(response),
            Err(GatewayError::NoContent)
        ));
    }
}
