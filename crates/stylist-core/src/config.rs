//! Configuration models.
//!
//! `GatewayConfig` is built once at startup and handed to the gateway
//! constructor. `SecretConfig` mirrors the on-disk `secret.json` layout.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 800;

/// Fixed request parameters for the completion gateway.
///
/// Temperature and the output cap are not configurable; only the endpoint and
/// the model can differ between deployments.
#[derive(Clone, PartialEq)]
pub struct GatewayConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    temperature: f64,
    max_tokens: u32,
}

impl GatewayConfig {
    /// Creates a config with the default model, endpoint and sampling parameters.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Overrides the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Maximum number of tokens the model may generate.
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Full URL of the chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

// The API key must never reach logs.
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// Root structure of `secret.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub openai: Option<OpenAISecret>,
}

/// OpenAI section of `secret.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAISecret {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}
