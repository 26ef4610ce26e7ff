//! Gateway configuration resolution.
//!
//! Priority for every value:
//! 1. Environment variables (OPENAI_API_KEY, OPENAI_MODEL_NAME, OPENAI_BASE_URL)
//! 2. ~/.config/stylist/secret.json
//! 3. Built-in defaults (model and base URL only)
//!
//! When no API key is found the caller is expected to ask the user for one and
//! finish the config with [`config_with_api_key`].

use stylist_core::config::{GatewayConfig, OpenAISecret};

use crate::secret_storage::{SecretStorage, SecretStorageError};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const MODEL_ENV: &str = "OPENAI_MODEL_NAME";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Reads a variable from the process environment.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Resolves the gateway configuration, or `None` when no API key is available.
pub fn resolve_gateway_config<F>(lookup: F, storage: Option<&SecretStorage>) -> Option<GatewayConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let secret = storage.and_then(load_openai_secret);

    let api_key = non_empty(lookup(API_KEY_ENV)).or_else(|| {
        secret
            .as_ref()
            .and_then(|s| non_empty(Some(s.api_key.clone())))
    })?;

    Some(apply_overrides(
        GatewayConfig::new(api_key),
        &lookup,
        secret.as_ref(),
    ))
}

/// Builds a config around an API key obtained interactively, keeping the
/// model and endpoint overrides from the environment and secret file.
pub fn config_with_api_key<F>(
    api_key: impl Into<String>,
    lookup: F,
    storage: Option<&SecretStorage>,
) -> GatewayConfig
where
    F: Fn(&str) -> Option<String>,
{
    let secret = storage.and_then(load_openai_secret);
    apply_overrides(GatewayConfig::new(api_key), &lookup, secret.as_ref())
}

fn apply_overrides<F>(
    mut config: GatewayConfig,
    lookup: &F,
    secret: Option<&OpenAISecret>,
) -> GatewayConfig
where
    F: Fn(&str) -> Option<String>,
{
    let model = non_empty(lookup(MODEL_ENV))
        .or_else(|| secret.and_then(|s| non_empty(s.model_name.clone())));
    if let Some(model) = model {
        config = config.with_model(model);
    }

    let base_url = non_empty(lookup(BASE_URL_ENV))
        .or_else(|| secret.and_then(|s| non_empty(s.base_url.clone())));
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }

    config
}

fn load_openai_secret(storage: &SecretStorage) -> Option<OpenAISecret> {
    match storage.load() {
        Ok(config) => config.openai,
        Err(SecretStorageError::NotFound(_)) => None,
        Err(err) => {
            tracing::warn!(
                "[Config] Ignoring secret file at {}: {}",
                storage.path().display(),
                err
            );
            None
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
