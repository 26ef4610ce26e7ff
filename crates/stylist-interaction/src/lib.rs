//! Outbound integrations: the OpenAI completion gateway and credential loading.

pub mod config;
pub mod openai_api_gateway;
pub mod secret_storage;

pub use config::{config_with_api_key, process_env, resolve_gateway_config};
pub use openai_api_gateway::OpenAIChatGateway;
pub use secret_storage::{SecretStorage, SecretStorageError};
