//! Completion gateway port.
//!
//! Defines the interface the session uses to reach a hosted completion
//! service. Implementations live in `stylist-interaction`.

use async_trait::async_trait;

/// Prefix that marks a completion failure in displayed output.
pub const ERROR_PREFIX: &str = "❌ LLM Error: ";

/// Outcome of a single completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// The first choice's message content, unmodified.
    Success(String),
    /// Human-readable error message, already prefixed with [`ERROR_PREFIX`].
    Failure(String),
}

impl CompletionResult {
    /// Builds a failure from any error description.
    pub fn failure(description: impl std::fmt::Display) -> Self {
        Self::Failure(format!("{}{}", ERROR_PREFIX, description))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The displayable text, whether the call succeeded or not.
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }
}

/// Sends a composed prompt to a completion service.
///
/// Implementations make exactly one attempt per call and must not panic or
/// return errors: every failure is folded into [`CompletionResult::Failure`].
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Short name of the backing service, used in logs.
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> CompletionResult;
}
