//! Error types for the Stylist application.

use thiserror::Error;

/// A shared error type for the Stylist crates.
///
/// Completion failures are deliberately absent: the gateway turns them into
/// [`crate::completion::CompletionResult::Failure`] values that end up in the
/// session history like any other output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StylistError {
    /// The source text is blank or whitespace-only.
    #[error("Please enter some text first")]
    EmptyInput,

    /// A custom prompt was requested without an instruction.
    #[error("Custom prompt requires a non-empty instruction")]
    EmptyInstruction,

    /// The requested style preset does not exist.
    #[error("Unknown style preset: '{0}'")]
    UnknownPreset(String),

    /// Prompt template rendering failed
    #[error("Template error: {0}")]
    Template(String),
}

impl From<minijinja::Error> for StylistError {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(err.to_string())
    }
}

/// A type alias for `Result<T, StylistError>`.
pub type Result<T> = std::result::Result<T, StylistError>;
