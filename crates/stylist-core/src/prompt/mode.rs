//! Prompt modes and the user-level actions that select them.

use super::preset::StylePresets;
use crate::error::{Result, StylistError};

/// Instruction for the style analysis prompt.
pub const ANALYZE_INSTRUCTION: &str = "Analyze the following text for stylistic elements:
- Idioms
- Figures of speech (metaphors, similes, etc.)
- Tone and writing style (casual, formal, persuasive, etc.)
Return a bullet-point summary and include examples.";

/// Instruction for the poetic rewrite prompt.
pub const REWRITE_POETIC_INSTRUCTION: &str = "Rewrite the following text to make it:
- More poetic
- Slightly more sophisticated
- Maintain original meaning
Return only the rewritten version.";

/// Instruction for the simplification prompt.
pub const SIMPLIFY_INSTRUCTION: &str = "Simplify the following text to a conversational 8th-grade reading level while keeping the meaning and tone clear.";

/// Selects which instruction the composer places in front of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptMode {
    Analyze,
    RewritePoetic,
    Simplify,
    Custom { instruction: String },
}

impl PromptMode {
    /// Creates a custom mode from an arbitrary instruction.
    pub fn custom(instruction: impl Into<String>) -> Self {
        Self::Custom {
            instruction: instruction.into(),
        }
    }

    /// Returns the instruction text for this mode.
    pub fn instruction(&self) -> &str {
        match self {
            Self::Analyze => ANALYZE_INSTRUCTION,
            Self::RewritePoetic => REWRITE_POETIC_INSTRUCTION,
            Self::Simplify => SIMPLIFY_INSTRUCTION,
            Self::Custom { instruction } => instruction,
        }
    }
}

/// An action the user can trigger on the current text.
///
/// Each action knows the label it is recorded under in the session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleAction {
    /// Style analysis (idioms, figures of speech, tone)
    Analyze,
    /// Poetic rewrite
    RewritePoetic,
    /// Simplification to an 8th-grade reading level
    Simplify,
    /// Rewrite using the named style preset
    TargetStyle(String),
}

impl StyleAction {
    /// Human-readable label used for history records.
    pub fn label(&self) -> String {
        match self {
            Self::Analyze => "Style Analysis".to_string(),
            Self::RewritePoetic => "Poetic Rewrite".to_string(),
            Self::Simplify => "Simplified Version".to_string(),
            Self::TargetStyle(name) => format!("{} Rewrite", name),
        }
    }

    /// Resolves the action into the prompt mode the composer should use.
    ///
    /// Target styles are looked up in `presets`; the preset's canonical name is
    /// used for the label so that `sarcastic` and `Sarcastic` record the same way.
    pub fn resolve(&self, presets: &StylePresets) -> Result<(PromptMode, String)> {
        match self {
            Self::Analyze => Ok((PromptMode::Analyze, self.label())),
            Self::RewritePoetic => Ok((PromptMode::RewritePoetic, self.label())),
            Self::Simplify => Ok((PromptMode::Simplify, self.label())),
            Self::TargetStyle(name) => {
                let preset = presets
                    .find(name)
                    .ok_or_else(|| StylistError::UnknownPreset(name.clone()))?;
                let label = Self::TargetStyle(preset.name.clone()).label();
                Ok((PromptMode::custom(preset.instruction.clone()), label))
            }
        }
    }
}
