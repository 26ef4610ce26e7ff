//! Style session: the per-user action handler.
//!
//! One `handle` call runs Compose → Complete → Append to completion. The
//! `&mut self` receiver keeps the history single-writer.

use std::sync::Arc;

use stylist_core::completion::{CompletionGateway, CompletionResult};
use stylist_core::history::{InteractionRecord, InteractionRecorder};
use stylist_core::prompt::{StyleAction, StylePresets, compose};
use stylist_core::{Result, StylistError};
use uuid::Uuid;

use crate::render::render_history;

/// Message shown instead of calling the gateway when the input is blank.
pub const EMPTY_INPUT_ADVISORY: &str = "⚠️ Please enter some text first.";

/// What the caller should render after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Nothing was sent or recorded; show the message to the user.
    Advisory(String),
    /// The gateway was called and the result was recorded under `label`.
    Completed {
        label: String,
        result: CompletionResult,
    },
}

impl ActionOutcome {
    /// The text to display for this outcome.
    pub fn text(&self) -> &str {
        match self {
            Self::Advisory(message) => message,
            Self::Completed { result, .. } => result.text(),
        }
    }
}

/// One user's interactive session.
///
/// Owns the interaction history for its whole lifetime; dropping the session
/// discards the history.
pub struct StyleSession {
    id: String,
    gateway: Arc<dyn CompletionGateway>,
    presets: StylePresets,
    recorder: InteractionRecorder,
}

impl StyleSession {
    /// Creates a session with the built-in style presets.
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self::with_presets(gateway, StylePresets::default())
    }

    pub fn with_presets(gateway: Arc<dyn CompletionGateway>, presets: StylePresets) -> Self {
        let id = Uuid::new_v4().to_string();
        tracing::info!(
            session_id = %id,
            gateway = gateway.name(),
            "[StyleSession] Session started"
        );
        Self {
            id,
            gateway,
            presets,
            recorder: InteractionRecorder::new(),
        }
    }

    pub fn presets(&self) -> &StylePresets {
        &self.presets
    }

    /// Runs `action` on `text` and records the result.
    ///
    /// Blank input short-circuits to [`ActionOutcome::Advisory`] without calling
    /// the gateway or recording anything. An unknown style preset is returned as
    /// [`StylistError::UnknownPreset`], also without side effects. Gateway
    /// failures are recorded like successful outputs.
    pub async fn handle(&mut self, text: &str, action: &StyleAction) -> Result<ActionOutcome> {
        let (mode, label) = action.resolve(&self.presets)?;

        let prompt = match compose(text, &mode) {
            Ok(prompt) => prompt,
            Err(StylistError::EmptyInput) => {
                tracing::debug!(session_id = %self.id, "[StyleSession] Blank input, skipping");
                return Ok(ActionOutcome::Advisory(EMPTY_INPUT_ADVISORY.to_string()));
            }
            Err(err) => return Err(err),
        };

        tracing::info!(
            session_id = %self.id,
            action = %label,
            prompt_chars = prompt.chars().count(),
            "[StyleSession] Running action"
        );

        let result = self.gateway.complete(&prompt).await;
        if !result.is_success() {
            tracing::warn!(session_id = %self.id, action = %label, "[StyleSession] Action failed");
        }

        self.recorder
            .append(InteractionRecord::new(text, label.clone(), result.text()));

        Ok(ActionOutcome::Completed { label, result })
    }

    /// All recorded interactions, most recent first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &InteractionRecord> + '_ {
        self.recorder.all()
    }

    /// Markdown rendering of the history, most recent first.
    pub fn render_history(&self) -> String {
        render_history(self.recorder.all())
    }
}
