//! Prompt domain module.
//!
//! # Module Structure
//!
//! - `mode`: `PromptMode` and the user-facing `StyleAction`
//! - `preset`: built-in style presets and their registry
//! - `composer`: builds the prompt string for a mode

mod composer;
mod mode;
mod preset;

pub use composer::compose;
pub use mode::{
    ANALYZE_INSTRUCTION, PromptMode, REWRITE_POETIC_INSTRUCTION, SIMPLIFY_INSTRUCTION,
    StyleAction,
};
pub use preset::{StylePreset, StylePresets, get_default_presets};
