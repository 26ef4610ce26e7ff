//! Prompt composer.
//!
//! Every mode renders through the same template: the instruction, a blank
//! line, the `Text:` label and the source text. The source text is embedded
//! as-is; callers that need injection safety must wrap it themselves.

use minijinja::{Environment, context};
use once_cell::sync::Lazy;

use super::mode::PromptMode;
use crate::error::{Result, StylistError};

const PROMPT_TEMPLATE: &str = "{{ instruction }}\n\nText:\n{{ text }}";

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(Environment::new);

/// Builds the exact prompt string sent to the completion service.
///
/// Fails with [`StylistError::EmptyInput`] when `source_text` is blank and
/// with [`StylistError::EmptyInstruction`] for a custom mode without an
/// instruction.
pub fn compose(source_text: &str, mode: &PromptMode) -> Result<String> {
    if source_text.trim().is_empty() {
        return Err(StylistError::EmptyInput);
    }

    let instruction = mode.instruction();
    if instruction.is_empty() {
        return Err(StylistError::EmptyInstruction);
    }

    let prompt = TEMPLATES.render_str(
        PROMPT_TEMPLATE,
        context! {
            instruction => instruction,
            text => source_text,
        },
    )?;

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::mode::{
        ANALYZE_INSTRUCTION, REWRITE_POETIC_INSTRUCTION, SIMPLIFY_INSTRUCTION, StyleAction,
    };
    use crate::prompt::preset::StylePresets;

    const SAMPLE: &str = "It was raining cats and dogs, and my heart was a drum.";

    #[test]
    fn test_fixed_modes_embed_instruction_and_text_once() {
        let cases = [
            (PromptMode::Analyze, ANALYZE_INSTRUCTION),
            (PromptMode::RewritePoetic, REWRITE_POETIC_INSTRUCTION),
            (PromptMode::Simplify, SIMPLIFY_INSTRUCTION),
        ];

        for (mode, instruction) in cases {
            let prompt = compose(SAMPLE, &mode).unwrap();
            assert!(prompt.contains(instruction), "{:?} lost its instruction", mode);
            assert_eq!(prompt.matches(SAMPLE).count(), 1, "{:?}", mode);
            assert!(prompt.ends_with(SAMPLE));
        }
    }

    #[test]
    fn test_analyze_mentions_all_stylistic_elements() {
        let prompt = compose(SAMPLE, &PromptMode::Analyze).unwrap();
        assert!(prompt.contains("Idioms"));
        assert!(prompt.contains("Figures of speech"));
        assert!(prompt.contains("Tone and writing style"));
        assert!(prompt.contains("bullet-point summary"));
    }

    #[test]
    fn test_blank_input_is_rejected() {
        for blank in ["", "   ", "\n\t"] {
            for mode in [
                PromptMode::Analyze,
                PromptMode::RewritePoetic,
                PromptMode::Simplify,
                PromptMode::custom("Shout it."),
            ] {
                assert_eq!(compose(blank, &mode), Err(StylistError::EmptyInput));
            }
        }
    }

    #[test]
    fn test_custom_concatenation_law() {
        let instruction = "Rewrite this as a haiku.";
        let text = "  The meeting is moved to Tuesday.\n";
        let prompt = compose(text, &PromptMode::custom(instruction)).unwrap();
        assert_eq!(prompt, format!("{}\n\nText:\n{}", instruction, text));
    }

    #[test]
    fn test_compose_is_pure() {
        let mode = PromptMode::custom("Make it formal.");
        let first = compose(SAMPLE, &mode).unwrap();
        let second = compose(SAMPLE, &mode).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_source_text_is_not_interpreted() {
        let text = "{{ instruction }} {% if true %}raw{% endif %} <b>&amp;</b>";
        let prompt = compose(text, &PromptMode::Simplify).unwrap();
        assert!(prompt.ends_with(text));
    }

    #[test]
    fn test_empty_custom_instruction() {
        assert_eq!(
            compose(SAMPLE, &PromptMode::custom("")),
            Err(StylistError::EmptyInstruction)
        );
    }

    #[test]
    fn test_whitespace_custom_instruction_is_concatenated() {
        let prompt = compose(SAMPLE, &PromptMode::custom("  ")).unwrap();
        assert_eq!(prompt, format!("  \n\nText:\n{}", SAMPLE));
    }

    #[test]
    fn test_sarcastic_preset_prompt_contains_instruction() {
        let presets = StylePresets::default();
        let (mode, _) = StyleAction::TargetStyle("Sarcastic".to_string())
            .resolve(&presets)
            .unwrap();
        let prompt = compose(SAMPLE, &mode).unwrap();

        assert!(prompt.contains(
            "Rewrite the text with a dry and sarcastic tone, like it’s mocking something subtly."
        ));
    }
}
