use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::Command;

/// rustyline helper: completes slash commands and style names, highlights commands.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    styles: Vec<String>,
}

impl CliHelper {
    pub fn new(styles: Vec<String>) -> Self {
        Self {
            commands: Command::all_slashes(),
            styles,
        }
    }

    fn style_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(&format!("{} ", Command::Style.slash()))
            .map(str::trim_start)
    }

    fn matching_styles<'a>(&'a self, partial: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        self.styles
            .iter()
            .filter(move |s| starts_with_ignore_case(s, partial))
    }

    fn style_hint(&self, partial: &str) -> Option<String> {
        if partial.is_empty() {
            return None;
        }
        self.matching_styles(partial)
            .find(|s| s.len() > partial.len())
            .map(|s| s[partial.len()..].to_string())
    }
}

/// ASCII case-insensitive prefix test shared by completion and hints.
fn starts_with_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if let Some(partial) = Self::style_prefix(line) {
            let start = pos - partial.len();
            let candidates = self
                .matching_styles(partial)
                .map(|s| Pair {
                    display: s.clone(),
                    replacement: s.clone(),
                })
                .collect();
            return Ok((start, candidates));
        }

        if line.starts_with('/') && !line.contains(' ') {
            let candidates = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if let Some(partial) = Self::style_prefix(line) {
            return self.style_hint(partial);
        }

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Helper for secret input: every typed character is echoed as `*`.
#[derive(Clone, Copy, Default)]
pub struct MaskingHelper;

impl Helper for MaskingHelper {}

impl Completer for MaskingHelper {
    type Candidate = String;
}

impl Hinter for MaskingHelper {
    type Hint = String;
}

impl Validator for MaskingHelper {}

impl Highlighter for MaskingHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Owned("*".repeat(line.chars().count()))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> CliHelper {
        CliHelper::new(vec!["Sarcastic".to_string(), "Mystical".to_string()])
    }

    #[test]
    fn test_style_hint_ignores_case() {
        let helper = helper();
        assert_eq!(helper.style_hint("Sar"), Some("castic".to_string()));
        assert_eq!(helper.style_hint("sar"), Some("castic".to_string()));
        assert_eq!(helper.style_hint("Sarcastic"), None);
        assert_eq!(helper.style_hint(""), None);
    }

    #[test]
    fn test_hint_and_completion_agree() {
        let helper = helper();
        let completed: Vec<&String> = helper.matching_styles("mys").collect();
        assert_eq!(completed, vec!["Mystical"]);
        assert!(helper.style_hint("mys").is_some());
    }

    #[test]
    fn test_masking_helper_hides_every_character() {
        let masked = MaskingHelper.highlight("sk-tést", 3);
        assert_eq!(masked, "*******");
    }

    #[test]
    fn test_starts_with_ignore_case_handles_multibyte_prefix() {
        assert!(starts_with_ignore_case("Professional", "PRO"));
        assert!(!starts_with_ignore_case("Persuasive", "Pé"));
        assert!(!starts_with_ignore_case("Mystical", "Mystical!"));
    }
}
