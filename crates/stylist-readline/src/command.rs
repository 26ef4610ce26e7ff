//! REPL input parsing.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use stylist_core::prompt::StyleAction;

/// Slash commands understood by the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    Analyze,
    Poetic,
    Simplify,
    Style,
    Styles,
    History,
    Text,
    Help,
}

impl Command {
    /// The command as typed, including the leading slash.
    pub fn slash(&self) -> String {
        format!("/{}", self)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Analyze => "Analyze idioms, figures of speech and tone",
            Command::Poetic => "Rewrite the text more poetically",
            Command::Simplify => "Simplify to an 8th-grade reading level",
            Command::Style => "Rewrite in a target style: /style <name>",
            Command::Styles => "List the available target styles",
            Command::History => "Show past analyses and rewrites",
            Command::Text => "Show the current text",
            Command::Help => "Show this help",
        }
    }

    /// All slash commands, in help order.
    pub fn all_slashes() -> Vec<String> {
        Command::iter().map(|c| c.slash()).collect()
    }
}

/// One parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A slash command and its (trimmed) argument.
    Command(Command, String),
    /// Any non-command line: replaces the current text.
    Text(String),
    /// A slash command that does not exist.
    Unknown(String),
    Quit,
    Empty,
}

/// Parses one logical line (continuations already joined).
pub fn parse_line(line: &str) -> Input {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }
    if trimmed == "quit" || trimmed == "exit" {
        return Input::Quit;
    }

    let Some(rest) = trimmed.strip_prefix('/') else {
        return Input::Text(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name.parse::<Command>() {
        Ok(command) => Input::Command(command, arg.to_string()),
        Err(_) => Input::Unknown(trimmed.to_string()),
    }
}

/// Maps action commands to the session action they trigger.
///
/// Returns `None` for commands that don't call the model.
pub fn to_action(command: Command, arg: &str) -> Option<StyleAction> {
    match command {
        Command::Analyze => Some(StyleAction::Analyze),
        Command::Poetic => Some(StyleAction::RewritePoetic),
        Command::Simplify => Some(StyleAction::Simplify),
        Command::Style => Some(StyleAction::TargetStyle(arg.to_string())),
        Command::Styles | Command::History | Command::Text | Command::Help => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_line("/analyze"),
            Input::Command(Command::Analyze, String::new())
        );
        assert_eq!(
            parse_line("  /style   Sarcastic  "),
            Input::Command(Command::Style, "Sarcastic".to_string())
        );
        assert_eq!(parse_line("/shout"), Input::Unknown("/shout".to_string()));
    }

    #[test]
    fn test_parse_text_keeps_original_line() {
        assert_eq!(
            parse_line("  Once upon a time "),
            Input::Text("  Once upon a time ".to_string())
        );
        assert_eq!(parse_line(" \t"), Input::Empty);
        assert_eq!(parse_line("exit"), Input::Quit);
    }

    #[test]
    fn test_to_action() {
        assert_eq!(
            to_action(Command::Style, "Mystical"),
            Some(StyleAction::TargetStyle("Mystical".to_string()))
        );
        assert_eq!(
            to_action(Command::Poetic, ""),
            Some(StyleAction::RewritePoetic)
        );
        assert_eq!(to_action(Command::History, ""), None);
    }

    #[test]
    fn test_all_slashes() {
        let slashes = Command::all_slashes();
        assert_eq!(slashes.first().map(String::as_str), Some("/analyze"));
        assert!(slashes.contains(&"/styles".to_string()));
    }
}
