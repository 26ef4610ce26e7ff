use std::sync::Arc;

use anyhow::{Result, bail};
use colored::Colorize;
use rustyline::{Config, Editor};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use strum::IntoEnumIterator;

use stylist_application::{ActionOutcome, StyleSession};
use stylist_core::config::GatewayConfig;
use stylist_core::prompt::{StyleAction, StylePresets};
use stylist_interaction::{
    OpenAIChatGateway, SecretStorage, config_with_api_key, process_env, resolve_gateway_config,
};

mod command;
mod helper;
mod logging;

use command::{Command, Input, parse_line, to_action};
use helper::{CliHelper, MaskingHelper};

type Repl = Editor<CliHelper, DefaultHistory>;

/// Asks for the API key when neither the environment nor secret.json has one.
///
/// Input is masked and kept out of the REPL history. The key is held in
/// memory for this process only.
fn prompt_for_api_key(storage: Option<&SecretStorage>) -> Result<GatewayConfig> {
    println!(
        "{}",
        "No OPENAI_API_KEY found in the environment or ~/.config/stylist/secret.json.".yellow()
    );
    let config = Config::builder().auto_add_history(false).build();
    let mut rl: Editor<MaskingHelper, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(MaskingHelper));
    let key = rl.readline("Enter your OpenAI API Key: ")?;
    let key = key.trim();
    if key.is_empty() {
        bail!("An OpenAI API key is required");
    }
    Ok(config_with_api_key(key, process_env, storage))
}

fn print_help() {
    println!("{}", "Commands:".bright_magenta());
    for command in Command::iter() {
        println!(
            "  {:<10} {}",
            command.slash().bright_cyan(),
            command.description().bright_black()
        );
    }
    println!(
        "{}",
        "Any other line sets the current text. End a line with '\\' to continue it.".bright_black()
    );
    println!("{}", "Type 'quit' or 'exit' to leave.".bright_black());
}

fn print_styles(presets: &StylePresets) {
    for preset in presets.iter() {
        println!("{}", format!("[{}]", preset.name).bright_magenta());
        println!("  {}", preset.instruction.bright_black());
    }
}

fn print_outcome(outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Advisory(message) => println!("{}", message.yellow()),
        ActionOutcome::Completed { label, result } => {
            println!("{}", format!("### {}", label).bright_magenta().bold());
            for line in result.text().lines() {
                if result.is_success() {
                    println!("{}", line.bright_blue());
                } else {
                    println!("{}", line.red());
                }
            }
            println!();
        }
    }
}

async fn run_action(session: &mut StyleSession, text: &str, action: StyleAction) {
    if let StyleAction::TargetStyle(name) = &action
        && name.is_empty()
    {
        println!(
            "{}",
            format!("Usage: /style <name> ({})", session.presets().names().join(", ")).yellow()
        );
        return;
    }

    println!("{}", "Asking the LLM...".bright_black());
    match session.handle(text, &action).await {
        Ok(outcome) => print_outcome(&outcome),
        Err(err) => eprintln!("{}", format!("Error: {}", err).red()),
    }
}

/// Entry point of the Stylist REPL.
///
/// 1. Resolves the gateway configuration (env, secret.json, or interactive prompt)
/// 2. Starts a session with an empty history
/// 3. Reads text and slash commands until `quit`/EOF
#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();

    let presets = StylePresets::default();
    let style_names = presets.names().iter().map(|s| s.to_string()).collect();

    let mut rl: Repl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(style_names)));

    let storage = match SecretStorage::new() {
        Ok(storage) => Some(storage),
        Err(err) => {
            tracing::warn!("[Stylist] Secret file unavailable: {}", err);
            None
        }
    };

    let config = match resolve_gateway_config(process_env, storage.as_ref()) {
        Some(config) => config,
        None => prompt_for_api_key(storage.as_ref())?,
    };
    tracing::info!(config = ?config, "[Stylist] Gateway configured");

    let gateway = Arc::new(OpenAIChatGateway::new(config));
    let mut session = StyleSession::with_presets(gateway, presets);

    println!("{}", "=== Semantic Style Analyzer ===".bright_magenta().bold());
    println!(
        "{}",
        "Paste your text, then use /analyze, /poetic, /simplify or /style <name>. /help lists everything."
            .bright_black()
    );
    println!();

    let mut current_text = String::new();
    let mut pending = String::new();

    loop {
        let prompt = if pending.is_empty() { ">> " } else { ".. " };
        let line = match rl.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                pending.clear();
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        if let Some(continued) = line.strip_suffix('\\') {
            pending.push_str(continued);
            pending.push('\n');
            continue;
        }
        pending.push_str(&line);
        let logical = std::mem::take(&mut pending);

        let _ = rl.add_history_entry(logical.as_str());

        match parse_line(&logical) {
            Input::Empty => {}
            Input::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Input::Text(text) => {
                current_text = text;
                println!(
                    "{}",
                    format!("Text set ({} characters).", current_text.chars().count()).green()
                );
            }
            Input::Unknown(raw) => {
                println!("{}", format!("Unknown command: {}", raw).bright_black());
            }
            Input::Command(command, arg) => {
                if let Some(action) = to_action(command, &arg) {
                    run_action(&mut session, &current_text, action).await;
                    continue;
                }
                match command {
                    Command::Styles => print_styles(session.presets()),
                    Command::History => {
                        if session.history().next().is_none() {
                            println!("{}", "No analyses or rewrites yet.".bright_black());
                        } else {
                            print!("{}", session.render_history());
                        }
                    }
                    Command::Text => {
                        if current_text.trim().is_empty() {
                            println!("{}", "No text yet.".bright_black());
                        } else {
                            println!("{}", current_text);
                        }
                    }
                    _ => print_help(),
                }
            }
        }
    }

    Ok(())
}
