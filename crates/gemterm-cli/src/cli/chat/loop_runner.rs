//! Chat session orchestration.
//!
//! Loads layered configuration, builds the Gemini provider, picks an input
//! source for the terminal, then hands control to the core session loop.

use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use console::style;
use tracing::debug;

use gemterm_core::llm::BoxLlmProvider;
use gemterm_core::session::messages::{READY, initializing_line, missing_credential_lines};
use gemterm_core::session::{SessionLoop, open_session};
use gemterm_core::settings::ChatSettings;
use gemterm_infra::config::load_default_config;
use gemterm_infra::llm::GeminiProvider;
use gemterm_types::error::StartupError;
use gemterm_types::llm::LlmError;
use gemterm_types::session::SessionSummary;

use super::input::{ChatInput, StdinInput};
use super::renderer::ConsoleOutput;

/// Construct the session's provider. Only reached once the key resolved.
fn connect_gemini(settings: ChatSettings) -> Result<BoxLlmProvider, LlmError> {
    println!("{}", initializing_line());
    let provider = GeminiProvider::new(settings.api_key, settings.model, settings.request_timeout)?;
    debug!(?provider, "gemini provider constructed");
    Ok(BoxLlmProvider::new(provider))
}

/// Run the interactive chat session.
///
/// Returns `ExitCode::FAILURE` for startup failures (unreadable settings,
/// missing key, client construction); those are reported on the console
/// rather than as errors. Per-turn failures never end the session.
pub async fn run_chat(settings_path: &Path, secrets_path: &Path) -> anyhow::Result<ExitCode> {
    let config = match load_default_config(settings_path, secrets_path).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("  {} {e}", style("!").red().bold());
            return Ok(ExitCode::FAILURE);
        }
    };
    debug!(?config, "configuration loaded");

    let mut session = match open_session(&config, connect_gemini) {
        Ok(session) => session,
        Err(StartupError::MissingCredential { .. }) => {
            for line in missing_credential_lines() {
                println!("{}", style(line).red());
            }
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            eprintln!("{}", style(format!("--- ERROR: {e} ---")).red());
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("{}", style(READY).green());
    println!();

    if std::io::stdin().is_terminal() {
        run_interactive(&mut session).await?;
    } else {
        let mut input = StdinInput::new();
        let mut output = ConsoleOutput::new(std::io::stdout());
        session.run(&mut input, &mut output).await?;
    }

    Ok(ExitCode::SUCCESS)
}

async fn run_interactive(session: &mut SessionLoop) -> anyhow::Result<SessionSummary> {
    let (mut input, writer) = ChatInput::new()?;
    let mut output = ConsoleOutput::new(writer);

    let result = session.run(&mut input, &mut output).await;
    drop(output);
    input.flush();

    Ok(result?)
}
