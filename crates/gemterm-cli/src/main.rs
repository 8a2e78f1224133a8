//! gemterm: interactive Gemini chat in the terminal.
//!
//! Parses CLI arguments, sets up logging, then either runs the chat session
//! (the default) or a `secrets` / `completions` command.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use gemterm_infra::paths::{default_settings_path, resolve_user_secrets_path};
use gemterm_infra::secret::UserSecretsStore;

use cli::{Cli, Commands, SecretsCommand};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over the verbosity flags.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let secrets_path = resolve_user_secrets_path();

    match cli.command {
        None | Some(Commands::Chat) => {
            let settings_path = cli.settings.clone().unwrap_or_else(default_settings_path);
            cli::chat::loop_runner::run_chat(&settings_path, &secrets_path).await
        }

        Some(Commands::Secrets { action }) => {
            if let SecretsCommand::Path = action {
                cli::secrets::print_path(&secrets_path, cli.json);
                return Ok(ExitCode::SUCCESS);
            }

            let mut store = UserSecretsStore::open(&secrets_path).await?;
            match action {
                SecretsCommand::Set { key, value } => {
                    cli::secrets::set_secret(&mut store, &key, value.as_deref(), cli.json).await?;
                }
                SecretsCommand::Remove { key } => {
                    cli::secrets::remove_secret(&mut store, &key, cli.json).await?;
                }
                SecretsCommand::List => {
                    cli::secrets::list_secrets(&store, cli.json)?;
                }
                SecretsCommand::Clear { force } => {
                    cli::secrets::clear_secrets(&mut store, force, cli.json).await?;
                }
                SecretsCommand::Path => unreachable!("handled above"),
            }
            Ok(ExitCode::SUCCESS)
        }

        Some(Commands::Completions { shell }) => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "gemterm", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}
