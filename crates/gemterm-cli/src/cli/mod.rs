//! CLI command definitions for the `gemterm` binary.
//!
//! With no subcommand the interactive chat session runs; `secrets` manages
//! the per-user secret store the session reads its API key from.

pub mod chat;
pub mod secrets;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with Google Gemini from the terminal.
#[derive(Parser)]
#[command(name = "gemterm", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file to read (defaults to ./appsettings.json).
    #[arg(long, global = true, env = "GEMTERM_SETTINGS", value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Output machine-readable JSON from `secrets` commands.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed logging (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log filter directive for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,gemterm=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive chat session (the default).
    Chat,

    /// Manage the per-user secret store.
    Secrets {
        #[command(subcommand)]
        action: SecretsCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum SecretsCommand {
    /// Store a secret (prompts with hidden input if VALUE is omitted).
    Set {
        /// Configuration key, e.g. "Gemini:ApiKey".
        key: String,

        /// Secret value.
        value: Option<String>,
    },

    /// Delete a secret.
    #[command(alias = "rm")]
    Remove {
        key: String,
    },

    /// List stored secrets with masked values.
    #[command(alias = "ls")]
    List,

    /// Delete all secrets.
    Clear {
        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// Print the location of the secrets file.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_runs_chat() {
        let cli = Cli::try_parse_from(["gemterm"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_secrets_set_positional_value() {
        let cli = Cli::try_parse_from(["gemterm", "secrets", "set", "Gemini:ApiKey", "AIza-1"]).unwrap();
        match cli.command {
            Some(Commands::Secrets {
                action: SecretsCommand::Set { key, value },
            }) => {
                assert_eq!(key, "Gemini:ApiKey");
                assert_eq!(value.as_deref(), Some("AIza-1"));
            }
            _ => panic!("expected secrets set"),
        }
    }

    #[test]
    fn test_verbosity_filters() {
        let quiet = Cli::try_parse_from(["gemterm", "--quiet"]).unwrap();
        assert_eq!(quiet.log_filter(), "error");
        let verbose = Cli::try_parse_from(["gemterm", "-v"]).unwrap();
        assert_eq!(verbose.log_filter(), "info,gemterm=debug");
        let trace = Cli::try_parse_from(["gemterm", "-vv", "chat"]).unwrap();
        assert_eq!(trace.log_filter(), "trace");
    }

    #[test]
    fn test_settings_path_flag() {
        let cli = Cli::try_parse_from(["gemterm", "--settings", "conf/app.json"]).unwrap();
        assert_eq!(cli.settings, Some(PathBuf::from("conf/app.json")));
    }
}
