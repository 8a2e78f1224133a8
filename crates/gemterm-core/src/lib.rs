//! Business logic and port definitions for gemterm.
//!
//! This crate defines the "ports" (configuration sources, secret store,
//! chat-completion provider) that the infrastructure layer implements, plus
//! the session loop that drives a console chat. It depends only on
//! `gemterm-types` -- never on `gemterm-infra` or any IO crate.

pub mod config;
pub mod llm;
pub mod secret;
pub mod session;
pub mod settings;
