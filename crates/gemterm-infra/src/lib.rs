//! Infrastructure implementations for gemterm.
//!
//! Concrete adapters for the ports defined in `gemterm-core`:
//! - `config`: settings file and environment sources, default chain builder
//! - `secret`: the file-backed per-user secret store
//! - `llm`: the Gemini `generateContent` provider
//! - `paths`: per-user file locations

pub mod config;
pub mod llm;
pub mod paths;
pub mod secret;
