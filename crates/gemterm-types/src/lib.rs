//! Shared domain types for gemterm.
//!
//! This crate contains the types used across the workspace: completion
//! request/response shapes, session turns and states, secret wrappers, and
//! the error enums returned by the library crates.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod error;
pub mod llm;
pub mod secret;
pub mod session;
