//! Chat-completion provider abstractions.
//!
//! - `LlmProvider`: async-in-trait definition for concrete providers
//! - `BoxLlmProvider`: object-safe wrapper for dynamic dispatch

pub mod box_provider;
pub mod provider;

pub use box_provider::BoxLlmProvider;
pub use provider::LlmProvider;
