//! Google Gemini provider.
//!
//! - `client`: [`GeminiProvider`], the [`LlmProvider`](gemterm_core::llm::LlmProvider) implementation
//! - `types`: `generateContent` request/response wire types

pub mod client;
pub mod types;

pub use client::{DEFAULT_BASE_URL, GeminiProvider};
