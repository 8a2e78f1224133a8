//! Interactive console chat with Gemini.
//!
//! Entry point: `loop_runner::run_chat`. The read/submit/print cycle itself
//! lives in `gemterm_core::session`; this module supplies the terminal
//! input sources and console rendering.

pub mod input;
pub mod loop_runner;
pub mod renderer;
