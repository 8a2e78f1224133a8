//! Interactive console session.
//!
//! Owns the read/submit/print cycle and the lifetime of one chat-completion
//! handle. Terminal specifics stay behind two seams so the loop can be
//! driven by scripted input in tests:
//! - `PromptSource`: where lines come from
//! - `SessionOutput`: where responses, per-turn errors, and the farewell go
//!
//! Entry points: `startup::open_session` then `runner::SessionLoop::run`.

pub mod input;
pub mod messages;
pub mod output;
pub mod runner;
pub mod startup;

#[cfg(test)]
pub(crate) mod testing;

pub use input::{InputAction, PromptSource, classify};
pub use output::SessionOutput;
pub use runner::SessionLoop;
pub use startup::open_session;
