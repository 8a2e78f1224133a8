//! Input side of the session loop.

use std::future::Future;

use gemterm_types::session::InputEvent;

/// Literal that ends the session (compared case-insensitively).
pub const EXIT_COMMAND: &str = "exit";

/// Source of interactive input lines.
///
/// Implementations display their own prompt (`User > `) before waiting.
pub trait PromptSource {
    /// Wait for the next line of input.
    fn read_line(&mut self) -> impl Future<Output = InputEvent>;
}

/// What the loop does with a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Exit,
    /// Submit the line, exactly as read.
    Prompt(String),
}

/// Classify a line: blank or `exit` (any casing) ends the session.
///
/// The `exit` comparison is on the line as read, so `" exit"` is a prompt.
pub fn classify(line: &str) -> InputAction {
    if line.trim().is_empty() || line.eq_ignore_ascii_case(EXIT_COMMAND) {
        InputAction::Exit
    } else {
        InputAction::Prompt(line.to_string())
    }
}
