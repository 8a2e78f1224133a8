//! Session loop types: input events, turns, and loop states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Events produced by an interactive input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line of text, without its trailing newline.
    Line(String),
    /// End of input (Ctrl+D or closed stdin).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// A single prompt paired with the provider's response.
///
/// Turns are never retained across iterations of the loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub prompt: String,
    pub response: String,
}

/// Result of submitting one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Completed(Turn),
    Failed { prompt: String, message: String },
}

impl TurnOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TurnOutcome::Completed(_))
    }
}

/// States of the session loop.
///
/// `AwaitingInput -> (Submitting -> AwaitingInput) | Terminated`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    AwaitingInput,
    Submitting,
    Terminated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::AwaitingInput => write!(f, "awaiting_input"),
            SessionState::Submitting => write!(f, "submitting"),
            SessionState::Terminated => write!(f, "terminated"),
        }
    }
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub completed_turns: u32,
    pub failed_turns: u32,
}

impl SessionSummary {
    pub fn total_turns(&self) -> u32 {
        self.completed_turns + self.failed_turns
    }
}
