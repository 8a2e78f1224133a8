//! Line sources for the chat loop.
//!
//! `ChatInput` wraps `rustyline_async::Readline` for terminals; `StdinInput`
//! reads plain lines when stdin is a pipe or file.

use std::io::Write;

use console::style;
use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;

use gemterm_core::session::PromptSource;
use gemterm_core::session::messages::USER_LABEL;
use gemterm_types::session::InputEvent;

fn styled_prompt() -> String {
    style(USER_LABEL).green().bold().to_string()
}

/// Async readline input for interactive terminals.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create the input handler with the `User > ` prompt.
    ///
    /// Returns a `SharedWriter` that prints output without interfering with
    /// the readline prompt.
    pub fn new() -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(styled_prompt())?;
        Ok((Self { rl }, stdout))
    }

    /// Print anything still buffered in the shared writer.
    pub fn flush(&mut self) {
        if let Err(e) = self.rl.flush() {
            warn!("failed to flush terminal output: {e}");
        }
    }
}

impl PromptSource for ChatInput {
    async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                if !line.trim().is_empty() {
                    self.rl.add_history_entry(line.clone());
                }
                InputEvent::Line(line)
            }
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(e) => {
                warn!("readline failed: {e}");
                InputEvent::Eof
            }
        }
    }
}

fn write_prompt(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "{}", styled_prompt())?;
    out.flush()
}

/// Plain line input for non-interactive stdin.
pub struct StdinInput {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptSource for StdinInput {
    async fn read_line(&mut self) -> InputEvent {
        if let Err(e) = write_prompt(&mut std::io::stdout()) {
            warn!("failed to write prompt: {e}");
        }

        match self.lines.next_line().await {
            Ok(Some(line)) => InputEvent::Line(line),
            Ok(None) => InputEvent::Eof,
            Err(e) => {
                warn!("failed to read stdin: {e}");
                InputEvent::Eof
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_prompt() {
        let mut out = Vec::new();
        write_prompt(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(console::strip_ansi_codes(&text), USER_LABEL);
    }

    #[test]
    fn test_write_prompt_reports_closed_output() {
        let err = write_prompt(&mut ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
