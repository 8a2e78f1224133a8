//! Console rendering of session events.
//!
//! Responses are printed exactly as received, after the `Gemini > ` label.
//! While a request is in flight a "thinking..." spinner runs on stderr.

use std::io::{self, Write};
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use gemterm_core::session::SessionOutput;
use gemterm_core::session::messages::{ASSISTANT_LABEL, FAREWELL, TURN_ERROR_HINT, turn_error_line};

/// [`SessionOutput`] that writes styled lines to `W`.
pub struct ConsoleOutput<W: Write> {
    out: W,
    spinner_enabled: bool,
    spinner: Option<ProgressBar>,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            spinner_enabled: true,
            spinner: None,
        }
    }

    /// Disable the in-flight spinner.
    pub fn without_spinner(mut self) -> Self {
        self.spinner_enabled = false;
        self
    }

    pub fn into_inner(mut self) -> W {
        self.stop_spinner();
        self.out
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

impl<W: Write> SessionOutput for ConsoleOutput<W> {
    fn submitting(&mut self) -> io::Result<()> {
        self.out.flush()?;
        if self.spinner_enabled {
            self.spinner = Some(thinking_spinner());
        }
        Ok(())
    }

    fn response(&mut self, text: &str) -> io::Result<()> {
        self.stop_spinner();
        writeln!(self.out, "{}{}", style(ASSISTANT_LABEL).yellow().bold(), text)?;
        self.out.flush()
    }

    fn turn_failed(&mut self, message: &str) -> io::Result<()> {
        self.stop_spinner();
        writeln!(self.out)?;
        writeln!(self.out, "{}", style(turn_error_line(message)).red())?;
        writeln!(self.out, "{}", style(TURN_ERROR_HINT).red())?;
        self.out.flush()
    }

    fn farewell(&mut self) -> io::Result<()> {
        self.stop_spinner();
        writeln!(self.out)?;
        writeln!(self.out, "{FAREWELL}")?;
        self.out.flush()
    }
}
