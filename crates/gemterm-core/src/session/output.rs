//! Output side of the session loop.

use std::io;

/// Sink for everything the loop shows the user.
///
/// Each accepted prompt produces exactly one `submitting` call followed by
/// exactly one of `response` or `turn_failed`.
pub trait SessionOutput {
    /// A prompt was accepted and the request is in flight.
    fn submitting(&mut self) -> io::Result<()>;

    /// The provider's response text, to be shown unmodified.
    fn response(&mut self, text: &str) -> io::Result<()>;

    /// The request failed; `message` is the error's message.
    fn turn_failed(&mut self, message: &str) -> io::Result<()>;

    /// The session is ending.
    fn farewell(&mut self) -> io::Result<()>;
}
