//! The read/submit/print loop.

use std::io;

use tracing::{Instrument, debug, info, info_span, warn};

use gemterm_types::llm::CompletionRequest;
use gemterm_types::session::{InputEvent, SessionState, SessionSummary, Turn, TurnOutcome};

use crate::llm::BoxLlmProvider;

use super::input::{InputAction, PromptSource, classify};
use super::output::SessionOutput;

/// Drives one interactive session against a single provider handle.
///
/// The handle is owned for the whole session and never replaced; a failed
/// turn leaves it untouched. Turns are stateless: nothing from one request
/// is sent with the next.
pub struct SessionLoop {
    provider: BoxLlmProvider,
    state: SessionState,
    summary: SessionSummary,
}

impl SessionLoop {
    pub fn new(provider: BoxLlmProvider) -> Self {
        Self {
            provider,
            state: SessionState::AwaitingInput,
            summary: SessionSummary::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    pub fn provider(&self) -> &BoxLlmProvider {
        &self.provider
    }

    /// Submit one prompt as a single request and await its response.
    pub async fn submit(&self, prompt: &str) -> TurnOutcome {
        let request = CompletionRequest::new(self.provider.model(), prompt);
        debug!(
            provider = self.provider.name(),
            model = %request.model,
            prompt_chars = prompt.chars().count(),
            "submitting prompt"
        );

        match self.provider.complete(&request).await {
            Ok(response) => {
                debug!(
                    finish_reason = %response.finish_reason,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "response received"
                );
                TurnOutcome::Completed(Turn {
                    prompt: request.prompt,
                    response: response.content,
                })
            }
            Err(e) => {
                warn!(error = %e, "turn failed");
                TurnOutcome::Failed {
                    prompt: request.prompt,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Run until blank input, `exit`, end of input, or interrupt.
    ///
    /// Only output errors end the loop early; provider errors are reported
    /// through [`SessionOutput::turn_failed`] and the loop continues.
    pub async fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> io::Result<SessionSummary>
    where
        I: PromptSource,
        O: SessionOutput,
    {
        while self.state != SessionState::Terminated {
            let line = match input.read_line().await {
                InputEvent::Line(line) => line,
                InputEvent::Eof | InputEvent::Interrupted => String::new(),
            };

            let prompt = match classify(&line) {
                InputAction::Exit => {
                    self.state = SessionState::Terminated;
                    output.farewell()?;
                    break;
                }
                InputAction::Prompt(prompt) => prompt,
            };

            self.state = SessionState::Submitting;
            output.submitting()?;

            let turn_number = self.summary.total_turns() + 1;
            let outcome = self
                .submit(&prompt)
                .instrument(info_span!("turn", number = turn_number))
                .await;

            self.state = SessionState::AwaitingInput;
            match outcome {
                TurnOutcome::Completed(turn) => {
                    self.summary.completed_turns += 1;
                    output.response(&turn.response)?;
                }
                TurnOutcome::Failed { message, .. } => {
                    self.summary.failed_turns += 1;
                    output.turn_failed(&message)?;
                }
            }
        }

        info!(
            completed = self.summary.completed_turns,
            failed = self.summary.failed_turns,
            "session ended"
        );
        Ok(self.summary)
    }
}
