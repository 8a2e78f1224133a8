//! Test doubles for driving the session loop.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use gemterm_types::llm::{CompletionRequest, CompletionResponse, FinishReason, LlmError, Usage};
use gemterm_types::session::InputEvent;

use crate::llm::LlmProvider;

use super::input::PromptSource;
use super::output::SessionOutput;

/// Provider that replays scripted results and records every request.
#[derive(Clone, Default)]
pub struct MockProvider {
    script: Arc<Mutex<VecDeque<Result<String, LlmError>>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, text: &str) -> Self {
        self.script.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, error: LlmError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.prompt.clone())
            .collect()
    }

    pub fn models(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.model.clone())
            .collect()
    }
}

impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("mock response".to_string()));

        next.map(|content| CompletionResponse {
            content,
            model: request.model.clone(),
            finish_reason: FinishReason::Stop,
            usage: Usage::default(),
        })
    }
}

/// Input that replays scripted events, then reports end of input.
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn lines<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::events(lines.into_iter().map(|l| InputEvent::Line(l.into())))
    }

    pub fn events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl PromptSource for ScriptedInput {
    async fn read_line(&mut self) -> InputEvent {
        self.events.pop_front().unwrap_or(InputEvent::Eof)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    Submitting,
    Response(String),
    Failed(String),
    Farewell,
}

/// Output that records what the loop showed.
#[derive(Default)]
pub struct RecordingOutput {
    pub events: Vec<OutputEvent>,
    broken: bool,
}

impl RecordingOutput {
    /// An output whose every write fails with `BrokenPipe`.
    pub fn failing() -> Self {
        Self {
            events: Vec::new(),
            broken: true,
        }
    }

    fn record(&mut self, event: OutputEvent) -> io::Result<()> {
        if self.broken {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"));
        }
        self.events.push(event);
        Ok(())
    }
}

impl SessionOutput for RecordingOutput {
    fn submitting(&mut self) -> io::Result<()> {
        self.record(OutputEvent::Submitting)
    }

    fn response(&mut self, text: &str) -> io::Result<()> {
        self.record(OutputEvent::Response(text.to_string()))
    }

    fn turn_failed(&mut self, message: &str) -> io::Result<()> {
        self.record(OutputEvent::Failed(message.to_string()))
    }

    fn farewell(&mut self) -> io::Result<()> {
        self.record(OutputEvent::Farewell)
    }
}
