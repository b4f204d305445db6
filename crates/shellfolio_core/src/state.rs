use serde::Serialize;
use shellfolio_content::OutputLine;

use crate::seed::{seed_transcript, WORK_PROMPT};
use crate::view_model::AppViewModel;

/// One prompt/command/output exchange. Never edited once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandBlock {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<OutputLine>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Only the welcome transcript is present; nothing scrolls yet.
    #[default]
    IdleSeeded,
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    transcript: Vec<CommandBlock>,
    input: String,
    prompt: String,
    mode: SessionMode,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// A session seeded with the standard welcome transcript.
    pub fn new() -> Self {
        Self::with_seed(seed_transcript())
    }

    pub fn empty() -> Self {
        Self::with_seed(Vec::new())
    }

    pub fn with_seed(seed: Vec<CommandBlock>) -> Self {
        Self {
            transcript: seed,
            input: String::new(),
            prompt: WORK_PROMPT.to_string(),
            mode: SessionMode::IdleSeeded,
            dirty: false,
        }
    }

    pub fn transcript(&self) -> &[CommandBlock] {
        &self.transcript
    }

    pub fn pending_input(&self) -> &str {
        &self.input
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.dirty = true;
        }
    }

    pub(crate) fn clear_input(&mut self) {
        self.set_input(String::new());
    }

    /// Appends a block and returns its index.
    pub(crate) fn append(&mut self, block: CommandBlock) -> usize {
        self.transcript.push(block);
        self.dirty = true;
        self.transcript.len() - 1
    }

    pub(crate) fn mark_interactive(&mut self) {
        if self.mode != SessionMode::Interactive {
            self.mode = SessionMode::Interactive;
            self.dirty = true;
        }
    }
}
