//! Shellfolio core: pure transcript state machine and view-model helpers.
mod effect;
mod msg;
mod seed;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use seed::{seed_transcript, INITIAL_PROMPT, LZ_PROMPT, WORK_PROMPT};
pub use state::{AppState, CommandBlock, SessionMode};
pub use update::update;
pub use view_model::{AppViewModel, BlockView, Span, ViewLine};
