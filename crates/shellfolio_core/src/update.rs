use shellfolio_content::{fallback_line, resolve, Resolution};
use shellfolio_logging::{folio_debug, folio_info};

use crate::{AppState, CommandBlock, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::Submitted => {
            let command = state.pending_input().trim().to_string();
            if command.is_empty() {
                return (state, Vec::new());
            }

            let output = match resolve(&command) {
                Resolution::Output(lines) => Some(lines),
                Resolution::Silent => None,
                Resolution::NotFound => {
                    folio_info!("unrecognized command {:?}", command);
                    Some(vec![fallback_line()])
                }
            };
            let block = CommandBlock {
                prompt: state.prompt().to_string(),
                command: Some(command),
                output,
            };
            let index = state.append(block);
            state.clear_input();
            // Submitting is an interaction, so the new block always scrolls into view.
            state.mark_interactive();
            folio_debug!("appended block {}", index);

            vec![Effect::BlockAppended { index }, Effect::ScrollToEnd]
        }
        Msg::Focused => {
            state.mark_interactive();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
