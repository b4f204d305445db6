use std::io::{self, Write};

use shellfolio_core::{AppState, BlockView, Effect};
use shellfolio_logging::{folio_debug, folio_trace, set_block_seq};

use super::ui::render::{render_output, Theme};

/// Executes store effects against a terminal-like writer.
///
/// The terminal has already echoed the typed command, so appended blocks
/// print their output lines only.
pub struct EffectRunner<W: Write> {
    out: W,
    theme: Theme,
}

impl<W: Write> EffectRunner<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }

    pub fn run(&mut self, state: &AppState, effects: Vec<Effect>) -> io::Result<()> {
        for effect in effects {
            match effect {
                Effect::BlockAppended { index } => {
                    set_block_seq(index);
                    let Some(block) = state.transcript().get(index) else {
                        continue;
                    };
                    let view = BlockView::from_block(block);
                    folio_debug!(
                        "rendering block command={:?} lines={}",
                        view.command,
                        view.lines.len()
                    );
                    self.out
                        .write_all(render_output(&view, self.theme).as_bytes())?;
                }
                Effect::ScrollToEnd => {
                    folio_trace!("scroll to end");
                    self.out.flush()?;
                }
            }
        }
        Ok(())
    }

    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }
}
