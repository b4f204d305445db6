use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Context;
use clap::Parser;
use shellfolio_core::{update, AppState, Msg};
use shellfolio_logging::{folio_info, folio_trace};

use super::cli::{Cli, OutputFormat};
use super::config::{AppConfig, ColorMode};
use super::effects::EffectRunner;
use super::logging;
use super::ui::render::{render_prompt, render_transcript, Theme};

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    let destination = cli.log.unwrap_or(config.log.destination);
    logging::initialize(destination, &config.log.path, config.log.level_filter()?);
    folio_info!("starting shellfolio (destination={:?})", destination);

    let stdout = io::stdout();
    let theme = Theme {
        color: use_color(&cli, config.color, stdout.is_terminal()),
    };
    let state = if cli.no_seed {
        AppState::empty()
    } else {
        AppState::new()
    };

    if cli.commands.is_empty() {
        let stdin = io::stdin();
        run_interactive(state, stdin.lock(), stdout.lock(), theme)
            .context("interactive session failed")
    } else {
        run_scripted(state, &cli.commands, cli.format, stdout.lock(), theme)
            .context("scripted session failed")
    }
}

fn use_color(cli: &Cli, mode: ColorMode, is_terminal: bool) -> bool {
    if cli.no_color {
        return false;
    }
    match mode {
        ColorMode::Auto => is_terminal,
        ColorMode::Always => true,
        ColorMode::Never => false,
    }
}

/// Shows the transcript, then reads one command per line until EOF.
pub fn run_interactive<R: BufRead, W: Write>(
    mut state: AppState,
    input: R,
    out: W,
    theme: Theme,
) -> anyhow::Result<()> {
    let mut runner = EffectRunner::new(out, theme);
    runner.write_str(&render_transcript(&state.view(), theme))?;

    let mut focused = false;
    let mut input = input;
    let mut buf = Vec::new();
    loop {
        runner.write_str(&render_prompt(state.prompt(), theme))?;
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("failed to read input")?;
        if read == 0 {
            break;
        }
        let line = decode_line(&buf);

        if !focused {
            state = dispatch(state, Msg::Focused, &mut runner)?;
            focused = true;
        }
        state = dispatch(state, Msg::InputChanged(line), &mut runner)?;
        state = dispatch(state, Msg::Submitted, &mut runner)?;
    }

    // Leave the shell on a fresh line after EOF.
    runner.write_str("\n")?;
    folio_info!("session ended after {} blocks", state.transcript().len());
    Ok(())
}

/// Applies `commands` in order and prints the resulting transcript.
pub fn run_scripted<W: Write>(
    mut state: AppState,
    commands: &[String],
    format: OutputFormat,
    mut out: W,
    theme: Theme,
) -> anyhow::Result<()> {
    for command in commands {
        state = update(state, Msg::InputChanged(command.clone())).0;
        state = update(state, Msg::Submitted).0;
    }

    match format {
        OutputFormat::Text => out.write_all(render_transcript(&state.view(), theme).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, state.transcript())
                .context("failed to serialize transcript")?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Undecodable bytes become U+FFFD so the line still resolves, to the fallback if nothing else.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

fn dispatch<W: Write>(
    state: AppState,
    msg: Msg,
    runner: &mut EffectRunner<W>,
) -> anyhow::Result<AppState> {
    let (mut state, effects) = update(state, msg);
    runner.run(&state, effects)?;
    if state.consume_dirty() {
        folio_trace!("state changed; {} blocks", state.transcript().len());
    }
    Ok(state)
}
