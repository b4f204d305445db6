use std::sync::Once;

use shellfolio_content::{fallback_line, resolve, OutputLine, Resolution, HELP_USAGES};
use shellfolio_core::{update, AppState, Effect, Msg, SessionMode, INITIAL_PROMPT, WORK_PROMPT};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(shellfolio_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::Submitted)
}

#[test]
fn seed_transcript_has_navigation_then_three_commands() {
    init_logging();
    let state = AppState::new();
    let blocks = state.transcript();

    assert_eq!(blocks.len(), 5);
    assert_eq!(blocks[0].prompt, INITIAL_PROMPT);
    assert_eq!(blocks[0].command.as_deref(), Some("cd ~/code/lz"));
    assert_eq!(blocks[0].output, None);
    assert_eq!(blocks[1].command.as_deref(), Some("cd work"));
    assert_eq!(blocks[1].output, None);

    let commands: Vec<_> = blocks[2..]
        .iter()
        .map(|block| block.command.as_deref().unwrap())
        .collect();
    assert_eq!(
        commands,
        vec!["just introduce", "just projects --current --limit 3", "just contact"]
    );
    assert!(blocks[2..]
        .iter()
        .all(|block| block.prompt == WORK_PROMPT && block.output.is_some()));
    assert_eq!(state.mode(), SessionMode::IdleSeeded);
}

#[test]
fn help_then_whitespace_scenario() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "just help");

    assert_eq!(state.transcript().len(), 6);
    let block = &state.transcript()[5];
    assert_eq!(block.prompt, WORK_PROMPT);
    assert_eq!(block.command.as_deref(), Some("just help"));
    let output = block.output.as_ref().expect("help output");
    assert_eq!(output.len(), HELP_USAGES.len() + 1);
    assert_eq!(output[0], OutputLine::text("Available commands:"));
    assert_eq!(
        effects,
        vec![Effect::BlockAppended { index: 5 }, Effect::ScrollToEnd]
    );

    let (state, effects) = submit(state, "  ");
    assert_eq!(state.transcript().len(), 6);
    assert!(effects.is_empty());
}

#[test]
fn empty_submission_keeps_pending_input() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputChanged(" \t ".to_string()));
    let (state, effects) = update(state, Msg::Submitted);

    assert_eq!(state.pending_input(), " \t ");
    assert_eq!(state.transcript().len(), 5);
    assert_eq!(state.mode(), SessionMode::IdleSeeded);
    assert!(effects.is_empty());
}

#[test]
fn transcript_grows_only_for_non_empty_submissions() {
    init_logging();
    let inputs = ["just contact", "", "   ", "nope", "\n", "just projects --past", "cd .."];
    let mut state = AppState::new();
    for input in inputs {
        state = submit(state, input).0;
    }

    let non_empty = inputs.iter().filter(|i| !i.trim().is_empty()).count();
    assert_eq!(state.transcript().len(), 5 + non_empty);
}

#[test]
fn unknown_command_appends_single_fallback_line() {
    init_logging();
    let (state, _) = submit(AppState::new(), "  Sudo Make Me A Sandwich ");
    let block = state.transcript().last().unwrap();

    assert_eq!(block.command.as_deref(), Some("Sudo Make Me A Sandwich"));
    assert_eq!(block.output, Some(vec![fallback_line()]));
}

#[test]
fn stored_command_keeps_original_casing() {
    init_logging();
    let (state, _) = submit(AppState::new(), "  JUST Contact  ");
    let block = state.transcript().last().unwrap();

    assert_eq!(block.command.as_deref(), Some("JUST Contact"));
    assert_eq!(
        block.output,
        match resolve("just contact") {
            Resolution::Output(lines) => Some(lines),
            other => panic!("unexpected {other:?}"),
        }
    );
}

#[test]
fn silent_command_has_no_output_and_no_fallback() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "cd ~/code");
    let block = state.transcript().last().unwrap();

    assert_eq!(block.output, None);
    assert_eq!(effects.len(), 2);
}

#[test]
fn submission_clears_input_and_becomes_interactive() {
    init_logging();
    let (mut state, _) = submit(AppState::new(), "just social");

    assert_eq!(state.pending_input(), "");
    assert_eq!(state.mode(), SessionMode::Interactive);
    assert!(state.view().interactive);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn focus_marks_interactive_without_appending() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::Focused);

    assert_eq!(state.mode(), SessionMode::Interactive);
    assert_eq!(state.transcript().len(), 5);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::Focused);
    assert!(!state.consume_dirty());
}

#[test]
fn repeated_command_produces_identical_output() {
    init_logging();
    let (state, _) = submit(AppState::new(), "just forfun");
    let (state, _) = submit(state, "just forfun");
    let blocks = state.transcript();

    assert_eq!(blocks[5].output, blocks[6].output);
    assert_eq!(blocks[5], blocks[6]);
}

#[test]
fn replay_is_deterministic() {
    init_logging();
    let script = ["just introduce", "bogus", "  ", "JUST PROJECTS --LIMIT 2", "just help"];
    let run = || {
        script
            .iter()
            .fold(AppState::new(), |state, input| submit(state, input).0)
    };

    assert_eq!(run().transcript(), run().transcript());
}

#[test]
fn earlier_blocks_are_never_modified() {
    init_logging();
    let state = AppState::new();
    let seed = state.transcript().to_vec();
    let (state, _) = submit(state, "just education");
    let (state, _) = submit(state, "whoami");

    assert_eq!(state.transcript()[..5].to_vec(), seed);
}

#[test]
fn empty_seed_starts_with_no_blocks() {
    init_logging();
    let (state, effects) = submit(AppState::empty(), "just help");

    assert_eq!(state.transcript().len(), 1);
    assert_eq!(effects[0], Effect::BlockAppended { index: 0 });
}
