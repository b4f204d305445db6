use shellfolio_content::{fallback_line, resolve, Resolution};

use crate::CommandBlock;

pub const INITIAL_PROMPT: &str = "~(work:main) [py:3.13] $";
pub const LZ_PROMPT: &str = "~/code/lz (main) [py:3.13] $";
/// Prompt for every visitor-entered command.
pub const WORK_PROMPT: &str = "~/code/lz/work (main) [py:3.13] $";

/// The welcome transcript: two navigation steps into the work directory,
/// then a few commands already "run".
pub fn seed_transcript() -> Vec<CommandBlock> {
    vec![
        seeded(INITIAL_PROMPT, "cd ~/code/lz"),
        seeded(LZ_PROMPT, "cd work"),
        seeded(WORK_PROMPT, "just introduce"),
        seeded(WORK_PROMPT, "just projects --current --limit 3"),
        seeded(WORK_PROMPT, "just contact"),
    ]
}

fn seeded(prompt: &str, command: &str) -> CommandBlock {
    let resolution = resolve(command);
    debug_assert!(
        !matches!(resolution, Resolution::NotFound),
        "seed command {command:?} does not resolve"
    );
    let output = match resolution {
        Resolution::Output(lines) => Some(lines),
        Resolution::Silent => None,
        Resolution::NotFound => Some(vec![fallback_line()]),
    };
    CommandBlock {
        prompt: prompt.to_string(),
        command: Some(command.to_string()),
        output,
    }
}
