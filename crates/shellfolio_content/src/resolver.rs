use shellfolio_logging::{folio_debug, folio_trace};

use crate::catalog::{self, ProjectCategory, ProjectRecord, Section};
use crate::command::{normalize, Command, ProjectScope, ProjectsQuery, HELP_USAGES};
use crate::types::{Inline, OutputLine};

const FALLBACK_TEXT: &str = "Command not found. Try just help.";
const HELP_HEADING: &str = "Available commands:";
const INDENT: &str = "  ";

/// Outcome of resolving one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A known command and the lines it prints.
    Output(Vec<OutputLine>),
    /// A known command that prints nothing, such as `cd`.
    Silent,
    NotFound,
}

/// Maps raw input to its output. Pure: the same input always resolves to
/// the same lines.
pub fn resolve(raw: &str) -> Resolution {
    let normalized = normalize(raw);
    let Some(command) = Command::parse(&normalized) else {
        folio_debug!("no command matches {:?}", normalized);
        return Resolution::NotFound;
    };
    folio_trace!("resolved {:?} to {:?}", normalized, command);

    match command {
        Command::ChangeDirectory(_) => Resolution::Silent,
        command => Resolution::Output(render_command(&command)),
    }
}

/// The line shown in place of output when nothing matched.
pub fn fallback_line() -> OutputLine {
    OutputLine::text(FALLBACK_TEXT)
}

impl ProjectsQuery {
    /// Selects the category first, then truncates to `limit`.
    pub fn select(&self) -> Vec<&'static ProjectRecord> {
        let current = catalog::projects(ProjectCategory::Current);
        let past = catalog::projects(ProjectCategory::Past);
        let selected: Vec<&'static ProjectRecord> = match self.scope {
            ProjectScope::All => current.iter().chain(past).collect(),
            ProjectScope::Current => current.iter().collect(),
            ProjectScope::Past => past.iter().collect(),
        };
        match self.limit {
            Some(limit) => selected.into_iter().take(limit).collect(),
            None => selected,
        }
    }
}

fn render_command(command: &Command) -> Vec<OutputLine> {
    match command {
        Command::Introduce => vec![OutputLine::rich(vec![
            Inline::plain("Hey there, I’m "),
            Inline::emphasis(catalog::OWNER_NAME),
            Inline::plain(format!(", {}", catalog::INTRODUCTION)),
        ])],
        Command::Contact => {
            let mailto = format!("mailto:{}", catalog::CONTACT_EMAIL);
            vec![OutputLine::labelled_link(catalog::CONTACT_EMAIL, &mailto)]
        }
        Command::Social => catalog::SOCIAL_PROFILES
            .iter()
            .map(|(label, href)| OutputLine::labelled_link(label, href))
            .collect(),
        Command::Education => catalog::EDUCATION
            .iter()
            .map(|(school, credential)| {
                OutputLine::rich(vec![
                    Inline::emphasis(*school),
                    Inline::plain(format!(": {credential}")),
                ])
            })
            .collect(),
        Command::Background => catalog::BACKGROUND
            .iter()
            .map(|line| OutputLine::text(line))
            .collect(),
        Command::Speaking => sections(catalog::SPEAKING),
        Command::Community => sections(catalog::COMMUNITY),
        Command::Hackathon => catalog::HACKATHONS
            .iter()
            .map(|(award, summary)| {
                OutputLine::rich(vec![
                    Inline::emphasis(*award),
                    Inline::plain(format!(": {summary}")),
                ])
            })
            .collect(),
        Command::ForFun => {
            let (label, href) = catalog::FOR_FUN_FEATURED;
            let mut lines = vec![
                OutputLine::text(catalog::FOR_FUN_HEADING),
                OutputLine::labelled_link(label, href),
            ];
            lines.extend(
                catalog::projects(ProjectCategory::ForFun)
                    .iter()
                    .map(OutputLine::project),
            );
            lines
        }
        Command::Help => std::iter::once(OutputLine::text(HELP_HEADING))
            .chain(
                HELP_USAGES
                    .iter()
                    .map(|usage| OutputLine::text(&format!("{INDENT}{usage}"))),
            )
            .collect(),
        Command::Projects(query) => query
            .select()
            .into_iter()
            .map(OutputLine::project)
            .collect(),
        Command::ChangeDirectory(_) => Vec::new(),
    }
}

/// Sections are separated by one blank line.
fn sections(sections: &[Section]) -> Vec<OutputLine> {
    let mut lines = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            lines.push(OutputLine::text(""));
        }
        lines.push(OutputLine::rich(vec![Inline::emphasis(section.heading)]));
        lines.extend(
            section
                .entries
                .iter()
                .map(|entry| OutputLine::text(&format!("{INDENT}{entry}"))),
        );
    }
    lines
}
