use shellfolio_content::{abbreviate_url, Inline, OutputLine};

use crate::{AppState, CommandBlock, SessionMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Emphasis(String),
    Link { label: String, href: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewLine {
    pub spans: Vec<Span>,
}

impl ViewLine {
    fn single(span: Span) -> Self {
        Self { spans: vec![span] }
    }

    /// Line text with styling and link targets dropped.
    pub fn plain_text(&self) -> String {
        self.spans
            .iter()
            .map(|span| match span {
                Span::Plain(text) | Span::Emphasis(text) => text.as_str(),
                Span::Link { label, .. } => label.as_str(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockView {
    pub prompt: String,
    pub command: Option<String>,
    pub lines: Vec<ViewLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub interactive: bool,
    pub blocks: Vec<BlockView>,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        Self {
            input: state.pending_input().to_string(),
            interactive: state.mode() == SessionMode::Interactive,
            blocks: state.transcript().iter().map(BlockView::from_block).collect(),
        }
    }
}

impl BlockView {
    pub fn from_block(block: &CommandBlock) -> Self {
        let lines = block
            .output
            .iter()
            .flatten()
            .flat_map(expand_line)
            .collect();
        Self {
            prompt: block.prompt.clone(),
            command: block.command.clone(),
            lines,
        }
    }
}

/// Project entries become a name line, a description line and, when an
/// href is present, a link line labelled with the abbreviated host.
fn expand_line(line: &OutputLine) -> Vec<ViewLine> {
    match line {
        OutputLine::Text { content } => vec![ViewLine {
            spans: content
                .spans()
                .iter()
                .map(|inline| match inline {
                    Inline::Plain(text) => Span::Plain(text.clone()),
                    Inline::Emphasis(text) => Span::Emphasis(text.clone()),
                })
                .collect(),
        }],
        OutputLine::Link { content, href } => vec![ViewLine::single(Span::Link {
            label: content.clone(),
            href: href.clone(),
        })],
        OutputLine::ProjectEntry {
            name,
            description,
            href,
        } => {
            let mut lines = vec![
                ViewLine::single(Span::Emphasis(name.clone())),
                ViewLine::single(Span::Plain(description.clone())),
            ];
            if let Some(href) = href {
                lines.push(ViewLine::single(Span::Link {
                    label: abbreviate_url(href),
                    href: href.clone(),
                }));
            }
            lines
        }
    }
}
