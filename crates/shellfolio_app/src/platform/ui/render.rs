use shellfolio_content::{link_kind, LinkKind};
use shellfolio_core::{AppViewModel, BlockView, Span, ViewLine};

use super::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: bool,
}

impl Theme {
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// The prompt shown before the visitor types, without a trailing newline.
pub fn render_prompt(prompt: &str, theme: Theme) -> String {
    format!("{} ", theme.paint(PROMPT, prompt))
}

pub fn render_transcript(view: &AppViewModel, theme: Theme) -> String {
    view.blocks
        .iter()
        .map(|block| render_block(block, theme))
        .collect()
}

/// Prompt line plus output lines, each newline-terminated.
pub fn render_block(block: &BlockView, theme: Theme) -> String {
    let mut out = render_prompt(&block.prompt, theme);
    if let Some(command) = &block.command {
        out.push_str(command);
    }
    out.push('\n');
    out.push_str(&render_output(block, theme));
    out
}

/// Only the output lines; used when the terminal already echoed the command.
pub fn render_output(block: &BlockView, theme: Theme) -> String {
    block
        .lines
        .iter()
        .map(|line| format!("{}\n", render_line(line, theme)))
        .collect()
}

fn render_line(line: &ViewLine, theme: Theme) -> String {
    let body: String = line
        .spans
        .iter()
        .map(|span| render_span(span, theme))
        .collect();
    if theme.color && !body.is_empty() {
        format!("{OUTPUT}{body}{RESET}")
    } else {
        body
    }
}

fn render_span(span: &Span, theme: Theme) -> String {
    match span {
        Span::Plain(text) => text.clone(),
        Span::Emphasis(text) => {
            if theme.color {
                // Re-enter the output colour after the reset.
                format!("{EMPHASIS}{text}{RESET}{OUTPUT}")
            } else {
                text.clone()
            }
        }
        Span::Link { label, href } => render_link(label, href, theme),
    }
}

fn render_link(label: &str, href: &str, theme: Theme) -> String {
    if theme.color {
        return format!(
            "{HYPERLINK_OPEN}{href}{HYPERLINK_END}{LINK}{label}{RESET}{OUTPUT}{HYPERLINK_OPEN}{HYPERLINK_END}"
        );
    }
    match link_kind(href) {
        LinkKind::Email => label.to_string(),
        LinkKind::Web if label == href => label.to_string(),
        LinkKind::Web => format!("{label} <{href}>"),
    }
}
