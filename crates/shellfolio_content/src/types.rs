use serde::Serialize;

use crate::catalog::ProjectRecord;
use crate::links::abbreviate_url;

/// One formatting run inside a text line. The renderer decides how each
/// variant is shown; content never carries raw markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Plain(String),
    Emphasis(String),
}

impl Inline {
    pub fn plain(text: impl Into<String>) -> Self {
        Inline::Plain(text.into())
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        Inline::Emphasis(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Inline::Plain(text) | Inline::Emphasis(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RichText(Vec<Inline>);

impl RichText {
    pub fn new(spans: Vec<Inline>) -> Self {
        Self(spans)
    }

    pub fn spans(&self) -> &[Inline] {
        &self.0
    }

    /// Concatenated text of every span with formatting dropped.
    pub fn plain_text(&self) -> String {
        self.0.iter().map(Inline::text).collect()
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self(vec![Inline::plain(text)])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputLine {
    Text {
        content: RichText,
    },
    Link {
        content: String,
        href: String,
    },
    ProjectEntry {
        name: String,
        description: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
    },
}

impl OutputLine {
    pub fn text(content: &str) -> Self {
        OutputLine::Text {
            content: content.into(),
        }
    }

    pub fn rich(spans: Vec<Inline>) -> Self {
        OutputLine::Text {
            content: RichText::new(spans),
        }
    }

    /// Link whose label is the abbreviated hostname of `href`.
    pub fn link(href: &str) -> Self {
        OutputLine::Link {
            content: abbreviate_url(href),
            href: href.to_string(),
        }
    }

    pub fn labelled_link(label: &str, href: &str) -> Self {
        OutputLine::Link {
            content: label.to_string(),
            href: href.to_string(),
        }
    }

    pub fn project(record: &ProjectRecord) -> Self {
        OutputLine::ProjectEntry {
            name: record.name.to_string(),
            description: record.description.to_string(),
            href: record.href.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Inline, OutputLine, RichText};

    #[test]
    fn plain_text_drops_emphasis() {
        let text = RichText::new(vec![
            Inline::plain("Hey, I'm "),
            Inline::emphasis("Lana"),
            Inline::plain("."),
        ]);
        assert_eq!(text.plain_text(), "Hey, I'm Lana.");
    }

    #[test]
    fn link_label_defaults_to_hostname() {
        assert_eq!(
            OutputLine::link("https://www.example.org/about"),
            OutputLine::Link {
                content: "example.org".to_string(),
                href: "https://www.example.org/about".to_string(),
            }
        );
    }
}
