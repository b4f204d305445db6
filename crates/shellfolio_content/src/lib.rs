//! Shellfolio content: static portfolio tables and the pure command resolver.
pub mod catalog;
mod command;
mod links;
mod resolver;
mod types;

pub use command::{normalize, Command, ProjectScope, ProjectsQuery, HELP_USAGES};
pub use links::{abbreviate_url, link_kind, LinkKind};
pub use resolver::{fallback_line, resolve, Resolution};
pub use types::{Inline, OutputLine, RichText};
