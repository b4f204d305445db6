use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use super::logging::LogDestination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A portfolio you browse like a shell. Type `just help` to start.
#[derive(Debug, Parser)]
#[command(name = "shellfolio", version, about)]
pub struct Cli {
    /// RON configuration file. Defaults to ./shellfolio.ron when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable ANSI colours and hyperlinks.
    #[arg(long)]
    pub no_color: bool,

    /// Run these commands non-interactively and print the transcript.
    #[arg(short = 'c', long = "command", value_name = "CMD")]
    pub commands: Vec<String>,

    /// Transcript format for scripted runs.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Start from an empty transcript instead of the welcome sequence.
    #[arg(long)]
    pub no_seed: bool,

    /// Override the configured log destination.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
}
