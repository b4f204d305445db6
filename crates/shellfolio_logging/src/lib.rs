#![deny(missing_docs)]
//! Shared logging utilities for the shellfolio workspace.
//!
//! Every crate logs through the `folio_*` macros so records carry the
//! `shellfolio` target and the transcript position they were emitted at.

use std::cell::Cell;

/// Log target used by every `folio_*` macro.
pub const TARGET: &str = "shellfolio";

thread_local! {
    /// Index of the transcript block currently being produced on this thread.
    static BLOCK_SEQ: Cell<usize> = const { Cell::new(0) };
}

/// Records the transcript block index the current thread is working on.
/// The front end calls this once per accepted command.
pub fn set_block_seq(seq: usize) {
    BLOCK_SEQ.with(|v| v.set(seq));
}

/// Returns the transcript block index recorded for the current thread.
/// Returns 0 before the first call to [`set_block_seq`].
pub fn block_seq() -> usize {
    BLOCK_SEQ.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current block index.
#[macro_export]
macro_rules! folio_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::TARGET, "[#{}] {}", $crate::block_seq(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current block index.
#[macro_export]
macro_rules! folio_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::TARGET, "[#{}] {}", $crate::block_seq(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current block index.
#[macro_export]
macro_rules! folio_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::TARGET, "[#{}] {}", $crate::block_seq(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current block index.
#[macro_export]
macro_rules! folio_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::TARGET, "[#{}] {}", $crate::block_seq(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current block index.
#[macro_export]
macro_rules! folio_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::TARGET, "[#{}] {}", $crate::block_seq(), format_args!($($arg)*));
    }};
}

/// Initializes a terminal logger on stderr for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use trace level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
}
