pub const RESET: &str = "\x1b[0m";
pub const PROMPT: &str = "\x1b[32m";
pub const EMPHASIS: &str = "\x1b[1m";
pub const LINK: &str = "\x1b[4m";
pub const OUTPUT: &str = "\x1b[37m";

/// OSC 8 hyperlink open; followed by the target and [`HYPERLINK_END`].
pub const HYPERLINK_OPEN: &str = "\x1b]8;;";
pub const HYPERLINK_END: &str = "\x1b\\";
