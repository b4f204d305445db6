//! Parsing of normalized input into a [`Command`].
//!
//! Examples:
//!   "just contact"                       -> Command::Contact
//!   "just projects"                      -> Projects { scope: All, limit: None }
//!   "just projects --current --limit 3"  -> Projects { scope: Current, limit: Some(3) }
//!   "just projects --current --past"     -> Projects { scope: Past, limit: None }
//!   "cd work"                            -> ChangeDirectory(Some("work"))

const PREFIX: &str = "just";
const PROJECTS: &str = "projects";
const FLAG_CURRENT: &str = "--current";
const FLAG_PAST: &str = "--past";
const FLAG_LIMIT: &str = "--limit";
const CHANGE_DIRECTORY: &str = "cd";

/// Canonical usages listed by `just help`, in display order.
pub const HELP_USAGES: &[&str] = &[
    "just introduce",
    "just projects",
    "just projects --current",
    "just projects --current --limit 3",
    "just projects --past",
    "just contact",
    "just social",
    "just education",
    "just background",
    "just speaking",
    "just community",
    "just hackathon",
    "just forfun",
    "just help",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Introduce,
    Contact,
    Social,
    Education,
    Background,
    Speaking,
    Community,
    Hackathon,
    ForFun,
    Help,
    Projects(ProjectsQuery),
    /// Simulated navigation; accepted but produces no output.
    ChangeDirectory(Option<String>),
}

impl Command {
    /// Parses an already normalized line. Returns `None` when nothing matches.
    pub fn parse(normalized: &str) -> Option<Command> {
        let mut tokens = normalized.split(' ').filter(|t| !t.is_empty());
        match tokens.next()? {
            PREFIX => {}
            CHANGE_DIRECTORY => {
                let target = tokens.collect::<Vec<_>>().join(" ");
                let target = (!target.is_empty()).then_some(target);
                return Some(Command::ChangeDirectory(target));
            }
            _ => return None,
        }

        let name = tokens.next()?;
        if name == PROJECTS {
            let flags: Vec<&str> = tokens.collect();
            return Some(Command::Projects(ProjectsQuery::parse_flags(&flags)));
        }

        // Everything except `projects` is an exact match.
        if tokens.next().is_some() {
            return None;
        }
        let command = match name {
            "introduce" => Command::Introduce,
            "contact" => Command::Contact,
            "social" => Command::Social,
            "education" => Command::Education,
            "background" => Command::Background,
            "speaking" => Command::Speaking,
            "community" => Command::Community,
            "hackathon" => Command::Hackathon,
            "forfun" => Command::ForFun,
            "help" => Command::Help,
            _ => return None,
        };
        Some(command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectScope {
    /// Current projects followed by past projects.
    #[default]
    All,
    Current,
    Past,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectsQuery {
    pub scope: ProjectScope,
    pub limit: Option<usize>,
}

impl ProjectsQuery {
    /// Reads `--current`, `--past` and `--limit N` from the tokens after
    /// `just projects`. `--past` wins over `--current`. `--limit` only takes
    /// the next token when it is a non-negative integer; unknown tokens are
    /// ignored.
    pub fn parse_flags(tokens: &[&str]) -> Self {
        let mut current = false;
        let mut past = false;
        let mut limit = None;

        let mut iter = tokens.iter().peekable();
        while let Some(token) = iter.next() {
            match *token {
                FLAG_CURRENT => current = true,
                FLAG_PAST => past = true,
                FLAG_LIMIT => {
                    if let Some(n) = iter.peek().and_then(|next| next.parse::<usize>().ok()) {
                        limit = Some(n);
                        iter.next();
                    }
                }
                _ => {}
            }
        }

        let scope = if past {
            ProjectScope::Past
        } else if current {
            ProjectScope::Current
        } else {
            ProjectScope::All
        };
        Self { scope, limit }
    }
}

/// Trims, lowercases and collapses internal whitespace runs to one space.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{normalize, Command, ProjectScope, ProjectsQuery};

    #[test]
    fn normalize_trims_lowercases_and_collapses() {
        assert_eq!(normalize("  Just   PROJECTS\t--Past \n"), "just projects --past");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn past_wins_over_current() {
        let query = ProjectsQuery::parse_flags(&["--current", "--past"]);
        assert_eq!(query.scope, ProjectScope::Past);
        let query = ProjectsQuery::parse_flags(&["--past", "--current"]);
        assert_eq!(query.scope, ProjectScope::Past);
    }

    #[test]
    fn limit_requires_a_non_negative_integer() {
        assert_eq!(ProjectsQuery::parse_flags(&["--limit", "3"]).limit, Some(3));
        assert_eq!(ProjectsQuery::parse_flags(&["--limit", "0"]).limit, Some(0));
        assert_eq!(ProjectsQuery::parse_flags(&["--limit", "-1"]).limit, None);
        assert_eq!(ProjectsQuery::parse_flags(&["--limit", "three"]).limit, None);
        assert_eq!(ProjectsQuery::parse_flags(&["--limit"]).limit, None);
    }

    #[test]
    fn unparseable_limit_does_not_swallow_following_flag() {
        let query = ProjectsQuery::parse_flags(&["--limit", "--past"]);
        assert_eq!(query.scope, ProjectScope::Past);
        assert_eq!(query.limit, None);
    }

    #[test]
    fn projects_prefix_is_matched_on_token_boundary() {
        assert_eq!(Command::parse("just projectsx"), None);
        assert!(matches!(
            Command::parse("just projects --bogus"),
            Some(Command::Projects(ProjectsQuery {
                scope: ProjectScope::All,
                limit: None
            }))
        ));
    }

    #[test]
    fn exact_commands_reject_trailing_tokens() {
        assert_eq!(Command::parse("just contact"), Some(Command::Contact));
        assert_eq!(Command::parse("just contact me"), None);
        assert_eq!(Command::parse("contact"), None);
        assert_eq!(Command::parse("just"), None);
    }

    #[test]
    fn change_directory_keeps_target() {
        assert_eq!(
            Command::parse("cd ~/code/lz"),
            Some(Command::ChangeDirectory(Some("~/code/lz".to_string())))
        );
        assert_eq!(Command::parse("cd"), Some(Command::ChangeDirectory(None)));
    }
}
