//! Command parsing: `/name[@bot] arg1 arg2 ...` into a [`Command`].

/// A parsed inbound command: lowercase name plus whitespace-separated argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Parses message text as a command.
    ///
    /// Returns `None` when the text is not a command (no leading `/`, empty or non
    /// `[A-Za-z0-9_]` name) or when it is addressed to a different bot via `/name@other_bot`.
    /// When `bot_username` is unknown, any `@target` is accepted.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        let head = tokens.next()?.strip_prefix('/')?;

        let (name, target) = match head.split_once('@') {
            Some((name, target)) => (name, Some(target)),
            None => (head, None),
        };

        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }

        if let Some(target) = target {
            if target.is_empty() {
                return None;
            }
            if let Some(me) = bot_username {
                if !target.eq_ignore_ascii_case(me.trim_start_matches('@')) {
                    return None;
                }
            }
        }

        Some(Self {
            name: name.to_ascii_lowercase(),
            args: tokens.map(str::to_string).collect(),
        })
    }

    /// The argument tokens joined with single spaces. Empty when there are no arguments.
    pub fn prompt(&self) -> String {
        self.args.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_without_args() {
        let cmd = Command::parse("/start", None).unwrap();
        assert_eq!(cmd.name, "start");
        assert!(cmd.args.is_empty());
        assert_eq!(cmd.prompt(), "");
    }

    #[test]
    fn test_parse_command_joins_args_with_single_space() {
        let cmd = Command::parse("/ask   What is  OI\nin options?", None).unwrap();
        assert_eq!(cmd.name, "ask");
        assert_eq!(cmd.args, vec!["What", "is", "OI", "in", "options?"]);
        assert_eq!(cmd.prompt(), "What is OI in options?");
    }

    #[test]
    fn test_parse_lowercases_name() {
        assert_eq!(Command::parse("/ASK hi", None).unwrap().name, "ask");
    }

    #[test]
    fn test_parse_rejects_non_commands() {
        assert!(Command::parse("hello /ask", None).is_none());
        assert!(Command::parse("", None).is_none());
        assert!(Command::parse("   ", None).is_none());
        assert!(Command::parse("/", None).is_none());
        assert!(Command::parse("/ask-me", None).is_none());
    }

    /// **Test: `/cmd@bot` is accepted for this bot (case-insensitive) and ignored for other bots.**
    #[test]
    fn test_parse_respects_bot_mention() {
        let cmd = Command::parse("/ask@OptionsGPTBot what is theta", Some("optionsgptbot")).unwrap();
        assert_eq!(cmd.name, "ask");
        assert_eq!(cmd.prompt(), "what is theta");

        assert!(Command::parse("/ask@other_bot hi", Some("OptionsGPTBot")).is_none());
        assert!(Command::parse("/ask@ hi", Some("OptionsGPTBot")).is_none());
        assert!(Command::parse("/ask@other_bot hi", None).is_some());
    }
}
