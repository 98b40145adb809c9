//! Interactive prompt: pick a mode, type values, see results

use reelfind_core::{ReelfindError, SearchMode};

pub const HELP: &str = "\
Type a value and press Enter to search with the current mode.
Commands:
  :mode <name>    switch mode (title, rating, budget, country, language)
  :value <text>   set the value without searching
  :search         search again with the current value
  :show           show the current results
  :modes          list modes
  :help           show this help
  :quit           exit";

#[derive(Debug, PartialEq)]
pub enum Command {
    Empty,
    Mode(SearchMode),
    Value(String),
    /// Set the value and search
    Submit(String),
    Search,
    Show,
    Modes,
    Help,
    Quit,
    Invalid(String),
}

/// Parse one line of input. Lines starting with `:` are commands,
/// anything else is a value to search for.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Command::Empty;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Command::Submit(line.to_string());
    };

    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, Some(arg)),
        None => (command, None),
    };

    match (name, arg) {
        ("mode", Some(arg)) => match arg.parse::<SearchMode>() {
            Ok(mode) => Command::Mode(mode),
            Err(ReelfindError::UnknownMode(m)) => Command::Invalid(format!("unknown mode '{}'", m)),
            Err(e) => Command::Invalid(e.to_string()),
        },
        ("mode", None) => Command::Invalid(":mode needs a mode name".to_string()),
        ("value", arg) => Command::Value(arg.unwrap_or_default().to_string()),
        ("search", None) => Command::Search,
        ("show", None) => Command::Show,
        ("modes", None) => Command::Modes,
        ("help", None) => Command::Help,
        ("quit" | "q" | "exit", None) => Command::Quit,
        _ => Command::Invalid(format!("unknown command ':{}' (try :help)", command)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_text_submits() {
        assert_eq!(parse_command("The Matrix\n"), Command::Submit("The Matrix".into()));
        assert_eq!(parse_command("  padded "), Command::Submit("  padded ".into()));
        assert_eq!(parse_command("   "), Command::Empty);
    }

    #[test]
    fn test_mode_command() {
        assert_eq!(parse_command(":mode rating"), Command::Mode(SearchMode::Rating));
        assert_eq!(parse_command(":mode Country"), Command::Mode(SearchMode::Country));
        assert_eq!(
            parse_command(":mode genre"),
            Command::Invalid("unknown mode 'genre'".into())
        );
        assert!(matches!(parse_command(":mode"), Command::Invalid(_)));
    }

    #[test]
    fn test_value_command_keeps_text() {
        assert_eq!(parse_command(":value 7.5"), Command::Value("7.5".into()));
        assert_eq!(parse_command(":value  two  spaces"), Command::Value(" two  spaces".into()));
        assert_eq!(parse_command(":value"), Command::Value(String::new()));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_command(":search"), Command::Search);
        assert_eq!(parse_command(":show"), Command::Show);
        assert_eq!(parse_command(":modes"), Command::Modes);
        assert_eq!(parse_command(":help"), Command::Help);
        assert_eq!(parse_command(":q"), Command::Quit);
        assert!(matches!(parse_command(":search now"), Command::Invalid(_)));
        assert!(matches!(parse_command(":bogus"), Command::Invalid(_)));
    }
}
