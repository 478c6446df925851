//! # Input Parsing
//!
//! Turns one typed line into a [`Command`]. Names are passed through
//! untouched; the catalog lookups decide whether they exist.

use barista_core::validation::validate_name;

use crate::error::ApiError;

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Menu,
    Show,
    Base(String),
    Toggle(String),
    Sound(bool),
    Volume(f32),
    Test(String),
    Help,
    Quit,
}

/// Parses one input line.
///
/// Keywords are case-insensitive; the argument is the rest of the line so
/// multi-word names (`toggle whipped cream`) work.
pub fn parse(line: &str) -> Result<Command, ApiError> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "menu" | "ls" => Ok(Command::Menu),
        "show" | "order" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "base" => Ok(Command::Base(argument("base", rest)?)),
        "toggle" | "t" => Ok(Command::Toggle(argument("toggle", rest)?)),
        "test" => Ok(Command::Test(argument("test", rest)?)),
        "sound" => match rest.to_ascii_lowercase().as_str() {
            "on" => Ok(Command::Sound(true)),
            "off" => Ok(Command::Sound(false)),
            _ => Err(ApiError::invalid_command("usage: sound on|off")),
        },
        "volume" | "vol" => rest
            .parse::<f32>()
            .map(Command::Volume)
            .map_err(|_| ApiError::invalid_command("usage: volume <0..1>")),
        "" => Err(ApiError::invalid_command("empty command")),
        other => Err(ApiError::invalid_command(format!(
            "unknown command: {} (try 'help')",
            other
        ))),
    }
}

fn argument(keyword: &str, rest: &str) -> Result<String, ApiError> {
    validate_name(keyword, rest)
        .map(str::to_string)
        .map_err(|_| ApiError::invalid_command(format!("usage: {} <name>", keyword)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_keywords() {
        assert_eq!(parse("menu").unwrap(), Command::Menu);
        assert_eq!(parse("  SHOW ").unwrap(), Command::Show);
        assert_eq!(parse("quit").unwrap(), Command::Quit);
        assert_eq!(parse("sound off").unwrap(), Command::Sound(false));
        assert_eq!(parse("volume 0.75").unwrap(), Command::Volume(0.75));
    }

    #[test]
    fn test_multi_word_names() {
        assert_eq!(
            parse("toggle   Whipped Cream").unwrap(),
            Command::Toggle("Whipped Cream".to_string())
        );
        assert_eq!(
            parse("base black coffee").unwrap(),
            Command::Base("black coffee".to_string())
        );
    }

    #[test]
    fn test_bad_lines() {
        assert_eq!(parse("").unwrap_err().code, ErrorCode::InvalidCommand);
        assert_eq!(parse("brew").unwrap_err().message, "unknown command: brew (try 'help')");
        assert_eq!(parse("toggle").unwrap_err().message, "usage: toggle <name>");
        assert_eq!(parse("sound loud").unwrap_err().code, ErrorCode::InvalidCommand);
        assert_eq!(parse("volume high").unwrap_err().code, ErrorCode::InvalidCommand);
    }

    #[test]
    fn test_out_of_range_volume_still_parses() {
        // Range is checked when the settings are updated.
        assert_eq!(parse("volume 2").unwrap(), Command::Volume(2.0));
    }
}
