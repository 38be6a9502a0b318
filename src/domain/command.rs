//! Volume command interpretation
//!
//! Turns the single positional token into the action to perform.
//!
//! Grammar:
//!
//! - no token: show the current volume
//! - `N`: set the volume to `N`
//! - `+N` / `-N`: adjust the current volume by `N`
//! - `+` / `-`: adjust by the configured step

use crate::domain::volume::Step;
use crate::error::UsageError;
use std::fmt;

/// Action requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the current volume
    ShowCurrent,
    /// Set the volume to an absolute value
    SetAbsolute(i64),
    /// Move the volume by a signed delta
    Adjust(i64),
}

impl Command {
    /// Interpret the positional token
    pub fn interpret(token: Option<&str>, step: Step) -> Result<Self, UsageError> {
        let Some(token) = token else {
            return Ok(Command::ShowCurrent);
        };

        let invalid = || UsageError(token.to_string());
        let step = step.get() as i64;

        match token {
            "+" => return Ok(Command::Adjust(step)),
            "-" => return Ok(Command::Adjust(-step)),
            _ => {}
        }

        if let Some(digits) = token.strip_prefix('+') {
            parse_digits(digits).map(Command::Adjust).ok_or_else(invalid)
        } else if let Some(digits) = token.strip_prefix('-') {
            parse_digits(digits)
                .map(|n| Command::Adjust(-n))
                .ok_or_else(invalid)
        } else {
            parse_digits(token)
                .map(Command::SetAbsolute)
                .ok_or_else(invalid)
        }
    }

    /// Target volume for this command given the current one
    ///
    /// Returns `None` for [`Command::ShowCurrent`].
    pub fn target(&self, current: i64) -> Option<i64> {
        match *self {
            Command::ShowCurrent => None,
            Command::SetAbsolute(n) => Some(n),
            Command::Adjust(delta) => Some(current.saturating_add(delta)),
        }
    }

    /// True if the command changes the volume
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Command::ShowCurrent)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ShowCurrent => write!(f, "show"),
            Command::SetAbsolute(n) => write!(f, "set {}", n),
            Command::Adjust(delta) => write!(f, "adjust {:+}", delta),
        }
    }
}

/// Parse a non-empty run of ASCII digits
fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpret(token: &str) -> Result<Command, UsageError> {
        Command::interpret(Some(token), Step::default())
    }

    #[test]
    fn test_no_token_shows_current() {
        assert_eq!(
            Command::interpret(None, Step::default()),
            Ok(Command::ShowCurrent)
        );
    }

    #[test]
    fn test_absolute() {
        assert_eq!(interpret("42"), Ok(Command::SetAbsolute(42)));
        assert_eq!(interpret("0"), Ok(Command::SetAbsolute(0)));
        assert_eq!(interpret("250"), Ok(Command::SetAbsolute(250)));
    }

    #[test]
    fn test_signed_delta() {
        assert_eq!(interpret("+10"), Ok(Command::Adjust(10)));
        assert_eq!(interpret("-200"), Ok(Command::Adjust(-200)));
        assert_eq!(interpret("+0"), Ok(Command::Adjust(0)));
    }

    #[test]
    fn test_bare_sign_uses_step() {
        assert_eq!(interpret("+"), Ok(Command::Adjust(5)));
        assert_eq!(interpret("-"), Ok(Command::Adjust(-5)));

        let step = Step::new(10).unwrap();
        assert_eq!(
            Command::interpret(Some("-"), step),
            Ok(Command::Adjust(-10))
        );
    }

    #[test]
    fn test_invalid_tokens() {
        for token in ["abc", "++", "--", "+-3", "-+3", "5x", "", " 5", "4.5", "+ 5"] {
            assert_eq!(
                interpret(token),
                Err(UsageError(token.to_string())),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_overflow_is_invalid() {
        assert!(interpret("99999999999999999999999").is_err());
    }

    #[test]
    fn test_target() {
        assert_eq!(Command::ShowCurrent.target(50), None);
        assert_eq!(Command::SetAbsolute(20).target(50), Some(20));
        assert_eq!(Command::Adjust(-200).target(30), Some(-170));
        assert_eq!(Command::Adjust(i64::MAX).target(30), Some(i64::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::Adjust(5).to_string(), "adjust +5");
        assert_eq!(Command::Adjust(-5).to_string(), "adjust -5");
        assert_eq!(Command::SetAbsolute(30).to_string(), "set 30");
    }
}
