//! Mapping from editing-phase input lines to commands.

use arrayvec::ArrayVec;

use crate::error::InputError;

/// A parsed editing-phase command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle the cell at zero-based on-screen coordinates.
    Toggle { row: i64, col: i64 },
    /// Leave editing and start the simulation.
    Start,
    /// Exit the process.
    Quit,
    /// Any other single non-numeric token.
    Unknown(String),
}

impl Command {
    /// Internal 1-based coordinates of a toggle.
    ///
    /// Returns `None` when the shift leaves the addressable range
    /// (negative input), which callers treat as a no-op.
    pub fn toggle_target(&self) -> Option<(usize, usize)> {
        match *self {
            Command::Toggle { row, col } => {
                let r = usize::try_from(row.checked_add(1)?).ok()?;
                let c = usize::try_from(col.checked_add(1)?).ok()?;
                Some((r, c))
            }
            _ => None,
        }
    }
}

/// Split a line into at most two whitespace-separated tokens.
///
/// Any other token count is an input-format error.
pub fn tokenize(line: &str) -> Result<ArrayVec<&str, 2>, InputError> {
    let mut tokens = ArrayVec::new();
    let mut count = 0usize;
    for tok in line.split_whitespace() {
        count += 1;
        // Keep counting past capacity so the diagnostic reports the real count.
        let _ = tokens.try_push(tok);
    }
    if count == 0 || count > 2 {
        return Err(InputError::WrongTokenCount(count));
    }
    Ok(tokens)
}

/// Parse one line of editing-phase input.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let tokens = tokenize(line)?;

    match tokens.as_slice() {
        [single] => {
            if let Ok(n) = single.parse::<i64>() {
                return Err(InputError::SingleInteger(n));
            }
            Ok(match *single {
                "start" => Command::Start,
                "quit" => Command::Quit,
                other => Command::Unknown(other.to_string()),
            })
        }
        [row, col] => {
            let row = row
                .parse::<i64>()
                .map_err(|_| InputError::InvalidRow(row.to_string()))?;
            let col = col
                .parse::<i64>()
                .map_err(|_| InputError::InvalidColumn(col.to_string()))?;
            Ok(Command::Toggle { row, col })
        }
        _ => Err(InputError::WrongTokenCount(tokens.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_command() {
        assert_eq!(
            parse_command("5 7"),
            Ok(Command::Toggle { row: 5, col: 7 })
        );
        assert_eq!(
            parse_command("  12\t 3 \n"),
            Ok(Command::Toggle { row: 12, col: 3 })
        );
    }

    #[test]
    fn test_keyword_commands() {
        assert_eq!(parse_command("start\n"), Ok(Command::Start));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(
            parse_command("stop"),
            Ok(Command::Unknown("stop".to_string()))
        );
        // Keywords are case-sensitive.
        assert_eq!(
            parse_command("START"),
            Ok(Command::Unknown("START".to_string()))
        );
    }

    #[test]
    fn test_single_integer_is_fatal() {
        assert_eq!(parse_command("7"), Err(InputError::SingleInteger(7)));
    }

    #[test]
    fn test_wrong_token_count() {
        assert_eq!(parse_command(""), Err(InputError::WrongTokenCount(0)));
        assert_eq!(parse_command("   \n"), Err(InputError::WrongTokenCount(0)));
        assert_eq!(parse_command("1 2 3"), Err(InputError::WrongTokenCount(3)));
        assert_eq!(
            parse_command("a b c d e"),
            Err(InputError::WrongTokenCount(5))
        );
    }

    #[test]
    fn test_non_integer_coordinates() {
        assert_eq!(
            parse_command("5 x"),
            Err(InputError::InvalidColumn("x".to_string()))
        );
        assert_eq!(
            parse_command("start 3"),
            Err(InputError::InvalidRow("start".to_string()))
        );
    }

    #[test]
    fn test_toggle_target_shifts_to_one_based() {
        let cmd = Command::Toggle { row: 5, col: 7 };
        assert_eq!(cmd.toggle_target(), Some((6, 8)));
        assert_eq!(
            Command::Toggle { row: -1, col: 0 }.toggle_target(),
            Some((0, 1))
        );
        assert_eq!(Command::Toggle { row: -2, col: 0 }.toggle_target(), None);
        assert_eq!(
            Command::Toggle {
                row: i64::MAX,
                col: 0
            }
            .toggle_target(),
            None
        );
        assert_eq!(Command::Start.toggle_target(), None);
    }
}
