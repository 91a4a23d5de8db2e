//! Text commands typed by a human player.
//!
//! Grammar (case-insensitive, any amount of whitespace between tokens):
//!
//! - `<quantity> <face>`: bid, e.g. `3 5`
//! - `lie`: challenge the standing bid
//! - `reroll <index> [<index> ...]`: reroll dice by position, 0 first

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::core::Face;

/// A parsed player command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Bid { quantity: usize, face: Face },
    Challenge,
    Reroll(Vec<usize>),
}

/// Why a line could not be parsed as a command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{token}` is not a number: {source}")]
    BadNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("a bid is a quantity and a face, e.g. `3 5`")]
    MalformedBid,

    #[error("name at least one die to reroll, e.g. `reroll 0 2`")]
    NoRerollIndices,
}

fn number<T: FromStr<Err = ParseIntError>>(token: &str) -> Result<T, ParseCommandError> {
    token.parse().map_err(|source| ParseCommandError::BadNumber {
        token: token.to_string(),
        source,
    })
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let lowered = line.trim().to_lowercase();
        let mut tokens = lowered.split_whitespace();
        let first = tokens.next().ok_or(ParseCommandError::Empty)?;

        match first {
            "lie" => match tokens.next() {
                None => Ok(Command::Challenge),
                Some(_) => Err(ParseCommandError::Unknown(lowered.clone())),
            },
            "reroll" => {
                let indices = tokens.map(number::<usize>).collect::<Result<Vec<_>, _>>()?;
                if indices.is_empty() {
                    return Err(ParseCommandError::NoRerollIndices);
                }
                Ok(Command::Reroll(indices))
            }
            _ if first.starts_with(|c: char| c.is_ascii_digit()) => {
                let quantity = number(first)?;
                let face = number(tokens.next().ok_or(ParseCommandError::MalformedBid)?)?;
                if tokens.next().is_some() {
                    return Err(ParseCommandError::MalformedBid);
                }
                Ok(Command::Bid { quantity, face })
            }
            _ => Err(ParseCommandError::Unknown(first.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Bid { quantity, face } => write!(f, "{} {}", quantity, face),
            Command::Challenge => write!(f, "lie"),
            Command::Reroll(indices) => {
                write!(f, "reroll")?;
                for i in indices {
                    write!(f, " {}", i)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "3 5".parse::<Command>(),
            Ok(Command::Bid { quantity: 3, face: 5 })
        );
        assert_eq!(
            "  10    6 ".parse::<Command>(),
            Ok(Command::Bid { quantity: 10, face: 6 })
        );
        assert_eq!("LIE".parse::<Command>(), Ok(Command::Challenge));
        assert_eq!(
            "Reroll 0  2".parse::<Command>(),
            Ok(Command::Reroll(vec![0, 2]))
        );
    }

    #[test]
    fn test_out_of_range_face_parses() {
        // Range checks belong to the round logic.
        assert_eq!(
            "2 9".parse::<Command>(),
            Ok(Command::Bid { quantity: 2, face: 9 })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "bluff".parse::<Command>(),
            Err(ParseCommandError::Unknown("bluff".to_string()))
        );
        assert_eq!("3".parse::<Command>(), Err(ParseCommandError::MalformedBid));
        assert_eq!("3 4 5".parse::<Command>(), Err(ParseCommandError::MalformedBid));
        assert_eq!(
            "reroll".parse::<Command>(),
            Err(ParseCommandError::NoRerollIndices)
        );
        assert!(matches!(
            "reroll 1 x".parse::<Command>(),
            Err(ParseCommandError::BadNumber { token, .. }) if token == "x"
        ));
        assert!(matches!(
            "3 300".parse::<Command>(),
            Err(ParseCommandError::BadNumber { .. })
        ));
        assert!(matches!(
            "reroll -1".parse::<Command>(),
            Err(ParseCommandError::BadNumber { .. })
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for command in [
            Command::Bid { quantity: 4, face: 2 },
            Command::Challenge,
            Command::Reroll(vec![1, 3, 4]),
        ] {
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        }
    }
}
