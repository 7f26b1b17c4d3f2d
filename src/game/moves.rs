use std::str::FromStr;

use super::{Player, COLS};
use crate::error::ParseMoveError;

/// A decoded move token: which player drops into which column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub column: usize,
    pub player: Player,
}

/// Decode a token of the form `<A-G>_<Red|Yellow>`, both parts case-insensitive.
pub fn parse_move(token: &str) -> Result<Move, ParseMoveError> {
    let malformed = || ParseMoveError::Malformed(token.to_string());

    let (letter, name) = token.split_once('_').ok_or_else(malformed)?;
    let column = match letter.as_bytes() {
        [b] if b.is_ascii_alphabetic() => (b.to_ascii_uppercase() - b'A') as usize,
        _ => return Err(malformed()),
    };
    if column >= COLS {
        return Err(malformed());
    }
    let player = name.parse::<Player>().map_err(|_| malformed())?;

    Ok(Move { column, player })
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}
