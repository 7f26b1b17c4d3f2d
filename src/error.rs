use std::path::PathBuf;

use crate::game::column_letter;

/// Board-rule violations raised by [`Board::drop_piece`](crate::game::Board::drop_piece).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("tried to drop a piece into non-existent column {0}")]
    InvalidColumn(usize),

    #[error("tried to drop a piece into already full column {}", letter(.0))]
    ColumnFull(usize),
}

fn letter(col: &usize) -> char {
    column_letter(*col)
}

/// Errors raised while decoding a move token such as `C_Red`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error(
        "invalid move: expected a column identifier A-G and a player name Red or Yellow \
         joined by '_', but input was: {0:?}"
    )]
    Malformed(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
