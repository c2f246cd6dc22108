//! Error types for the Hexapawn crate

use thiserror::Error;

use crate::hexapawn::Side;

/// Main error type for the Hexapawn crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("engine asked to decide on turn {turn}, but only turns 1-3 are supported")]
    OutOfSequence { turn: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("illegal move {from} -> {to} for side {side}")]
    IllegalMove { side: Side, from: usize, to: usize },

    #[error("it is {expected}'s turn, not {got}'s")]
    WrongTurn { expected: Side, got: Side },

    #[error("game already over")]
    GameOver,

    #[error("strategy table is corrupt: {message}")]
    CorruptTable { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
