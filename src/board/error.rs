//! Error types for board construction and move lookup.

use std::fmt;

use super::{Color, Square};

/// Error type for square conversion failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid rank-file notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move lookup by notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Move is not in the current legal move list
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

impl From<SquareError> for MoveParseError {
    fn from(err: SquareError) -> Self {
        let notation = match err {
            SquareError::InvalidNotation { notation } => notation,
            other => other.to_string(),
        };
        MoveParseError::InvalidSquare { notation }
    }
}

/// Error type for positions rejected by `GameStateBuilder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No king of this color was placed
    MissingKing { color: Color },
    /// More than one king of this color was placed
    DuplicateKing { color: Color },
    /// En passant target not directly behind a pawn that just advanced two squares
    InvalidEnPassant { square: Square },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingKing { color } => {
                write!(f, "{color} has no king on the board")
            }
            BuildError::DuplicateKing { color } => {
                write!(f, "{color} has more than one king on the board")
            }
            BuildError::InvalidEnPassant { square } => {
                write!(f, "{square} is not a valid en passant target")
            }
        }
    }
}

impl std::error::Error for BuildError {}
