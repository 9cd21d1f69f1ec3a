//! Core chess types.
//!
//! This module contains the value types shared by the rest of the board:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - (row, col) board coordinate
//! - `Move` - one ply with its special-move flags
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

/// The 8×8 grid, indexed `[row][col]`; `None` is an empty square.
pub type Grid = [[Option<(Color, Piece)>; 8]; 8];
