//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let state = GameState::new();
//! assert_eq!(state.side_to_move(), Color::White);
//! ```

pub use super::{
    BuildError, CastlingRights, Color, GameState, GameStateBuilder, Move, MoveParseError, Piece,
    Square, SquareError,
};
