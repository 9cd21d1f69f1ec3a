//! Chess board representation and rules.
//!
//! An 8×8 mailbox grid with full move legality: castling, en passant,
//! promotion, check, checkmate and stalemate. Moves are applied in place and
//! undone from history stacks, so any sequence of `make_move`/`undo_move`
//! calls restores earlier positions exactly.
//!
//! # Example
//! ```
//! use chess_rules::board::GameState;
//!
//! let mut state = GameState::new();
//! let moves = state.valid_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let e4 = state.parse_move("e2e4").unwrap();
//! state.make_move(&e4);
//! state.undo_move();
//! assert_eq!(state.ply(), 0);
//! ```

mod attacks;
mod builder;
mod error;
mod make_unmake;
mod movegen;
mod notation;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::GameStateBuilder;
pub use error::{BuildError, MoveParseError, SquareError};
pub use state::GameState;
pub use types::{CastlingRights, Color, Grid, Move, Piece, Square};
