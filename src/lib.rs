pub mod board;

pub use board::{CastlingRights, Color, GameState, Move, Piece, Square};
