//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece, e.g. for endgame scenarios.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameStateBuilder, Piece, Square};
//!
//! let state = GameStateBuilder::new()
//!     .piece(Square(7, 0), Color::White, Piece::King)
//!     .piece(Square(5, 0), Color::Black, Piece::King)
//!     .piece(Square(2, 1), Color::Black, Piece::Queen)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(state.king_location(Color::White), Square(7, 0));
//! ```

use super::error::BuildError;
use super::{CastlingRights, Color, GameState, Grid, Piece, Square};

/// A fluent builder for `GameState` positions.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateBuilder {
    /// Create a builder with an empty board, White to move and no castling rights.
    #[must_use]
    pub fn new() -> Self {
        GameStateBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let state = GameState::new();
        let mut builder = Self::new();
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if let Some((color, piece)) = state.piece_at(sq) {
                    builder.pieces.push((sq, color, piece));
                }
            }
        }
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    /// Enable all castling rights.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the square a pawn may capture onto en passant on the first ply.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the position.
    ///
    /// Exactly one king per color is required, since the king squares are
    /// cached. An en passant target must be empty, on the row the side to
    /// move captures onto, with an enemy pawn just past it. Nothing else
    /// about legality is checked.
    pub fn build(self) -> Result<GameState, BuildError> {
        let mut board: Grid = [[None; 8]; 8];
        let mut kings: [Option<Square>; 2] = [None, None];

        for (square, color, piece) in self.pieces {
            board[square.0][square.1] = Some((color, piece));
            if piece == Piece::King {
                if kings[color.index()].is_some() {
                    return Err(BuildError::DuplicateKing { color });
                }
                kings[color.index()] = Some(square);
            }
        }

        let white_king = kings[0].ok_or(BuildError::MissingKing {
            color: Color::White,
        })?;
        let black_king = kings[1].ok_or(BuildError::MissingKing {
            color: Color::Black,
        })?;

        if let Some(square) = self.en_passant_target {
            if !valid_en_passant(&board, self.side_to_move, square) {
                return Err(BuildError::InvalidEnPassant { square });
            }
        }

        Ok(GameState::from_parts(
            board,
            self.side_to_move == Color::White,
            [white_king, black_king],
            self.castling_rights,
            self.en_passant_target,
        ))
    }
}

/// The square a pawn of `mover` captures onto en passant must be empty and
/// sit directly behind the opposing pawn that just advanced two squares.
fn valid_en_passant(board: &Grid, mover: Color, target: Square) -> bool {
    let capture_row = mover.opponent().pawn_start_row() as isize + mover.opponent().forward();
    if target.0 as isize != capture_row || board[target.0][target.1].is_some() {
        return false;
    }
    target
        .offset(mover.opponent().forward(), 0)
        .is_some_and(|pawn| board[pawn.0][pawn.1] == Some((mover.opponent(), Piece::Pawn)))
}
