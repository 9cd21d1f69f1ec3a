//! Move value type.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use super::Grid;

/// One ply: endpoints, the piece that moved, what it captured and the
/// special-move flags.
///
/// Moved and captured pieces are read off the board when the move is built.
/// Two moves compare equal iff their start and end squares match; pieces and
/// flags do not take part in equality or hashing.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: (Color, Piece),
    piece_captured: Option<(Color, Piece)>,
    is_pawn_promotion: bool,
    is_en_passant: bool,
    is_castle: bool,
}

impl Move {
    /// Build a move between two squares of `grid`.
    ///
    /// Returns `None` if `start` is empty. The promotion flag is derived from
    /// the board; en passant and castling flags only come from the move
    /// generator, so a move built here never carries them.
    #[must_use]
    pub fn new(start: Square, end: Square, grid: &Grid) -> Option<Self> {
        grid[start.0][start.1].map(|moved| Move::with_piece(start, end, moved, grid))
    }

    pub(crate) fn with_piece(
        start: Square,
        end: Square,
        piece_moved: (Color, Piece),
        grid: &Grid,
    ) -> Self {
        let (color, piece) = piece_moved;
        Move {
            start,
            end,
            piece_moved,
            piece_captured: grid[end.0][end.1],
            is_pawn_promotion: piece == Piece::Pawn && end.0 == color.promotion_row(),
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// Diagonal pawn step onto the en passant target; the captured pawn is
    /// synthesized since the destination square is empty.
    pub(crate) fn en_passant(start: Square, end: Square, color: Color, grid: &Grid) -> Self {
        let mut mv = Move::with_piece(start, end, (color, Piece::Pawn), grid);
        mv.piece_captured = Some((color.opponent(), Piece::Pawn));
        mv.is_en_passant = true;
        mv
    }

    pub(crate) fn castle(start: Square, end: Square, color: Color, grid: &Grid) -> Self {
        let mut mv = Move::with_piece(start, end, (color, Piece::King), grid);
        mv.is_castle = true;
        mv
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> Square {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn end(&self) -> Square {
        self.end
    }

    #[inline]
    #[must_use]
    pub const fn piece_moved(&self) -> (Color, Piece) {
        self.piece_moved
    }

    #[inline]
    #[must_use]
    pub const fn piece_captured(&self) -> Option<(Color, Piece)> {
        self.piece_captured
    }

    /// Pawn reaching the farthest row. Always promotes to a queen.
    #[inline]
    #[must_use]
    pub const fn is_pawn_promotion(&self) -> bool {
        self.is_pawn_promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        self.is_castle
    }

    /// Castling toward the h-file
    #[inline]
    #[must_use]
    pub const fn is_kingside_castle(&self) -> bool {
        self.is_castle && self.end.1 > self.start.1
    }

    /// Compact identifier `start_row*1000 + start_col*100 + end_row*10 + end_col`.
    ///
    /// Unique per endpoint pair; equality compares squares directly instead.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u16 {
        (self.start.0 * 1000 + self.start.1 * 100 + self.end.0 * 10 + self.end.1) as u16
    }

    /// Start and end squares in rank-file form, e.g. "e2e4"
    #[must_use]
    pub fn notation(&self) -> String {
        format!("{}{}", self.start, self.end)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}
