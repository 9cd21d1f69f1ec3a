use std::fmt;

use super::{CastlingRights, Color, Grid, Move, Piece, Square};

const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Board, side to move and the history needed for exact undo.
///
/// The three logs run in parallel: `castle_rights_log` and `en_passant_log`
/// hold one snapshot per ply plus the initial one, so their last entries are
/// always the current rights and en passant target.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Grid,
    pub(crate) white_to_move: bool,
    pub(crate) king_locations: [Square; 2], // [white, black]
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) move_log: Vec<Move>,
    pub(crate) castle_rights_log: Vec<CastlingRights>,
    pub(crate) en_passant_log: Vec<Option<Square>>,
    pub(crate) check_mate: bool,
    pub(crate) stale_mate: bool,
}

impl GameState {
    /// Standard initial position, White to move, all castling rights.
    #[must_use]
    pub fn new() -> Self {
        let mut board: Grid = [[None; 8]; 8];
        for (col, piece) in BACK_ROW.iter().enumerate() {
            board[0][col] = Some((Color::Black, *piece));
            board[1][col] = Some((Color::Black, Piece::Pawn));
            board[6][col] = Some((Color::White, Piece::Pawn));
            board[7][col] = Some((Color::White, *piece));
        }

        GameState::from_parts(
            board,
            true,
            [Square(7, 4), Square(0, 4)],
            CastlingRights::all(),
            None,
        )
    }

    pub(crate) fn from_parts(
        board: Grid,
        white_to_move: bool,
        king_locations: [Square; 2],
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> Self {
        GameState {
            board,
            white_to_move,
            king_locations,
            castling_rights,
            en_passant_target,
            move_log: Vec::new(),
            castle_rights_log: vec![castling_rights],
            en_passant_log: vec![en_passant_target],
            check_mate: false,
            stale_mate: false,
        }
    }

    /// The 8×8 grid, indexed `[row][col]` with row 0 = rank 8.
    #[must_use]
    pub fn board(&self) -> &Grid {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.board[sq.0][sq.1].is_none()
    }

    /// Two-character display code for a square: color then kind ("wK", "bp"),
    /// or "--" when empty.
    #[must_use]
    pub fn code_at(&self, sq: Square) -> String {
        match self.piece_at(sq) {
            Some((color, piece)) => format!("{}{}", color.to_char(), piece.to_char()),
            None => "--".to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Cached king square; kept in step with the grid on every king move and undo.
    #[inline]
    #[must_use]
    pub fn king_location(&self, color: Color) -> Square {
        self.king_locations[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn may capture onto en passant during this ply.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Number of plies played
    #[must_use]
    pub fn ply(&self) -> usize {
        self.move_log.len()
    }

    /// Set by the last `valid_moves` call: no legal moves while in check.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.check_mate
    }

    /// Set by the last `valid_moves` call: no legal moves while not in check.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stale_mate
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            let codes: Vec<String> = (0..8).map(|col| self.code_at(Square(row, col))).collect();
            writeln!(f, "{}", codes.join(" "))?;
        }
        write!(
            f,
            "{} to move, castling {}",
            self.side_to_move(),
            self.castling_rights
        )?;
        if let Some(ep) = self.en_passant_target {
            write!(f, ", en passant {ep}")?;
        }
        Ok(())
    }
}
