use log::{debug, trace};

use super::{GameState, Move, Piece, Square};

impl GameState {
    /// Apply `mv` permanently and record it in the history.
    ///
    /// `mv` should come from [`GameState::valid_moves`]: en passant and
    /// castling edits are driven by its flags, which only the generator sets.
    pub fn make_move(&mut self, mv: &Move) {
        debug!(
            "make {} ({:?} {:?}) at ply {}",
            mv,
            mv.piece_moved().0,
            mv.piece_moved().1,
            self.ply()
        );
        self.apply_move(mv);
    }

    /// Take back the last move, restoring the position exactly.
    ///
    /// Returns the undone move, or `None` (and changes nothing) if no move
    /// has been played.
    pub fn undo_move(&mut self) -> Option<Move> {
        let undone = self.revert_move();
        match &undone {
            Some(mv) => debug!("undo {} back to ply {}", mv, self.ply()),
            None => debug!("undo with empty history ignored"),
        }
        undone
    }

    pub(crate) fn apply_move(&mut self, mv: &Move) {
        let start = mv.start();
        let end = mv.end();
        let (color, piece) = mv.piece_moved();

        self.board[start.0][start.1] = None;
        self.board[end.0][end.1] = if mv.is_pawn_promotion() {
            Some((color, Piece::Queen))
        } else {
            Some((color, piece))
        };
        self.move_log.push(*mv);
        self.white_to_move = !self.white_to_move;

        if piece == Piece::King {
            self.king_locations[color.index()] = end;
        }

        if mv.is_en_passant() {
            // the captured pawn sits beside the start square, not on the destination
            self.board[start.0][end.1] = None;
        }

        self.en_passant_target = if piece == Piece::Pawn && start.0.abs_diff(end.0) == 2 {
            Some(Square((start.0 + end.0) / 2, start.1))
        } else {
            None
        };

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            self.board[rook_to.0][rook_to.1] = self.board[rook_from.0][rook_from.1];
            self.board[rook_from.0][rook_from.1] = None;
        }

        self.update_castle_rights(mv);
        self.castle_rights_log.push(self.castling_rights);
        self.en_passant_log.push(self.en_passant_target);

        debug_assert_eq!(self.move_log.len() + 1, self.castle_rights_log.len());
        debug_assert_eq!(self.move_log.len() + 1, self.en_passant_log.len());
    }

    pub(crate) fn revert_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        let start = mv.start();
        let end = mv.end();
        let (color, piece) = mv.piece_moved();

        self.board[start.0][start.1] = Some(mv.piece_moved());
        self.board[end.0][end.1] = mv.piece_captured();
        self.white_to_move = !self.white_to_move;

        if piece == Piece::King {
            self.king_locations[color.index()] = start;
        }

        if mv.is_en_passant() {
            self.board[end.0][end.1] = None;
            self.board[start.0][end.1] = mv.piece_captured();
        }

        self.en_passant_log.pop();
        self.en_passant_target = self.en_passant_log.last().copied().flatten();

        self.castle_rights_log.pop();
        if let Some(&rights) = self.castle_rights_log.last() {
            self.castling_rights = rights;
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            self.board[rook_from.0][rook_from.1] = self.board[rook_to.0][rook_to.1];
            self.board[rook_to.0][rook_to.1] = None;
        }

        debug_assert_eq!(self.move_log.len() + 1, self.castle_rights_log.len());
        debug_assert_eq!(self.move_log.len() + 1, self.en_passant_log.len());
        Some(mv)
    }

    /// Revoke rights for a king leaving its square or a rook leaving its home corner.
    ///
    /// A rook captured on its home corner keeps its side's right; only moving
    /// pieces affect the flags.
    fn update_castle_rights(&mut self, mv: &Move) {
        let (color, piece) = mv.piece_moved();
        let start = mv.start();
        match piece {
            Piece::King => self.castling_rights.remove_both(color),
            Piece::Rook if start.0 == color.back_row() => match start.1 {
                0 => self.castling_rights.remove(color, false),
                7 => self.castling_rights.remove(color, true),
                _ => {}
            },
            _ => {}
        }
        trace!("castling rights now {}", self.castling_rights);
    }
}

/// Rook (home, landing) squares for a castle move.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let end = mv.end();
    if mv.is_kingside_castle() {
        (Square(end.0, end.1 + 1), Square(end.0, end.1 - 1))
    } else {
        (Square(end.0, end.1 - 2), Square(end.0, end.1 + 1))
    }
}

