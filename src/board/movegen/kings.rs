use log::trace;

use super::super::{Color, GameState, Move, Piece, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Column the king starts on; castling is only generated from there.
const KING_HOME_COL: usize = 4;

impl GameState {
    /// One-step king moves. Castling is generated separately by `castle_moves`.
    pub(crate) fn king_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.step_moves(from, (color, Piece::King), &KING_OFFSETS, moves);
    }

    /// Append the castle moves available to the side to move.
    ///
    /// Nothing is generated while in check. Kingside requires both squares
    /// between king and rook to be empty and unattacked. Queenside requires
    /// three empty squares but only tests the two next to the king for
    /// attacks. Rights are trusted as-is: the rook itself is not looked for.
    pub fn castle_moves(&self, king_sq: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move();
        if king_sq != Square(color.back_row(), KING_HOME_COL) || self.in_check() {
            return;
        }

        let rights = self.castling_rights;
        if rights.has(color, true) {
            self.kingside_castle_moves(king_sq, color, moves);
        }
        if rights.has(color, false) {
            self.queenside_castle_moves(king_sq, color, moves);
        }
    }

    fn kingside_castle_moves(&self, king_sq: Square, color: Color, moves: &mut Vec<Move>) {
        let (r, c) = (king_sq.0, king_sq.1);
        let path = [Square(r, c + 1), Square(r, c + 2)];
        if path.iter().all(|&sq| self.is_empty(sq))
            && !path.iter().any(|&sq| self.square_under_attack(sq))
        {
            moves.push(Move::castle(king_sq, Square(r, c + 2), color, &self.board));
        } else {
            trace!("{color} kingside castle blocked");
        }
    }

    fn queenside_castle_moves(&self, king_sq: Square, color: Color, moves: &mut Vec<Move>) {
        let (r, c) = (king_sq.0, king_sq.1);
        let path = [Square(r, c - 1), Square(r, c - 2), Square(r, c - 3)];
        if path.iter().all(|&sq| self.is_empty(sq))
            && !path[..2].iter().any(|&sq| self.square_under_attack(sq))
        {
            moves.push(Move::castle(king_sq, Square(r, c - 2), color, &self.board));
        } else {
            trace!("{color} queenside castle blocked");
        }
    }
}
