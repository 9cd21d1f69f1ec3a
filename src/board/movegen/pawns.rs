use super::super::{Color, GameState, Move, Piece, Square};

impl GameState {
    /// Pushes, the double step from the start row, diagonal captures and en
    /// passant. Promotion is flagged by `Move` itself when the pawn lands on
    /// the farthest row.
    pub(crate) fn pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = color.forward();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                moves.push(Move::with_piece(from, one, (color, Piece::Pawn), &self.board));
                if from.0 == color.pawn_start_row() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::with_piece(
                                from,
                                two,
                                (color, Piece::Pawn),
                                &self.board,
                            ));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            match self.piece_at(target) {
                Some((occupant, _)) if occupant != color => {
                    moves.push(Move::with_piece(from, target, (color, Piece::Pawn), &self.board));
                }
                _ if self.en_passant_target == Some(target) => {
                    moves.push(Move::en_passant(from, target, color, &self.board));
                }
                _ => {}
            }
        }
    }
}
