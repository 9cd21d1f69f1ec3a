use super::super::{Color, GameState, Move, Piece, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

impl GameState {
    pub(crate) fn knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.step_moves(from, (color, Piece::Knight), &KNIGHT_OFFSETS, moves);
    }

    /// Single jumps for knights and kings: any in-bounds target that is empty
    /// or holds an enemy piece.
    pub(crate) fn step_moves(
        &self,
        from: Square,
        mover: (Color, Piece),
        offsets: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in offsets {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            match self.piece_at(to) {
                Some((occupant, _)) if occupant == mover.0 => {}
                _ => moves.push(Move::with_piece(from, to, mover, &self.board)),
            }
        }
    }
}
