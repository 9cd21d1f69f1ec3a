use super::super::{Color, GameState, Move, Piece, Square};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl GameState {
    pub(crate) fn rook_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.ray_moves(from, (color, Piece::Rook), &ROOK_DIRECTIONS, moves);
    }

    pub(crate) fn bishop_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.ray_moves(from, (color, Piece::Bishop), &BISHOP_DIRECTIONS, moves);
    }

    /// Bishop rays first, then rook rays.
    pub(crate) fn queen_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let mover = (color, Piece::Queen);
        self.ray_moves(from, mover, &BISHOP_DIRECTIONS, moves);
        self.ray_moves(from, mover, &ROOK_DIRECTIONS, moves);
    }

    /// Walk each ray until the edge or the first occupied square; an enemy
    /// piece there is captured, a friendly one just ends the ray.
    fn ray_moves(
        &self,
        from: Square,
        mover: (Color, Piece),
        directions: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match self.piece_at(to) {
                    None => moves.push(Move::with_piece(from, to, mover, &self.board)),
                    Some((occupant, _)) => {
                        if occupant != mover.0 {
                            moves.push(Move::with_piece(from, to, mover, &self.board));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }
}
