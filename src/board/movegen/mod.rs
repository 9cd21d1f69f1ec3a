mod kings;
mod knights;
mod pawns;
mod sliders;

use log::{debug, trace};

use super::{Color, GameState, Move, Piece, Square};

impl GameState {
    /// Every move of the side to move that obeys piece movement, ignoring
    /// whether its own king is left attacked. Castling is not included.
    ///
    /// Squares are scanned row by row from a8; each piece's moves follow its
    /// direction order.
    #[must_use]
    pub fn all_possible_moves(&self) -> Vec<Move> {
        self.pseudo_legal_moves(self.side_to_move())
    }

    pub(crate) fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for row in 0..8 {
            for col in 0..8 {
                let from = Square(row, col);
                match self.piece_at(from) {
                    Some((owner, piece)) if owner == color => {
                        self.piece_moves(from, color, piece, &mut moves);
                    }
                    _ => {}
                }
            }
        }
        moves
    }

    fn piece_moves(&self, from: Square, color: Color, piece: Piece, moves: &mut Vec<Move>) {
        match piece {
            Piece::Pawn => self.pawn_moves(from, color, moves),
            Piece::Knight => self.knight_moves(from, color, moves),
            Piece::Bishop => self.bishop_moves(from, color, moves),
            Piece::Rook => self.rook_moves(from, color, moves),
            Piece::Queen => self.queen_moves(from, color, moves),
            Piece::King => self.king_moves(from, color, moves),
        }
    }

    /// Legal moves for the side to move, castling included.
    ///
    /// Each candidate is applied, the mover's king is tested, and the move
    /// is taken back. Also refreshes the checkmate/stalemate flags: both are
    /// cleared whenever a legal move exists, since an undo can leave a
    /// previously finished game playable again.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let saved_en_passant = self.en_passant_target;
        let saved_rights = self.castling_rights;

        let color = self.side_to_move();
        let mut candidates = self.all_possible_moves();
        self.castle_moves(self.king_location(color), &mut candidates);

        let mut moves = Vec::with_capacity(candidates.len());
        for mv in candidates {
            self.apply_move(&mv);
            let exposed = self.is_attacked_by(self.king_location(color), color.opponent());
            self.revert_move();
            if exposed {
                trace!("{mv} leaves the {color} king attacked");
            } else {
                moves.push(mv);
            }
        }

        if moves.is_empty() {
            let in_check = self.in_check();
            self.check_mate = in_check;
            self.stale_mate = !in_check;
            debug!(
                "{color} has no legal moves: {}",
                if in_check { "checkmate" } else { "stalemate" }
            );
        } else {
            self.check_mate = false;
            self.stale_mate = false;
        }

        self.en_passant_target = saved_en_passant;
        self.castling_rights = saved_rights;
        moves
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.valid_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let flags = (self.check_mate, self.stale_mate);
        let mut nodes = 0;
        for mv in &moves {
            self.apply_move(mv);
            nodes += self.perft(depth - 1);
            self.revert_move();
        }
        (self.check_mate, self.stale_mate) = flags;

        nodes
    }
}
