//! Attack detection by full opposing move generation.
//!
//! A square counts as attacked when any pseudo-legal move of the attacking
//! side ends on it. Pawn pushes therefore count and pawn diagonals onto empty
//! squares do not; for an occupied square such as a king's this is exactly
//! the set of capturing pieces.

use super::{Color, GameState, Square};

impl GameState {
    /// Whether the side not to move could move to `sq`.
    #[must_use]
    pub fn square_under_attack(&self, sq: Square) -> bool {
        self.is_attacked_by(sq, self.side_to_move().opponent())
    }

    /// Whether the side to move has its king attacked.
    #[must_use]
    pub fn in_check(&self) -> bool {
        let color = self.side_to_move();
        self.is_attacked_by(self.king_location(color), color.opponent())
    }

    pub(crate) fn is_attacked_by(&self, sq: Square, attacker: Color) -> bool {
        self.pseudo_legal_moves(attacker)
            .iter()
            .any(|mv| mv.end() == sq)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Color, GameStateBuilder, Piece, Square};

    #[test]
    fn test_start_position_attacks() {
        let state = crate::board::GameState::new();
        // black pawn pushes reach rows 2 and 3, knights reach a6/c6/f6/h6
        assert!(state.square_under_attack(Square(2, 0)));
        assert!(state.square_under_attack(Square(3, 4)));
        assert!(!state.square_under_attack(Square(4, 4)));
        assert!(!state.in_check());
    }

    #[test]
    fn test_pawn_diagonal_onto_empty_square_is_not_counted() {
        let state = GameStateBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 4), Color::Black, Piece::King)
            .piece(Square(3, 3), Color::Black, Piece::Pawn)
            .build()
            .unwrap();
        assert!(state.square_under_attack(Square(4, 3)));
        assert!(!state.square_under_attack(Square(4, 4)));
        assert!(!state.square_under_attack(Square(4, 2)));
    }

    #[test]
    fn test_slider_check_blocked_by_piece() {
        let open = GameStateBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 4), Color::Black, Piece::King)
            .piece(Square(2, 4), Color::Black, Piece::Rook)
            .build()
            .unwrap();
        assert!(open.in_check());

        let blocked = GameStateBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 4), Color::Black, Piece::King)
            .piece(Square(2, 4), Color::Black, Piece::Rook)
            .piece(Square(5, 4), Color::White, Piece::Knight)
            .build()
            .unwrap();
        assert!(!blocked.in_check());
    }
}
