//! Property-based tests using proptest.

use super::snapshot;
use crate::board::{Color, GameState, Piece};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    /// Property: make_move followed by undo_move restores the position exactly
    #[test]
    fn prop_make_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = snapshot(&state);

        let mut made = 0;
        for _ in 0..num_moves {
            let moves = state.valid_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            state.make_move(&mv);
            made += 1;
        }

        for _ in 0..made {
            prop_assert!(state.undo_move().is_some());
        }

        prop_assert_eq!(snapshot(&state), initial);
        prop_assert!(state.move_log().is_empty());
    }

    /// Property: cached king squares always hold that color's king
    #[test]
    fn prop_king_cache_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = state.valid_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            state.make_move(&mv);

            for color in Color::BOTH {
                let sq = state.king_location(color);
                prop_assert_eq!(state.piece_at(sq), Some((color, Piece::King)));
            }
        }
    }

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = state.valid_moves();
            if moves.is_empty() {
                break;
            }
            let mover = state.side_to_move();
            for mv in &moves {
                state.apply_move(mv);
                let king = state.king_location(mover);
                prop_assert!(
                    !state.is_attacked_by(king, mover.opponent()),
                    "{} leaves the king on {} attacked", mv, king
                );
                state.revert_move();
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            state.make_move(&mv);
        }
    }

    /// Property: the history stacks stay one snapshot ahead of the move log
    #[test]
    fn prop_history_stacks_parallel(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = state.valid_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            state.make_move(&mv);

            let plies = state.move_log().len();
            prop_assert_eq!(state.castle_rights_log.len(), plies + 1);
            prop_assert_eq!(state.en_passant_log.len(), plies + 1);
            prop_assert_eq!(state.castle_rights_log.last().copied(), Some(state.castling_rights()));
            prop_assert_eq!(state.en_passant_log.last().copied(), Some(state.en_passant_target()));
        }
    }
}
