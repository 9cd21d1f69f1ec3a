//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation node counts
//! - `make_unmake.rs` - Apply/undo correctness and history bookkeeping
//! - `edge_cases.rs` - Castling, en passant, promotion, mate and stalemate
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::{CastlingRights, GameState, Grid, Move, Square};

/// Everything an undo must restore.
#[derive(Debug, PartialEq)]
pub(super) struct Snapshot {
    board: Grid,
    white_to_move: bool,
    kings: [Square; 2],
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    ply: usize,
}

pub(super) fn snapshot(state: &GameState) -> Snapshot {
    Snapshot {
        board: *state.board(),
        white_to_move: state.white_to_move(),
        kings: state.king_locations,
        castling_rights: state.castling_rights(),
        en_passant_target: state.en_passant_target(),
        ply: state.ply(),
    }
}

/// Play a sequence of "e2e4"-style moves, panicking on an illegal one.
pub(super) fn play(state: &mut GameState, moves: &[&str]) {
    for notation in moves {
        let mv = state
            .parse_move(notation)
            .unwrap_or_else(|e| panic!("{notation}: {e}\n{state}"));
        state.make_move(&mv);
    }
}

pub(super) fn find(moves: &[Move], notation: &str) -> Option<Move> {
    moves.iter().copied().find(|m| m.notation() == notation)
}

/// Cached king squares must match the grid.
pub(super) fn assert_kings_cached(state: &GameState) {
    use crate::board::{Color, Piece};
    for color in Color::BOTH {
        let sq = state.king_location(color);
        assert_eq!(
            state.piece_at(sq),
            Some((color, Piece::King)),
            "{color} king cache points at {sq}\n{state}"
        );
    }
}
