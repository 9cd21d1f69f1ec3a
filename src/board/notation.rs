//! Looking up legal moves from user input: two clicked squares, or
//! rank-file notation such as "e2e4".

use super::error::MoveParseError;
use super::{GameState, Move, Square};

impl GameState {
    /// The legal move from `start` to `end`, if there is one.
    ///
    /// Returns the generator's entry rather than a freshly built move, so en
    /// passant and castle flags are set correctly for `make_move`.
    pub fn find_move(&mut self, start: Square, end: Square) -> Option<Move> {
        self.valid_moves()
            .into_iter()
            .find(|mv| mv.start() == start && mv.end() == end)
    }

    /// Parse "e2e4"-style notation and return the matching legal move.
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        if notation.len() != 4 || !notation.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: notation.chars().count(),
            });
        }

        let start: Square = notation[0..2].parse()?;
        let end: Square = notation[2..4].parse()?;

        self.find_move(start, end)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}
