//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, Match, Opponent};

/// Invariant: replaying the move history onto an empty board, with every
/// move landing on an empty square, reproduces the current board.
pub struct MonotonicBoardInvariant;

impl<O: Opponent> Invariant<Match<O>> for MonotonicBoardInvariant {
    fn holds(game: &Match<O>) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.place(mov.position, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_match_holds() {
        assert!(MonotonicBoardInvariant::holds(&Match::new()));
    }

    #[test]
    fn test_placed_marks_hold() {
        let mut game = Match::new();
        game.place_mark(Position::Center, Player::X).unwrap();
        game.place_mark(Position::TopLeft, Player::O).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }
}
