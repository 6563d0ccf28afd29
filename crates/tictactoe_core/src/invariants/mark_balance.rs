//! Mark balance invariant: X moves first, then turns alternate.

use super::Invariant;
use crate::{Match, Opponent, Player};

/// Invariant: the board holds as many X marks as O marks, or exactly one
/// more X.
pub struct MarkBalanceInvariant;

impl<O: Opponent> Invariant<Match<O>> for MarkBalanceInvariant {
    fn holds(game: &Match<O>) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_balanced_after_alternating_marks() {
        let mut game = Match::new();
        game.place_mark(Position::Center, Player::X).unwrap();
        assert!(MarkBalanceInvariant::holds(&game));
        game.place_mark(Position::TopLeft, Player::O).unwrap();
        assert!(MarkBalanceInvariant::holds(&game));
    }

    #[test]
    fn test_two_extra_x_violates() {
        let mut game = Match::new();
        game.place_mark(Position::Center, Player::X).unwrap();
        game.place_mark(Position::TopLeft, Player::X).unwrap();
        assert!(!MarkBalanceInvariant::holds(&game));
    }

    #[test]
    fn test_o_first_violates() {
        let mut game = Match::new();
        game.place_mark(Position::Center, Player::O).unwrap();
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}
