//! A pending opponent move always follows a human move.

use super::Invariant;
use crate::{Match, Opponent, Phase, Player};

/// Invariant: while an opponent move is pending, the last move in the
/// history is the human's.
pub struct PendingAfterHumanInvariant;

impl<O: Opponent> Invariant<Match<O>> for PendingAfterHumanInvariant {
    fn holds(game: &Match<O>) -> bool {
        match game.phase() {
            Phase::OpponentPending { .. } => game
                .history()
                .last()
                .is_some_and(|mov| mov.player == Player::X),
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Opponent move is only pending right after a human move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use std::time::Instant;

    #[test]
    fn test_pending_after_click_holds() {
        let game = Match::new().click(Position::Center, Instant::now());
        assert!(matches!(game.phase(), Phase::OpponentPending { .. }));
        assert!(PendingAfterHumanInvariant::holds(&game));
    }

    #[test]
    fn test_human_turn_trivially_holds() {
        assert!(PendingAfterHumanInvariant::holds(&Match::new()));
    }
}
