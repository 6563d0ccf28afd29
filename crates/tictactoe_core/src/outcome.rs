//! Final result of a match, seen from the human's side.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished match.
///
/// `Display` renders the message shown on the game-over overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// The human completed a line.
    #[display("You Won!")]
    Won,
    /// The scripted opponent completed a line.
    #[display("You Lost!")]
    Lost,
    /// The board filled up with no line.
    #[display("It's a Draw!")]
    Draw,
}

impl Outcome {
    /// Outcome when `player` has just completed a line.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => Outcome::Won,
            Player::O => Outcome::Lost,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won => Some(Player::X),
            Outcome::Lost => Some(Player::O),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Outcome::Won.to_string(), "You Won!");
        assert_eq!(Outcome::Lost.to_string(), "You Lost!");
        assert_eq!(Outcome::Draw.to_string(), "It's a Draw!");
    }

    #[test]
    fn test_win_for() {
        assert_eq!(Outcome::win_for(Player::X), Outcome::Won);
        assert_eq!(Outcome::win_for(Player::O), Outcome::Lost);
        assert_eq!(Outcome::Lost.winner(), Some(Player::O));
        assert!(Outcome::Draw.is_draw());
    }
}
