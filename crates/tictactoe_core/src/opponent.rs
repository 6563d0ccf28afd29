//! Scripted opponent move selection.

use super::{Board, Position};
use tracing::{debug, instrument};

/// Chooses the opponent's next cell.
pub trait Opponent {
    /// Returns the cell to play, or `None` when the board has no empty cell.
    fn choose(&self, board: &Board) -> Option<Position>;

    /// Name used in logs.
    fn name(&self) -> &str;
}

/// Plays the first empty cell in row-major order.
///
/// No lookahead and no randomness: the same board always yields the same
/// cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstEmpty;

impl Opponent for FirstEmpty {
    #[instrument(skip_all)]
    fn choose(&self, board: &Board) -> Option<Position> {
        let pos = Position::ALL.iter().copied().find(|&pos| board.is_empty(pos));
        debug!(position = ?pos, "First empty cell");
        pos
    }

    fn name(&self) -> &str {
        "first-empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_picks_top_left() {
        assert_eq!(FirstEmpty.choose(&Board::new()), Some(Position::TopLeft));
    }

    #[test]
    fn test_skips_occupied_cells() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        board.place(Position::TopCenter, Player::O).unwrap();
        board.place(Position::MiddleLeft, Player::X).unwrap();
        assert_eq!(FirstEmpty.choose(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_full_board_has_no_choice() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Player::X).unwrap();
        }
        assert_eq!(FirstEmpty.choose(&board), None);
    }
}
