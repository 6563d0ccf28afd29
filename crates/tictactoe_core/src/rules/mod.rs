//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The turn controller
//! evaluates them after every placement: win for the mover first, then
//! draw.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_win, winner};
