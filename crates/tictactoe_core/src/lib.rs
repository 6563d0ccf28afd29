//! Tic-tac-toe against a scripted opponent.
//!
//! The human plays X by clicking cells; after a short delay the opponent
//! answers with O on the first empty cell in row-major order. The game
//! ends on three in a row or a full board.
//!
//! # Architecture
//!
//! - **Board and rules**: [`Board`], [`rules::check_win`], [`rules::is_full`]
//! - **Turn controller**: [`Match`] with its [`Phase`] state machine
//! - **Opponent**: the [`Opponent`] trait and its [`FirstEmpty`] rule
//! - **Rendering**: [`layout`] geometry and the [`Scene`] draw list
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use tictactoe_core::{Match, Phase, Position, OPPONENT_DELAY};
//!
//! let start = Instant::now();
//! let game = Match::new()
//!     .click(Position::Center, start)
//!     .tick(start + OPPONENT_DELAY);
//! assert_eq!(game.phase(), Phase::HumanTurn);
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
pub mod invariants;
pub mod layout;
mod opponent;
mod outcome;
mod position;
pub mod rules;
mod scene;
mod types;

pub use action::{Move, MoveError};
pub use controller::{Match, OPPONENT_DELAY, Phase};
pub use opponent::{FirstEmpty, Opponent};
pub use outcome::Outcome;
pub use position::Position;
pub use scene::{DrawCommand, Scene};
pub use types::{Board, Player, Square};
