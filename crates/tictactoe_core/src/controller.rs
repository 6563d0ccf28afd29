//! Turn controller: human clicks, a delayed scripted reply, game over.
//!
//! A [`Match`] is a single explicit game-state value. Input is fed through
//! consuming transitions ([`Match::click`], [`Match::tick`]) that take the
//! current monotonic time as an argument, so the whole state machine is
//! deterministic and runs without a real clock in tests.

use super::invariants::{InvariantSet, MatchInvariants};
use super::{layout, rules};
use super::{Board, FirstEmpty, Move, MoveError, Opponent, Outcome, Player, Position};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Delay between a human move and the scripted reply.
pub const OPPONENT_DELAY: Duration = Duration::from_millis(800);

/// Where the match is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the human to click an empty cell.
    HumanTurn,
    /// The opponent replies on the first tick at or after `deadline`.
    OpponentPending {
        /// Earliest instant at which the opponent may move.
        deadline: Instant,
    },
    /// The opponent is placing its mark.
    OpponentTurn,
    /// Terminal; every further input is ignored.
    GameOver(Outcome),
}

/// A human (X) versus scripted opponent (O) match.
#[derive(Debug, Clone)]
pub struct Match<O = FirstEmpty> {
    board: Board,
    phase: Phase,
    history: Vec<Move>,
    delay: Duration,
    opponent: O,
}

impl Match<FirstEmpty> {
    /// New match against the first-empty opponent with the default delay.
    #[instrument]
    pub fn new() -> Self {
        Self::with_opponent(FirstEmpty, OPPONENT_DELAY)
    }
}

impl Default for Match<FirstEmpty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Opponent> Match<O> {
    /// New match with a custom opponent and reply delay.
    #[instrument(skip(opponent), fields(opponent = opponent.name()))]
    pub fn with_opponent(opponent: O, delay: Duration) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::HumanTurn,
            history: Vec::new(),
            delay,
            opponent,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Delay applied before each opponent reply.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns true once a win or draw has been reached.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Player whose turn it is, or `None` when the game is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.phase {
            Phase::HumanTurn => Some(Player::X),
            Phase::OpponentPending { .. } | Phase::OpponentTurn => Some(Player::O),
            Phase::GameOver(_) => None,
        }
    }

    /// Deadline of the pending opponent move, if one is scheduled.
    pub fn pending_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::OpponentPending { deadline } => Some(deadline),
            _ => None,
        }
    }

    /// Places `player`'s mark without touching the turn cycle.
    ///
    /// Succeeds only on an empty square while the game is not over. This is
    /// the raw board operation underneath [`Match::click`] and
    /// [`Match::tick`]; it does not check whose turn it is.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        self.board.place(pos, player)?;
        self.history.push(Move::new(player, pos));
        Ok(())
    }

    /// Handles a click on `pos` at time `now`.
    ///
    /// Only accepted during [`Phase::HumanTurn`] on an empty cell; anything
    /// else is a silent no-op.
    #[instrument(skip(self, now), fields(phase = ?self.phase))]
    pub fn click(mut self, pos: Position, now: Instant) -> Self {
        if self.phase != Phase::HumanTurn {
            debug!("Click ignored outside the human turn");
            return self;
        }

        if let Err(e) = self.place_mark(pos, Player::X) {
            debug!(error = %e, "Click ignored");
            return self;
        }
        debug!(position = %pos, "Human placed X");

        self.phase = match self.terminal_after(Player::X) {
            Some(outcome) => self.game_over(outcome),
            None => {
                let deadline = now + self.delay;
                debug!(delay_ms = self.delay.as_millis() as u64, "Opponent reply scheduled");
                Phase::OpponentPending { deadline }
            }
        };

        self.assert_invariants();
        self
    }

    /// Handles a click at surface pixel coordinates.
    #[instrument(skip(self, now))]
    pub fn click_at(self, x: f32, y: f32, now: Instant) -> Self {
        match layout::cell_at(x, y) {
            Some(pos) => self.click(pos, now),
            None => {
                debug!("Click outside the board ignored");
                self
            }
        }
    }

    /// Advances the clock to `now`, playing the opponent once its
    /// deadline has passed.
    #[instrument(skip(self, now), fields(phase = ?self.phase))]
    pub fn tick(mut self, now: Instant) -> Self {
        let phase = self.phase;
        match phase {
            Phase::OpponentPending { deadline } if now >= deadline => {
                self.phase = Phase::OpponentTurn;
                self = self.opponent_turn();
                self.assert_invariants();
                self
            }
            _ => self,
        }
    }

    /// Plays the opponent's mark and resolves the resulting phase.
    fn opponent_turn(mut self) -> Self {
        let Some(pos) = self.opponent.choose(&self.board) else {
            warn!("Opponent found no empty cell");
            self.phase = self.game_over(Outcome::Draw);
            return self;
        };

        if let Err(e) = self.place_mark(pos, Player::O) {
            warn!(error = %e, position = %pos, "Opponent move rejected");
            self.phase = Phase::HumanTurn;
            return self;
        }
        debug!(opponent = self.opponent.name(), position = %pos, "Opponent placed O");

        self.phase = match self.terminal_after(Player::O) {
            Some(outcome) => self.game_over(outcome),
            None => Phase::HumanTurn,
        };
        self
    }

    fn game_over(&self, outcome: Outcome) -> Phase {
        info!(%outcome, moves = self.history.len(), "Game over");
        debug!("Final board:\n{}", self.board.display());
        Phase::GameOver(outcome)
    }

    /// Win for the mover first, then draw.
    fn terminal_after(&self, mover: Player) -> Option<Outcome> {
        if rules::check_win(&self.board, mover) {
            Some(Outcome::win_for(mover))
        } else if rules::is_full(&self.board) {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    fn assert_invariants(&self) {
        if let Err(violations) = MatchInvariants::check_all(self) {
            for violation in &violations {
                warn!(%violation, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Invariant violations: {:?}", violations);
        }
    }
}
