//! Player trait and associated types for game participants.
//!
//! Anything that can be asked for a move implements [`GamePlayer`]: the
//! terminal human, the minimax engine, the random mover used in simulations.
//! The orchestrator owns the position and lends it to the player for the
//! duration of one `get_move` call; players never hold on to the board.
//!
//! # Synchronous Design
//!
//! `get_move()` blocks until a move is available. The human player blocks on
//! its input stream, the engine blocks while searching. The game is strictly
//! turn-based, so nothing else needs to run meanwhile.

use crate::game_repr::{Move, Outcome, Player, Position};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// The given side completed a line
    Winner(Player),
    /// The board filled up without a line
    Draw,
    /// The given side stopped providing moves while the game was still open
    Resigned(Player),
}

impl GameResult {
    /// Result for a terminal outcome, `None` while the game is ongoing
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::Ongoing => None,
            Outcome::Winner(player) => Some(GameResult::Winner(player)),
            Outcome::Draw => Some(GameResult::Draw),
        }
    }

    /// Side that won the game, counting a resignation as a win for the other side
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(player) => Some(*player),
            GameResult::Resigned(player) => Some(player.opposite()),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{} wins", player),
            GameResult::Draw => write!(f, "draw"),
            GameResult::Resigned(player) => write!(f, "{} resigned", player),
        }
    }
}

/// Trait for entities that can provide moves.
///
/// Only `get_move()` must be implemented.
pub trait GamePlayer {
    /// Request the next move for `side` on `position`.
    ///
    /// - `Some(Move)`: the move the player wants to make
    /// - `None`: the player cannot or will not move (no legal moves, end of
    ///   input, search with nothing to search)
    ///
    /// The orchestrator still validates the move with `apply_move`.
    fn get_move(&mut self, position: &Position, side: Player) -> Option<Move>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: Move) {}

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }

    /// Whether moves come from a person at the terminal.
    fn is_human(&self) -> bool {
        false
    }
}

/// One player occupying a seat, possibly alongside the same player in the
/// other seat.
///
/// Two human seats must share a single terminal reader, so both seats hold
/// the same `Rc<RefCell<_>>` and only their display names differ.
pub struct SharedPlayer<P: ?Sized> {
    inner: Rc<RefCell<P>>,
    name: String,
}

impl<P: GamePlayer + ?Sized> SharedPlayer<P> {
    pub fn new(inner: Rc<RefCell<P>>, name: String) -> Self {
        Self { inner, name }
    }
}

impl<P: GamePlayer + ?Sized> GamePlayer for SharedPlayer<P> {
    fn get_move(&mut self, position: &Position, side: Player) -> Option<Move> {
        self.inner.borrow_mut().get_move(position, side)
    }

    fn opponent_moved(&mut self, mv: Move) {
        self.inner.borrow_mut().opponent_moved(mv);
    }

    fn game_ended(&mut self, result: GameResult) {
        self.inner.borrow_mut().game_ended(result);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        self.inner.borrow().is_human()
    }
}
