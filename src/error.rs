//! Error types for the game shell.
//!
//! The board and the search never fail; they signal rejected moves with
//! `false` and finished games with `None`. Errors only arise around them:
//! broken output streams, players that keep proposing illegal moves, and
//! invalid configuration.

use crate::game_repr::{Move, Player};
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error("failed to {operation}: {source}")]
    Io {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{player} ({side}) proposed {attempts} illegal moves in a row, last {last}")]
    IllegalMoveLimit {
        player: String,
        side: Player,
        attempts: usize,
        last: Move,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl GameError {
    pub fn io(operation: &'static str) -> impl FnOnce(std::io::Error) -> GameError {
        move |source| GameError::Io { operation, source }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
