//! N x N tic-tac-toe with a depth-limited minimax engine.
//!
//! - [`game_repr`]: the board, moves and terminal detection
//! - [`agent`]: players, including the minimax engine in [`agent::ai`]
//! - [`orchestrator`]: the turn loop and batch simulation
//! - [`renderer`]: text output

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod orchestrator;
pub mod renderer;

pub use error::{GameError, Result};
