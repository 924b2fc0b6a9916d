use crate::agent::player::GameResult;
use crate::game_repr::{Move, Player, Position};
use std::io;

pub mod text_renderer;
pub use text_renderer::TextRenderer;

/// Trait for presenting the game to whoever is watching.
///
/// The orchestrator calls it after every change; implementations decide how
/// (or whether) to show it. Errors come from the underlying output only.
pub trait Renderer {
    /// Draw the current board position
    fn draw_position(&mut self, position: &Position) -> io::Result<()>;

    /// Announce a move that was just applied
    ///
    /// # Arguments
    /// * `name` - Display name of the player who moved
    /// * `side` - Side the player moved for
    /// * `mv` - The applied move
    fn draw_move(&mut self, name: &str, side: Player, mv: Move) -> io::Result<()>;

    /// Show a free-form status line ("AI is thinking...")
    fn draw_message(&mut self, message: &str) -> io::Result<()>;

    /// Show the final result
    ///
    /// # Arguments
    /// * `result` - How the game ended
    /// * `names` - Display names of the `A` and `B` players
    fn draw_game_end(&mut self, result: GameResult, names: (&str, &str)) -> io::Result<()>;
}

/// Renderer that draws nothing, for simulations and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_position(&mut self, _position: &Position) -> io::Result<()> {
        Ok(())
    }

    fn draw_move(&mut self, _name: &str, _side: Player, _mv: Move) -> io::Result<()> {
        Ok(())
    }

    fn draw_message(&mut self, _message: &str) -> io::Result<()> {
        Ok(())
    }

    fn draw_game_end(&mut self, _result: GameResult, _names: (&str, &str)) -> io::Result<()> {
        Ok(())
    }
}
