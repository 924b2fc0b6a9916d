//! Plain-text renderer for terminal play.
//!
//! The board is printed with column indices on top and the row index in
//! front of each row, `.` for empty cells, `O` for player A and `X` for B.

use super::Renderer;
use crate::agent::player::GameResult;
use crate::game_repr::{Move, Player, Position};
use std::io::{self, Write};

pub struct TextRenderer<W> {
    output: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw_position(&mut self, position: &Position) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", position)?;
        writeln!(self.output)?;
        self.output.flush()
    }

    fn draw_move(&mut self, name: &str, side: Player, mv: Move) -> io::Result<()> {
        writeln!(self.output, "{} ({}) moves at position {}", name, side, mv)
    }

    fn draw_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    fn draw_game_end(&mut self, result: GameResult, names: (&str, &str)) -> io::Result<()> {
        let name = |side: Player| match side {
            Player::A => names.0,
            Player::B => names.1,
        };

        match result {
            GameResult::Winner(side) => writeln!(self.output, "{} ({}) wins!", name(side), side)?,
            GameResult::Draw => writeln!(self.output, "It's a tie!")?,
            GameResult::Resigned(side) => writeln!(
                self.output,
                "{} ({}) gave up. {} ({}) wins!",
                name(side),
                side,
                name(side.opposite()),
                side.opposite()
            )?,
        }
        writeln!(self.output, "Game Over!")?;
        self.output.flush()
    }
}
