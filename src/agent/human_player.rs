//! Human player implementation that reads moves from a text stream.
//!
//! `HumanPlayer` prompts for a row and then a column, the way the terminal
//! game always has. Input handling follows these rules:
//! - **Non-numeric input**: complain and ask for the row again, even when it
//!   was the column that was wrong
//! - **Occupied or out-of-range cell** (negative numbers included): complain
//!   and start over
//! - **End of input**: give up and return `None`
//!
//! The reader and writer are generic so tests can drive the player with an
//! in-memory script instead of a terminal.

use crate::agent::player::GamePlayer;
use crate::game_repr::{parse_coordinate, Move, MoveParseError, Player, Position};
use std::io::{self, BufRead, Write};

/// One line typed at a coordinate prompt
enum Entry {
    Coordinate(usize),
    NotANumber,
}

pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    name: String,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, name: String) -> Self {
        Self {
            input,
            output,
            name,
        }
    }

    /// Consume the player and hand back its streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompt and read one line, `None` at end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompt for one coordinate, `None` at end of input.
    ///
    /// Negative numbers come back as `usize::MAX` so the bounds check rejects
    /// them like any other cell off the board.
    fn read_coordinate(&mut self, prompt: &str, max: usize) -> io::Result<Option<Entry>> {
        let Some(line) = self.ask(prompt)? else {
            return Ok(None);
        };

        let entry = match parse_coordinate(&line) {
            Ok(value) => Entry::Coordinate(value),
            Err(MoveParseError::Negative(_)) => Entry::Coordinate(usize::MAX),
            Err(err) => {
                log::debug!("rejected input: {}", err);
                writeln!(self.output, "Please enter numbers between 0 and {}.", max)?;
                Entry::NotANumber
            }
        };
        Ok(Some(entry))
    }

    fn read_move(&mut self, position: &Position) -> io::Result<Option<Move>> {
        let max = position.size().saturating_sub(1);

        loop {
            let row = match self.read_coordinate(&format!("Enter row (0-{}): ", max), max)? {
                None => return Ok(None),
                Some(Entry::NotANumber) => continue,
                Some(Entry::Coordinate(row)) => row,
            };
            let col = match self.read_coordinate(&format!("Enter column (0-{}): ", max), max)? {
                None => return Ok(None),
                Some(Entry::NotANumber) => continue,
                Some(Entry::Coordinate(col)) => col,
            };

            if position.is_valid_move(row, col) {
                return Ok(Some(Move::new(row, col)));
            }
            writeln!(
                self.output,
                "Invalid move! Cell is either occupied or out of bounds. Try again."
            )?;
        }
    }
}

impl<R: BufRead, W: Write> GamePlayer for HumanPlayer<R, W> {
    fn get_move(&mut self, position: &Position, _side: Player) -> Option<Move> {
        match self.read_move(position) {
            Ok(mv) => mv,
            Err(err) => {
                log::error!("[{}] failed to read move: {}", self.name, err);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}
