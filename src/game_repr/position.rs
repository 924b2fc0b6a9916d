use std::fmt;

use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD REPRESENTATION AND TERMINAL DETECTION
 */

/// Result of scanning the board for a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Winner(Player),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            _ => None,
        }
    }
}

/// An `size` x `size` board stored row-major.
///
/// `apply_move` is the only way to change a cell, and it never overwrites a
/// stone, so a position only ever gains stones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    size: usize,
    cells: Vec<Cell>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Position {
    pub fn new(size: usize) -> Position {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Builds a position from one string per row using `.`, `O` and `X`.
    ///
    /// Returns `None` unless every row has exactly `rows.len()` symbols.
    pub fn from_rows(rows: &[&str]) -> Option<Position> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for row in rows {
            let before = cells.len();
            for c in row.chars().filter(|c| !c.is_whitespace()) {
                cells.push(match c {
                    '.' => Cell::Empty,
                    'O' | 'o' => Cell::PlayerA,
                    'X' | 'x' => Cell::PlayerB,
                    _ => return None,
                });
            }
            if cells.len() - before != size {
                return None;
            }
        }

        Some(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.in_bounds(row, col).then(|| self.cells[row * self.size + col])
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Every empty cell in row-major order.
    ///
    /// The order is part of the contract: the search treats the first move as
    /// its default and breaks ties in favour of earlier moves.
    pub fn valid_moves(&self) -> MoveList {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| Move::from_index(idx, self.size))
            .collect()
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(|cell| cell.is_empty())
    }

    /// Places `player`'s stone at (`row`, `col`).
    ///
    /// Returns `false` and leaves the board untouched when the cell is out of
    /// bounds or already taken.
    pub fn apply_move(&mut self, row: usize, col: usize, player: Player) -> bool {
        if !self.is_valid_move(row, col) {
            return false;
        }
        self.cells[Move::new(row, col).index(self.size)] = player.to_cell();
        true
    }

    pub fn mk_move(&mut self, mv: Move, player: Player) -> bool {
        self.apply_move(mv.row, mv.col, player)
    }

    /// Successor position with `mv` played, or `None` if `mv` is illegal.
    pub fn with_move(&self, mv: Move, player: Player) -> Option<Position> {
        let mut next = self.clone();
        next.mk_move(mv, player).then_some(next)
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = self.winner() {
            return Outcome::Winner(winner);
        }
        if self.cells.iter().any(|cell| cell.is_empty()) {
            Outcome::Ongoing
        } else {
            Outcome::Draw
        }
    }

    /// Owner of the first complete line, scanning rows, then columns, then
    /// both diagonals together.
    ///
    /// A diagonal owned by `A` takes precedence over one owned by `B`,
    /// whichever of the two diagonals each one is.
    pub fn winner(&self) -> Option<Player> {
        let n = self.size;

        let main = self.line_owner((0..n).map(|i| i * n + i));
        let anti = self.line_owner((0..n).map(|i| i * n + (n - 1 - i)));
        let diagonal = [Player::A, Player::B]
            .into_iter()
            .find(|&player| main == Some(player) || anti == Some(player));

        (0..n)
            .find_map(|row| self.line_owner((0..n).map(|col| row * n + col)))
            .or_else(|| (0..n).find_map(|col| self.line_owner((0..n).map(|row| row * n + col))))
            .or(diagonal)
    }

    fn line_owner(&self, mut line: impl Iterator<Item = usize>) -> Option<Player> {
        let first = self.cells[line.next()?];
        let owner = first.owner()?;
        line.all(|idx| self.cells[idx] == first).then_some(owner)
    }

    /// Rows, columns, the main diagonal and the anti-diagonal as lists of
    /// cell indices.
    pub fn lines(&self) -> Vec<Vec<usize>> {
        let n = self.size;
        if n == 0 {
            return Vec::new();
        }

        let mut lines = Vec::with_capacity(2 * n + 2);
        for row in 0..n {
            lines.push((0..n).map(|col| row * n + col).collect());
        }
        for col in 0..n {
            lines.push((0..n).map(|row| row * n + col).collect());
        }
        lines.push((0..n).map(|i| i * n + i).collect());
        lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());
        lines
    }
}

/// Text board: column indices on top, row index in front of each row.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..self.size {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;

        for row in 0..self.size {
            write!(f, "{}", row)?;
            for col in 0..self.size {
                write!(f, " {}", self.cells[row * self.size + col].to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
