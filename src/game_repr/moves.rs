use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;

/// Move list sized for boards up to 4x4 before spilling to the heap.
pub type MoveList = SmallVec<[Move; 16]>;

/// A cell coordinate, `row` and `col` both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Move {
        Self { row, col }
    }

    /// Row-major index of this move on a board of the given size.
    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    pub fn from_index(index: usize, size: usize) -> Move {
        Self::new(index / size, index % size)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("no coordinate given")]
    Empty,

    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    /// A number, but one no board has a cell at
    #[error("{0} is below zero")]
    Negative(i64),
}

/// Parses a single coordinate as typed at the prompt.
///
/// Negative numbers parse but are reported separately, so callers can treat
/// them as an out-of-bounds cell rather than as garbage.
pub fn parse_coordinate(input: &str) -> Result<usize, MoveParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MoveParseError::Empty);
    }
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| MoveParseError::NotANumber(trimmed.to_string()))?;
    usize::try_from(value).map_err(|_| MoveParseError::Negative(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversion() {
        let mv = Move::new(2, 1);
        assert_eq!(mv.index(4), 9);
        assert_eq!(Move::from_index(9, 4), mv);
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("2\n"), Ok(2));
        assert_eq!(parse_coordinate(" +3 "), Ok(3));
        assert_eq!(parse_coordinate("  \n"), Err(MoveParseError::Empty));
        assert_eq!(
            parse_coordinate("a"),
            Err(MoveParseError::NotANumber("a".to_string()))
        );
        assert_eq!(
            parse_coordinate("1.5"),
            Err(MoveParseError::NotANumber("1.5".to_string()))
        );
        assert_eq!(parse_coordinate("-1"), Err(MoveParseError::Negative(-1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(0, 2).to_string(), "(0, 2)");
    }
}
