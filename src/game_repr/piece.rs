use std::fmt;

/// One of the two sides of the game.
///
/// `A` moves first and is the human side in an interactive game, `B` is the
/// side the engine plays by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn opposite(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Stone this player leaves on the board.
    pub fn to_cell(&self) -> Cell {
        match self {
            Self::A => Cell::PlayerA,
            Self::B => Cell::PlayerB,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::A => 'O',
            Self::B => 'X',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// Owner of the stone in this cell, `None` for an empty cell.
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::A),
            Cell::PlayerB => Some(Player::B),
        }
    }

    pub fn to_char(&self) -> char {
        match self.owner() {
            Some(player) => player.symbol(),
            None => '.',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.to_cell()
    }
}
