//! Game configuration types.
//!
//! A [`GameConfig`] holds everything needed to start a game: board size,
//! mode, and who sits in each seat. It is usually built from the command
//! line (see [`crate::cli`]) and turned into players by the binary.

use crate::agent::ai::{AIConfig, AIType};
use crate::error::{GameError, Result};
use crate::game_repr::Player;

/// Board size of the terminal game
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Largest accepted board size
pub const MAX_BOARD_SIZE: usize = 16;

/// Configuration for a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Human player typing moves on the terminal
    Human,
    /// Computer player
    AI(AIConfig),
}

impl PlayerConfig {
    pub fn is_human(&self) -> bool {
        matches!(self, PlayerConfig::Human)
    }
}

/// Game mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Two humans on the same terminal
    PvP,
    /// One human against the engine
    #[default]
    PvAI,
    /// Two engines, for watching
    AIvAI,
    /// Many silent games, random mover against the engine
    Simulate,
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub mode: GameMode,
    /// Seat of player `A`, who moves first
    pub player_a: PlayerConfig,
    /// Seat of player `B`
    pub player_b: PlayerConfig,
    /// Number of games played in `Simulate` mode
    pub games: usize,
}

impl GameConfig {
    pub fn pvp(board_size: usize) -> Self {
        Self {
            board_size,
            mode: GameMode::PvP,
            player_a: PlayerConfig::Human,
            player_b: PlayerConfig::Human,
            games: 1,
        }
    }

    /// Create a PvAI game configuration.
    ///
    /// # Arguments
    /// * `human_side` - The side the human plays; `A` moves first
    /// * `ai` - Configuration of the engine in the other seat
    pub fn pvai(board_size: usize, human_side: Player, ai: AIConfig) -> Self {
        let (player_a, player_b) = match human_side {
            Player::A => (PlayerConfig::Human, PlayerConfig::AI(ai)),
            Player::B => (PlayerConfig::AI(ai), PlayerConfig::Human),
        };

        Self {
            board_size,
            mode: GameMode::PvAI,
            player_a,
            player_b,
            games: 1,
        }
    }

    pub fn aivai(board_size: usize, ai_a: AIConfig, ai_b: AIConfig) -> Self {
        Self {
            board_size,
            mode: GameMode::AIvAI,
            player_a: PlayerConfig::AI(ai_a),
            player_b: PlayerConfig::AI(ai_b),
            games: 1,
        }
    }

    /// Random mover as `A` against `ai` as `B`, `games` times.
    pub fn simulate(board_size: usize, ai: AIConfig, games: usize, seed: Option<u64>) -> Self {
        let random = AIConfig {
            seed,
            ..AIConfig::new(AIType::Random, ai.difficulty)
        };

        Self {
            board_size,
            mode: GameMode::Simulate,
            player_a: PlayerConfig::AI(random),
            player_b: PlayerConfig::AI(ai),
            games,
        }
    }

    pub fn seat(&self, side: Player) -> &PlayerConfig {
        match side {
            Player::A => &self.player_a,
            Player::B => &self.player_b,
        }
    }

    /// The human's side in a PvAI game, `None` for every other mode.
    pub fn human_side(&self) -> Option<Player> {
        match self.mode {
            GameMode::PvAI if self.player_a.is_human() => Some(Player::A),
            GameMode::PvAI if self.player_b.is_human() => Some(Player::B),
            _ => None,
        }
    }

    /// Lines shown before the first board of an interactive game.
    pub fn welcome_lines(&self) -> Vec<String> {
        let mut lines = vec!["Welcome to Tic-Tac-Toe!".to_string()];

        match (self.mode, self.human_side()) {
            (GameMode::PvAI, Some(human)) => lines.push(format!(
                "You are {}, AI is {}",
                human.symbol(),
                human.opposite().symbol()
            )),
            (GameMode::PvP, _) => lines.push("Player O moves first, Player X second".to_string()),
            _ => lines.push("AI is O, AI is X".to_string()),
        }

        if self.player_a.is_human() || self.player_b.is_human() {
            lines.push("Enter row and column numbers to make your move.".to_string());
        }
        lines
    }

    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidConfig {
                message: format!(
                    "board size must be between 1 and {}, got {}",
                    MAX_BOARD_SIZE, self.board_size
                ),
            });
        }
        for seat in [self.player_a, self.player_b] {
            if let PlayerConfig::AI(ai) = seat {
                if ai.ai_type == AIType::Minimax && ai.search_depth() == 0 {
                    return Err(GameError::InvalidConfig {
                        message: "search depth must be at least 1".to_string(),
                    });
                }
            }
        }
        if self.mode == GameMode::Simulate && self.games == 0 {
            return Err(GameError::InvalidConfig {
                message: "simulation needs at least one game".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::pvai(DEFAULT_BOARD_SIZE, Player::A, AIConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::Difficulty;

    #[test]
    fn test_default_is_human_first_on_four_by_four() {
        let config = GameConfig::default();

        assert_eq!(config.board_size, 4);
        assert_eq!(config.mode, GameMode::PvAI);
        assert_eq!(config.human_side(), Some(Player::A));
        assert_eq!(config.player_b, PlayerConfig::AI(AIConfig::default()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pvai_human_second() {
        let ai = AIConfig::new(AIType::Minimax, Difficulty::Hard);
        let config = GameConfig::pvai(3, Player::B, ai);

        assert_eq!(config.player_a, PlayerConfig::AI(ai));
        assert!(config.seat(Player::B).is_human());
        assert_eq!(config.human_side(), Some(Player::B));
    }

    #[test]
    fn test_pvp_and_aivai_have_no_human_side() {
        assert_eq!(GameConfig::pvp(3).human_side(), None);
        let ai = AIConfig::default();
        assert_eq!(GameConfig::aivai(3, ai, ai).human_side(), None);
    }

    #[test]
    fn test_simulate_seats_random_first() {
        let config = GameConfig::simulate(3, AIConfig::default(), 10, Some(1));

        match config.player_a {
            PlayerConfig::AI(ai) => {
                assert_eq!(ai.ai_type, AIType::Random);
                assert_eq!(ai.seed, Some(1));
            }
            PlayerConfig::Human => panic!("simulation must not seat a human"),
        }
        assert_eq!(config.games, 10);
    }

    #[test]
    fn test_welcome_lines() {
        assert_eq!(
            GameConfig::default().welcome_lines(),
            [
                "Welcome to Tic-Tac-Toe!",
                "You are O, AI is X",
                "Enter row and column numbers to make your move.",
            ]
        );

        let second = GameConfig::pvai(3, Player::B, AIConfig::default());
        assert_eq!(second.welcome_lines()[1], "You are X, AI is O");

        let ai = AIConfig::default();
        assert_eq!(GameConfig::aivai(3, ai, ai).welcome_lines().len(), 2);
        assert_eq!(GameConfig::pvp(3).welcome_lines().len(), 3);
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        assert!(GameConfig::pvp(0).validate().is_err());
        assert!(GameConfig::pvp(MAX_BOARD_SIZE + 1).validate().is_err());
        assert!(GameConfig::pvp(1).validate().is_ok());
        assert!(GameConfig::simulate(3, AIConfig::default(), 0, None).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let ai = AIConfig {
            depth: Some(0),
            ..AIConfig::default()
        };
        assert!(GameConfig::pvai(3, Player::A, ai).validate().is_err());
    }
}
