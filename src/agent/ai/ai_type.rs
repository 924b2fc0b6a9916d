//! AI Type Registry - Centralized registry for AI implementations
//!
//! Enumerates the computer players and builds them from an [`AIConfig`].

use super::evaluation::{Evaluator, LinePotentialEvaluator, OutcomeEvaluator};
use super::search::MinimaxEngine;
use super::{Difficulty, MinimaxPlayer};
use crate::agent::player::GamePlayer;
use crate::agent::RandomPlayer;
use crate::game_repr::Player;

/// Enumeration of available AI algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AIType {
    /// Depth-limited minimax
    #[default]
    Minimax,
    /// Uniformly random legal moves
    Random,
}

impl AIType {
    pub fn display_name(&self) -> &'static str {
        match self {
            AIType::Minimax => "Minimax",
            AIType::Random => "Random",
        }
    }

    pub fn supports_difficulty(&self) -> bool {
        match self {
            AIType::Minimax => true,
            AIType::Random => false,
        }
    }
}

/// Evaluator applied when the search runs out of depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvaluatorKind {
    /// Win/loss/0 only
    #[default]
    Outcome,
    /// Open-line heuristic
    LinePotential,
}

impl EvaluatorKind {
    pub fn build(&self) -> Box<dyn Evaluator> {
        match self {
            EvaluatorKind::Outcome => Box::new(OutcomeEvaluator),
            EvaluatorKind::LinePotential => Box::new(LinePotentialEvaluator),
        }
    }
}

/// Configuration for a single AI player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AIConfig {
    pub ai_type: AIType,
    pub difficulty: Difficulty,
    /// Overrides the difficulty's search depth
    pub depth: Option<u8>,
    /// Overrides the difficulty's pruning setting
    pub pruning: Option<bool>,
    pub parallel: bool,
    pub evaluator: EvaluatorKind,
    /// Seed for the random player, OS entropy when `None`
    pub seed: Option<u64>,
}

impl AIConfig {
    pub fn new(ai_type: AIType, difficulty: Difficulty) -> Self {
        Self {
            ai_type,
            difficulty,
            ..Self::default()
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.depth.unwrap_or_else(|| self.difficulty.max_depth())
    }

    pub fn pruning(&self) -> bool {
        self.pruning.unwrap_or_else(|| self.difficulty.uses_pruning())
    }

    /// Engine for `side` built from this configuration
    pub fn engine(&self, side: Player) -> MinimaxEngine<Box<dyn Evaluator>> {
        MinimaxEngine::new(self.search_depth())
            .with_player(side)
            .with_pruning(self.pruning())
            .with_evaluator(self.evaluator.build())
    }

    /// Create a player instance from this configuration
    pub fn create_player(&self, side: Player) -> Box<dyn GamePlayer> {
        match self.ai_type {
            AIType::Minimax => {
                let name = match self.depth {
                    Some(depth) => format!("AI (depth {})", depth),
                    None => format!("AI ({})", self.difficulty.name()),
                };
                Box::new(MinimaxPlayer::new(self.engine(side), name).with_parallel(self.parallel))
            }
            AIType::Random => Box::new(RandomPlayer::new(self.seed)),
        }
    }

    /// Short description for logs, e.g. `Minimax (Hard)`
    pub fn display_string(&self) -> String {
        if self.ai_type.supports_difficulty() {
            format!("{} ({})", self.ai_type.display_name(), self.difficulty.name())
        } else {
            self.ai_type.display_name().to_string()
        }
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            ai_type: AIType::default(),
            difficulty: Difficulty::default(),
            depth: None,
            pruning: None,
            parallel: false,
            evaluator: EvaluatorKind::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Move, Position};

    #[test]
    fn test_ai_config_default() {
        let config = AIConfig::default();
        assert_eq!(config.ai_type, AIType::Minimax);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.search_depth(), 3);
        assert!(!config.pruning());
    }

    #[test]
    fn test_overrides_win_over_difficulty() {
        let config = AIConfig {
            depth: Some(9),
            pruning: Some(true),
            ..AIConfig::new(AIType::Minimax, Difficulty::Easy)
        };
        let engine = config.engine(Player::A);

        assert_eq!(engine.search_depth(), 9);
        assert!(engine.pruning());
        assert_eq!(engine.player(), Player::A);
        assert_eq!(config.create_player(Player::A).name(), "AI (depth 9)");
    }

    #[test]
    fn test_display_string() {
        assert_eq!(
            AIConfig::new(AIType::Minimax, Difficulty::Hard).display_string(),
            "Minimax (Hard)"
        );
        assert_eq!(AIConfig::new(AIType::Random, Difficulty::Hard).display_string(), "Random");
    }

    #[test]
    fn test_created_player_takes_win_for_its_side() {
        let pos = Position::from_rows(&["XX.", "OO.", "..."]).unwrap();
        let config = AIConfig::new(AIType::Minimax, Difficulty::Easy);

        let mut x = config.create_player(Player::B);
        let mut o = config.create_player(Player::A);
        assert_eq!(x.get_move(&pos, Player::B), Some(Move::new(0, 2)));
        assert_eq!(o.get_move(&pos, Player::A), Some(Move::new(1, 2)));
    }

    #[test]
    fn test_evaluator_kind_builds() {
        let pos = Position::from_rows(&["...", ".X.", "..."]).unwrap();

        assert_eq!(EvaluatorKind::Outcome.build().evaluate(&pos, Player::B), 0);
        assert_eq!(EvaluatorKind::LinePotential.build().evaluate(&pos, Player::B), 4);
    }
}
