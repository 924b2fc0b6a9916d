//! MinimaxPlayer - game AI backed by the depth-limited minimax engine
//!
//! The player owns a [`MinimaxEngine`] and re-targets it at whichever side it
//! is asked to move for, so the same player can take either seat.
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 1, only sees its own immediate win
//! - **Medium**: Depth 3, sees its win and the opponent's reply
//! - **Hard**: Depth 5
//! - **Expert**: Depth 7, with alpha-beta pruning

use super::evaluation::Evaluator;
use super::search::MinimaxEngine;
use crate::agent::player::{GamePlayer, GameResult};
use crate::game_repr::{Move, Player, Position};

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Number of plies (half-moves) to search
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
            Difficulty::Expert => 7,
        }
    }

    /// Whether this level searches with alpha-beta pruning by default
    pub fn uses_pruning(&self) -> bool {
        matches!(self, Difficulty::Expert)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// AI player that asks the minimax engine for every move
pub struct MinimaxPlayer {
    engine: MinimaxEngine<Box<dyn Evaluator>>,
    /// Split the root moves across the rayon pool
    parallel: bool,
    name: String,
}

impl MinimaxPlayer {
    pub fn new(engine: MinimaxEngine<Box<dyn Evaluator>>, name: String) -> Self {
        Self {
            engine,
            parallel: false,
            name,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl GamePlayer for MinimaxPlayer {
    /// Searches `search_depth` plies for `side`.
    ///
    /// Returns `None` only when the game is already decided or the depth is 0.
    fn get_move(&mut self, position: &Position, side: Player) -> Option<Move> {
        self.engine.set_player(side);

        let search_result = if self.parallel {
            self.engine.search_parallel(position)
        } else {
            self.engine.search(position)
        };

        log::info!(
            "[{}] depth {}, evaluated {} positions, best move score: {}",
            self.name,
            search_result.depth,
            search_result.nodes_searched,
            search_result.score
        );

        search_result.best_move
    }

    fn game_ended(&mut self, result: GameResult) {
        log::debug!("[{}] game ended: {}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::{AIConfig, AIType};

    fn player(difficulty: Difficulty) -> MinimaxPlayer {
        let engine = AIConfig::new(AIType::Minimax, difficulty).engine(Player::B);
        MinimaxPlayer::new(engine, format!("AI ({})", difficulty.name()))
    }

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.max_depth(), 1);
        assert_eq!(Difficulty::Medium.max_depth(), 3);
        assert_eq!(Difficulty::Hard.max_depth(), 5);
        assert_eq!(Difficulty::Expert.max_depth(), 7);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_names() {
        let levels = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert];
        let names: Vec<_> = levels.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["Easy", "Medium", "Hard", "Expert"]);
    }

    #[test]
    fn test_expert_engine_prunes() {
        let engine = AIConfig::new(AIType::Minimax, Difficulty::Expert).engine(Player::B);
        assert_eq!(engine.search_depth(), 7);
        assert!(engine.pruning());
    }

    #[test]
    fn test_plays_for_requested_side() {
        // Both sides have an open row; each must take its own win
        let pos = Position::from_rows(&["OO.", "XX.", "..."]).unwrap();
        let mut easy = player(Difficulty::Easy);

        assert_eq!(easy.get_move(&pos, Player::A), Some(Move::new(0, 2)));
        assert_eq!(easy.get_move(&pos, Player::B), Some(Move::new(1, 2)));
        assert_eq!(easy.engine.player(), Player::B);
    }

    #[test]
    fn test_parallel_player_agrees() {
        let pos = Position::from_rows(&["O...", ".X..", "....", "...."]).unwrap();
        let mut sequential = player(Difficulty::Medium);
        let mut parallel = player(Difficulty::Medium).with_parallel(true);

        assert_eq!(
            sequential.get_move(&pos, Player::A),
            parallel.get_move(&pos, Player::A)
        );
    }
}
