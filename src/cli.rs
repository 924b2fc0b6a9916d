//! Command line interface.

use crate::agent::ai::{AIConfig, AIType, Difficulty, EvaluatorKind};
use crate::config::{GameConfig, GameMode, DEFAULT_BOARD_SIZE};
use crate::error::Result;
use crate::game_repr::Player;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "tictactoe")]
#[command(version, about = "N x N tic-tac-toe against a minimax engine", long_about = None)]
pub struct Cli {
    /// Board size (the board is size x size)
    #[arg(long, short = 's', default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Who plays whom
    #[arg(long, short = 'm', value_enum, default_value_t = ModeArg::Pvai)]
    pub mode: ModeArg,

    /// Engine strength
    #[arg(long, short = 'd', value_enum, default_value_t = DifficultyArg::Medium)]
    pub difficulty: DifficultyArg,

    /// Search depth in plies, overrides the difficulty
    #[arg(long)]
    pub depth: Option<u8>,

    /// Use alpha-beta pruning
    #[arg(long)]
    pub pruning: bool,

    /// Search root moves on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Score used when the search runs out of depth
    #[arg(long, value_enum, default_value_t = HeuristicArg::Outcome)]
    pub heuristic: HeuristicArg,

    /// Number of games in simulate mode
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducible simulations
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the engine move first in pvai mode
    #[arg(long)]
    pub human_second: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Human against the engine
    Pvai,
    /// Two humans on one terminal
    Pvp,
    /// Engine against engine
    Aivai,
    /// Silent games, random mover against the engine
    Simulate,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvai => GameMode::PvAI,
            ModeArg::Pvp => GameMode::PvP,
            ModeArg::Aivai => GameMode::AIvAI,
            ModeArg::Simulate => GameMode::Simulate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(difficulty: DifficultyArg) -> Self {
        match difficulty {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    /// Win, loss or zero
    Outcome,
    /// Favour lines only one player has stones in
    Lines,
}

impl From<HeuristicArg> for EvaluatorKind {
    fn from(heuristic: HeuristicArg) -> Self {
        match heuristic {
            HeuristicArg::Outcome => EvaluatorKind::Outcome,
            HeuristicArg::Lines => EvaluatorKind::LinePotential,
        }
    }
}

impl Cli {
    /// Engine settings shared by every computer seat
    pub fn ai_config(&self) -> AIConfig {
        AIConfig {
            depth: self.depth,
            // The flag can only turn pruning on; Expert prunes regardless
            pruning: self.pruning.then_some(true),
            parallel: self.parallel,
            evaluator: self.heuristic.into(),
            seed: self.seed,
            ..AIConfig::new(AIType::Minimax, self.difficulty.into())
        }
    }

    pub fn into_config(self) -> Result<GameConfig> {
        let ai = self.ai_config();
        let config = match GameMode::from(self.mode) {
            GameMode::PvAI => {
                let human = if self.human_second { Player::B } else { Player::A };
                GameConfig::pvai(self.size, human, ai)
            }
            GameMode::PvP => GameConfig::pvp(self.size),
            GameMode::AIvAI => GameConfig::aivai(self.size, ai, ai),
            GameMode::Simulate => GameConfig::simulate(self.size, ai, self.games, self.seed),
        };

        config.validate()?;
        Ok(config)
    }
}
