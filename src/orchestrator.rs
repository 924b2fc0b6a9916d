//! Game flow coordination.
//!
//! The [`Orchestrator`] owns the one live [`Position`] of a game, the two
//! players and a renderer, and drives turns:
//!
//! ```text
//! [Request Move] -> [Apply Move] -> [Render] -> [Check End] -> [Switch Turn] ...
//! ```
//!
//! Players only ever see `&Position` for the duration of one request. The
//! board is mutated in exactly one place, `Orchestrator::step`, through
//! `Position::mk_move`.

use crate::agent::player::{GamePlayer, GameResult};
use crate::agent::AIConfig;
use crate::config::{GameConfig, PlayerConfig};
use crate::error::{GameError, Result};
use crate::game_repr::{Move, Player, Position};
use crate::renderer::{NullRenderer, Renderer};
use std::fmt;

/// Illegal moves tolerated from one player in a single turn
pub const MAX_ILLEGAL_ATTEMPTS: usize = 3;

pub struct Orchestrator {
    /// The live board
    position: Position,

    /// Player moving as `A` (first)
    player_a: Box<dyn GamePlayer>,

    /// Player moving as `B`
    player_b: Box<dyn GamePlayer>,

    renderer: Box<dyn Renderer>,

    /// Whose turn it is
    current_turn: Player,

    /// Moves applied so far, in order
    history: Vec<(Player, Move)>,

    /// Set once the game has ended
    game_result: Option<GameResult>,
}

impl Orchestrator {
    /// Create a game on an empty `board_size` x `board_size` board with `A`
    /// to move.
    pub fn new(
        board_size: usize,
        player_a: Box<dyn GamePlayer>,
        player_b: Box<dyn GamePlayer>,
        renderer: Box<dyn Renderer>,
    ) -> Self {
        Self::from_position(Position::new(board_size), Player::A, player_a, player_b, renderer)
    }

    /// Resume from an arbitrary position with `to_move` to play.
    pub fn from_position(
        position: Position,
        to_move: Player,
        player_a: Box<dyn GamePlayer>,
        player_b: Box<dyn GamePlayer>,
        renderer: Box<dyn Renderer>,
    ) -> Self {
        Self {
            position,
            player_a,
            player_b,
            renderer,
            current_turn: to_move,
            history: Vec::new(),
            game_result: None,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn history(&self) -> &[(Player, Move)] {
        &self.history
    }

    pub fn game_result(&self) -> Option<GameResult> {
        self.game_result
    }

    fn player(&self, side: Player) -> &dyn GamePlayer {
        match side {
            Player::A => self.player_a.as_ref(),
            Player::B => self.player_b.as_ref(),
        }
    }

    fn player_name(&self, side: Player) -> &str {
        self.player(side).name()
    }

    /// Show a line of text through the renderer, outside of any turn.
    pub fn announce(&mut self, message: &str) -> Result<()> {
        self.renderer
            .draw_message(message)
            .map_err(GameError::io("show a message"))
    }

    /// Draw the starting board.
    pub fn start(&mut self) -> Result<()> {
        log::info!(
            "new {}x{} game: {} (O) vs {} (X)",
            self.position.size(),
            self.position.size(),
            self.player_a.name(),
            self.player_b.name()
        );
        self.renderer
            .draw_position(&self.position)
            .map_err(GameError::io("draw the board"))
    }

    /// Play one turn.
    ///
    /// Returns the result once the game is over; further calls keep
    /// returning it without touching the board.
    pub fn step(&mut self) -> Result<Option<GameResult>> {
        if let Some(result) = self.game_result {
            return Ok(Some(result));
        }
        if let Some(result) = GameResult::from_outcome(self.position.outcome()) {
            self.finish(result)?;
            return Ok(Some(result));
        }

        let side = self.current_turn;
        let message = {
            let player = self.player(side);
            if player.is_human() {
                format!("{} ({}) to move", player.name(), side)
            } else {
                format!("{} is thinking...", player.name())
            }
        };
        self.renderer
            .draw_message(&message)
            .map_err(GameError::io("show the turn"))?;

        let mut attempts = 0;
        let mv = loop {
            let player = match side {
                Player::A => &mut self.player_a,
                Player::B => &mut self.player_b,
            };

            let Some(mv) = player.get_move(&self.position, side) else {
                // No move on a full board is a draw, anywhere else a resignation
                let result = if self.position.valid_moves().is_empty() {
                    GameResult::Draw
                } else {
                    GameResult::Resigned(side)
                };
                self.finish(result)?;
                return Ok(Some(result));
            };

            if self.position.mk_move(mv, side) {
                break mv;
            }

            attempts += 1;
            log::warn!(
                "[{}] illegal move {} (attempt {}/{})",
                player.name(),
                mv,
                attempts,
                MAX_ILLEGAL_ATTEMPTS
            );
            if attempts == MAX_ILLEGAL_ATTEMPTS {
                return Err(GameError::IllegalMoveLimit {
                    player: player.name().to_string(),
                    side,
                    attempts,
                    last: mv,
                });
            }
        };

        self.history.push((side, mv));
        log::info!("{} ({}) plays {}", self.player_name(side), side, mv);

        let name = self.player_name(side).to_string();
        self.renderer
            .draw_move(&name, side, mv)
            .map_err(GameError::io("announce the move"))?;
        self.renderer
            .draw_position(&self.position)
            .map_err(GameError::io("draw the board"))?;

        match side {
            Player::A => self.player_b.opponent_moved(mv),
            Player::B => self.player_a.opponent_moved(mv),
        }

        if let Some(result) = GameResult::from_outcome(self.position.outcome()) {
            self.finish(result)?;
            return Ok(Some(result));
        }

        self.current_turn = side.opposite();
        Ok(None)
    }

    /// Play until the game ends.
    pub fn run(&mut self) -> Result<GameResult> {
        loop {
            if let Some(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    fn finish(&mut self, result: GameResult) -> Result<()> {
        self.game_result = Some(result);
        log::info!("game over after {} moves: {}", self.history.len(), result);

        self.player_a.game_ended(result);
        self.player_b.game_ended(result);

        let names = (self.player_a.name(), self.player_b.name());
        self.renderer
            .draw_game_end(result, names)
            .map_err(GameError::io("show the result"))
    }
}

/// Tally of a batch of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationSummary {
    pub games: usize,
    pub wins_a: usize,
    pub wins_b: usize,
    pub draws: usize,
}

impl SimulationSummary {
    pub fn record(&mut self, result: GameResult) {
        self.games += 1;
        match result.winner() {
            Some(Player::A) => self.wins_a += 1,
            Some(Player::B) => self.wins_b += 1,
            None => self.draws += 1,
        }
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: O won {}, X won {}, {} draws",
            self.games, self.wins_a, self.wins_b, self.draws
        )
    }
}

/// Play `config.games` silent games between two computer seats.
///
/// Each game gets fresh players; a seeded random seat is reseeded with
/// `seed + game index` so every game differs yet the batch is reproducible.
pub fn simulate(config: &GameConfig) -> Result<SimulationSummary> {
    config.validate()?;

    let (PlayerConfig::AI(ai_a), PlayerConfig::AI(ai_b)) = (config.player_a, config.player_b) else {
        return Err(GameError::InvalidConfig {
            message: "simulation needs two computer players".to_string(),
        });
    };

    log::info!(
        "simulating {} games: {} (O) vs {} (X)",
        config.games,
        ai_a.display_string(),
        ai_b.display_string()
    );

    let mut summary = SimulationSummary::default();
    for game in 0..config.games {
        let reseed = |ai: AIConfig| AIConfig {
            seed: ai.seed.map(|seed| seed.wrapping_add(game as u64)),
            ..ai
        };

        let mut orchestrator = Orchestrator::new(
            config.board_size,
            reseed(ai_a).create_player(Player::A),
            reseed(ai_b).create_player(Player::B),
            Box::new(NullRenderer),
        );
        let result = orchestrator.run()?;
        log::debug!("simulated game {}: {}", game + 1, result);
        summary.record(result);
    }

    log::info!("{}", summary);
    Ok(summary)
}
