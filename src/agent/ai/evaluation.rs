// Static position evaluation
//
// Called by the search only at the depth horizon, on boards where nobody has
// won yet. Scores are from the perspective of the engine's own player.

use crate::game_repr::{Outcome, Player, Position};

/// Score of a board won by the engine's player
pub const WIN_SCORE: i32 = 100;

/// Score of a board won by the opponent
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Score of a drawn board
pub const DRAW_SCORE: i32 = 0;

/// Largest magnitude a heuristic may return, strictly inside the win/loss scores
pub const MAX_HEURISTIC: i32 = WIN_SCORE - 1;

/// Scores a board for the player the search is maximizing.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, pos: &Position, maximizer: Player) -> i32;
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn evaluate(&self, pos: &Position, maximizer: Player) -> i32 {
        (**self).evaluate(pos, maximizer)
    }
}

/// Mirrors the terminal outcome: win, loss, or 0 for anything else
#[derive(Debug, Clone, Copy, Default)]
pub struct OutcomeEvaluator;

impl Evaluator for OutcomeEvaluator {
    fn evaluate(&self, pos: &Position, maximizer: Player) -> i32 {
        outcome_score(pos.outcome(), maximizer)
    }
}

pub fn outcome_score(outcome: Outcome, maximizer: Player) -> i32 {
    match outcome {
        Outcome::Winner(player) if player == maximizer => WIN_SCORE,
        Outcome::Winner(_) => LOSS_SCORE,
        Outcome::Draw | Outcome::Ongoing => DRAW_SCORE,
    }
}

/// Rewards open lines.
///
/// A line holding stones of only one player is still winnable by that
/// player and is worth the square of its stone count, positive for the
/// maximizer and negative for the opponent. Blocked and empty lines are
/// worth nothing. Terminal boards fall back to the outcome score.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinePotentialEvaluator;

impl Evaluator for LinePotentialEvaluator {
    fn evaluate(&self, pos: &Position, maximizer: Player) -> i32 {
        let outcome = pos.outcome();
        if outcome.is_terminal() {
            return outcome_score(outcome, maximizer);
        }

        let own = maximizer.to_cell();
        let opponent = maximizer.opposite().to_cell();
        let cells = pos.cells();

        let score: i32 = pos
            .lines()
            .iter()
            .map(|line| {
                let mine = line.iter().filter(|&&idx| cells[idx] == own).count() as i32;
                let theirs = line.iter().filter(|&&idx| cells[idx] == opponent).count() as i32;
                match (mine, theirs) {
                    (m, 0) => m * m,
                    (0, t) => -(t * t),
                    _ => 0,
                }
            })
            .sum();

        score.clamp(-MAX_HEURISTIC, MAX_HEURISTIC)
    }
}
