// AI Agent - depth-limited minimax
//
// Key features:
// - Deterministic (same position always gives same move)
// - Full-copy tree search: the caller's position is never mutated
// - Optional alpha-beta pruning and root-parallel search, both returning the
//   same move as the plain search
// - Pluggable evaluation at the depth horizon

mod ai_type;
mod evaluation;
mod minimax;
mod minimax_player;
mod search;

pub use ai_type::{AIConfig, AIType, EvaluatorKind};
pub use evaluation::{
    outcome_score, Evaluator, LinePotentialEvaluator, OutcomeEvaluator, DRAW_SCORE, LOSS_SCORE,
    MAX_HEURISTIC, WIN_SCORE,
};
pub use minimax_player::{Difficulty, MinimaxPlayer};
pub use search::{MinimaxEngine, SearchResult};
