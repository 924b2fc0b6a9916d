// Minimax Search
//
// Plain depth-limited minimax over full position copies. Every node clones
// its parent and applies one move, so the caller's position is never touched
// and sibling branches never share a board.
//
// The maximizing side always places the engine's own stone, the minimizing
// side the opponent's. Ties keep the earliest move in row-major order.
//
// The optional alpha-beta variant uses the same move order and the same
// strict-improvement rule. Pruned children can only report values at or
// below the running best, so the root score and root move are identical to
// the plain search.

use super::evaluation::{Evaluator, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use crate::game_repr::{Move, Player, Position};

/// Recursive search state shared by every node of one search
pub struct Searcher<'a, E: Evaluator + ?Sized> {
    /// Player whose score is maximized
    pub maximizer: Player,
    /// Static evaluator used at the depth horizon
    pub evaluator: &'a E,
    /// Number of nodes visited so far
    pub nodes: u64,
}

impl<'a, E: Evaluator + ?Sized> Searcher<'a, E> {
    pub fn new(maximizer: Player, evaluator: &'a E) -> Self {
        Self {
            maximizer,
            evaluator,
            nodes: 0,
        }
    }

    /// Stone placed by the side to move at this ply
    fn mover(&self, maximizing: bool) -> Player {
        if maximizing {
            self.maximizer
        } else {
            self.maximizer.opposite()
        }
    }

    /// Leaf score, or `None` if the node must be expanded.
    ///
    /// Checked in order: maximizer won, minimizer won, depth exhausted.
    /// A board with no moves left is handled by the caller.
    fn leaf_score(&self, pos: &Position, depth: u8) -> Option<i32> {
        match pos.winner() {
            Some(player) if player == self.maximizer => Some(WIN_SCORE),
            Some(_) => Some(LOSS_SCORE),
            None if depth == 0 => Some(self.evaluator.evaluate(pos, self.maximizer)),
            None => None,
        }
    }

    /// Minimax value of `pos` and the move achieving it
    ///
    /// # Returns
    ///
    /// (score, best_move) - `best_move` is `None` exactly at leaves
    pub fn minimax(&mut self, pos: &Position, depth: u8, maximizing: bool) -> (i32, Option<Move>) {
        self.nodes += 1;

        if let Some(score) = self.leaf_score(pos, depth) {
            return (score, None);
        }

        let moves = pos.valid_moves();
        let Some(&first) = moves.first() else {
            return (DRAW_SCORE, None);
        };

        let mover = self.mover(maximizing);
        let mut best_move = first;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for mv in moves {
            let Some(child) = pos.with_move(mv, mover) else {
                continue;
            };
            let (score, _) = self.minimax(&child, depth - 1, !maximizing);

            let improved = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improved {
                best_score = score;
                best_move = mv;
            }
        }

        (best_score, Some(best_move))
    }

    /// Minimax with alpha-beta pruning (fail-soft)
    ///
    /// # Arguments
    ///
    /// * `alpha` - Score the maximizer is already guaranteed
    /// * `beta` - Score the minimizer is already guaranteed
    ///
    /// # Returns
    ///
    /// (score, best_move) - exact when the true value lies in (alpha, beta),
    /// otherwise a bound on the far side of the window
    pub fn alpha_beta(
        &mut self,
        pos: &Position,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        if let Some(score) = self.leaf_score(pos, depth) {
            return (score, None);
        }

        let moves = pos.valid_moves();
        let Some(&first) = moves.first() else {
            return (DRAW_SCORE, None);
        };

        let mover = self.mover(maximizing);
        let mut best_move = first;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for mv in moves {
            let Some(child) = pos.with_move(mv, mover) else {
                continue;
            };
            let (score, _) = self.alpha_beta(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = mv;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = mv;
                }
                beta = beta.min(best_score);
            }

            if alpha >= beta {
                break;
            }
        }

        (best_score, Some(best_move))
    }
}
