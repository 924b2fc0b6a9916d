// Search Engine
//
// Entry point of the AI. Holds the configuration (ply budget, engine player,
// evaluator, pruning) and runs either the sequential search or a
// root-parallel one that hands each root move to the rayon pool.

use super::evaluation::{Evaluator, OutcomeEvaluator};
use super::minimax::Searcher;
use crate::game_repr::{Move, Player, Position};
use rayon::prelude::*;
use std::time::Instant;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

/// Depth-limited minimax engine playing for one player.
///
/// The engine never mutates the position it is given; every hypothetical
/// board is a private copy that lives only as long as its subtree.
#[derive(Debug, Clone)]
pub struct MinimaxEngine<E: Evaluator = OutcomeEvaluator> {
    search_depth: u8,
    maximizer: Player,
    pruning: bool,
    evaluator: E,
}

impl MinimaxEngine<OutcomeEvaluator> {
    /// Engine playing `Player::B` with the outcome-only evaluator
    pub fn new(search_depth: u8) -> Self {
        Self {
            search_depth,
            maximizer: Player::B,
            pruning: false,
            evaluator: OutcomeEvaluator,
        }
    }
}

impl<E: Evaluator> MinimaxEngine<E> {
    /// Play for `player` instead of the default `Player::B`
    pub fn with_player(mut self, player: Player) -> Self {
        self.maximizer = player;
        self
    }

    pub fn set_player(&mut self, player: Player) {
        self.maximizer = player;
    }

    /// Enable alpha-beta pruning; the chosen move does not change
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Replace the evaluator used at the depth horizon
    pub fn with_evaluator<F: Evaluator>(self, evaluator: F) -> MinimaxEngine<F> {
        MinimaxEngine {
            search_depth: self.search_depth,
            maximizer: self.maximizer,
            pruning: self.pruning,
            evaluator,
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn player(&self) -> Player {
        self.maximizer
    }

    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Minimax value of `state` searched `depth` plies deep.
    ///
    /// `maximizing` tells whether the engine's player is to move. The move is
    /// `None` at leaves: a win for either side, `depth == 0`, or a full board.
    pub fn evaluate(&self, state: &Position, depth: u8, maximizing: bool) -> (i32, Option<Move>) {
        let mut searcher = Searcher::new(self.maximizer, &self.evaluator);
        self.run(&mut searcher, state, depth, maximizing)
    }

    /// Best move for the engine's player, `None` when the game is over
    pub fn get_best_move(&self, state: &Position) -> Option<Move> {
        self.evaluate(state, self.search_depth, true).1
    }

    /// Search from the engine's point of view and report statistics
    pub fn search(&self, state: &Position) -> SearchResult {
        let start_time = Instant::now();
        let mut searcher = Searcher::new(self.maximizer, &self.evaluator);

        let (score, best_move) = self.run(&mut searcher, state, self.search_depth, true);

        let result = SearchResult {
            best_move,
            score,
            depth: self.search_depth,
            nodes_searched: searcher.nodes,
            time_ms: start_time.elapsed().as_millis() as u64,
        };
        print_search_info(&result, self.maximizer);
        result
    }

    /// Same result as [`search`](Self::search), with the root moves
    /// evaluated on the rayon thread pool.
    ///
    /// Child results are collected in root order and reduced with the same
    /// first-strict-maximum rule, so the move never depends on scheduling.
    pub fn search_parallel(&self, state: &Position) -> SearchResult {
        let start_time = Instant::now();

        // Leaves and single-move roots gain nothing from splitting
        let moves = state.valid_moves();
        if self.search_depth == 0 || state.winner().is_some() || moves.len() < 2 {
            return self.search(state);
        }

        let depth = self.search_depth;
        let children: Vec<Option<(Move, i32, u64)>> = moves
            .into_vec()
            .into_par_iter()
            .map(|mv| {
                let child = state.with_move(mv, self.maximizer)?;
                let mut searcher = Searcher::new(self.maximizer, &self.evaluator);
                let (score, _) = self.run(&mut searcher, &child, depth - 1, false);
                Some((mv, score, searcher.nodes))
            })
            .collect();

        let mut best_score = i32::MIN;
        let mut best_move = None;
        let mut nodes_searched = 1;
        for (mv, score, nodes) in children.into_iter().flatten() {
            nodes_searched += nodes;
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        let result = SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes_searched,
            time_ms: start_time.elapsed().as_millis() as u64,
        };
        log::debug!("parallel search on {} threads", rayon::current_num_threads());
        print_search_info(&result, self.maximizer);
        result
    }

    fn run(
        &self,
        searcher: &mut Searcher<'_, E>,
        state: &Position,
        depth: u8,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        if self.pruning {
            searcher.alpha_beta(state, depth, i32::MIN, i32::MAX, maximizing)
        } else {
            searcher.minimax(state, depth, maximizing)
        }
    }
}

/// Log search information for a completed search
fn print_search_info(result: &SearchResult, player: Player) {
    let nps = if result.time_ms > 0 {
        (result.nodes_searched as f64 / result.time_ms as f64 * 1000.0) as u64
    } else {
        result.nodes_searched
    };

    log::debug!(
        "info player {} depth {} score {} nodes {} time {} nps {} move {:?}",
        player,
        result.depth,
        result.score,
        result.nodes_searched,
        result.time_ms,
        nps,
        result.best_move
    );
}
