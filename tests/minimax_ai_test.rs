//! End-to-end tests for the minimax engine and the game loop
//!
//! This test suite covers:
//! - Perfect play on 3x3 (the engine never loses against any replies)
//! - Determinism and agreement between plain, pruned and parallel search
//! - Complete games through the orchestrator, including a scripted human

use std::cell::RefCell;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

use tictactoe_engine::agent::ai::{AIConfig, AIType, Difficulty, LinePotentialEvaluator};
use tictactoe_engine::agent::{GameResult, HumanPlayer, MinimaxEngine, RandomPlayer};
use tictactoe_engine::game_repr::{Move, Outcome, Player, Position};
use tictactoe_engine::orchestrator::Orchestrator;
use tictactoe_engine::renderer::{NullRenderer, TextRenderer};

fn board(rows: &[&str]) -> Position {
    Position::from_rows(rows).unwrap()
}

/// Writer whose bytes stay readable after the renderer is boxed away
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Walk every sequence of opponent replies; the engine answers each one.
/// Returns the number of finished games.
fn explore(pos: &Position, to_move: Player, engine: &MinimaxEngine) -> usize {
    match pos.outcome() {
        Outcome::Winner(winner) => {
            assert_eq!(
                winner,
                engine.player(),
                "engine ({}) lost:\n{}",
                engine.player(),
                pos
            );
            return 1;
        }
        Outcome::Draw => return 1,
        Outcome::Ongoing => {}
    }

    if to_move == engine.player() {
        let mv = engine.get_best_move(pos).expect("engine must move on an open board");
        let next = pos.with_move(mv, to_move).expect("engine move must be legal");
        explore(&next, to_move.opposite(), engine)
    } else {
        pos.valid_moves()
            .into_iter()
            .map(|mv| {
                let next = pos.with_move(mv, to_move).unwrap();
                explore(&next, to_move.opposite(), engine)
            })
            .sum()
    }
}

#[test]
fn test_engine_second_never_loses_on_3x3() {
    let engine = MinimaxEngine::new(9);
    let games = explore(&Position::new(3), Player::A, &engine);

    println!("engine as X survived {} games", games);
    assert!(games > 0);
}

#[test]
fn test_engine_first_never_loses_on_3x3() {
    let engine = MinimaxEngine::new(9).with_player(Player::A).with_pruning(true);
    let games = explore(&Position::new(3), Player::A, &engine);

    println!("engine as O survived {} games", games);
    assert!(games > 0);
}

#[test]
fn test_empty_board_depth_three() {
    let engine = MinimaxEngine::new(3);
    let result = engine.search(&Position::new(3));

    let mv = result.best_move.unwrap();
    let corners_and_center = [(0, 0), (0, 2), (2, 0), (2, 2), (1, 1)];
    assert!(corners_and_center.contains(&(mv.row, mv.col)), "got {}", mv);
    assert_eq!(result.score, 0);
}

#[test]
fn test_engine_completes_own_row() {
    let pos = board(&["OO.", "...", "..."]);
    let engine = MinimaxEngine::new(3).with_player(Player::A);

    assert_eq!(engine.evaluate(&pos, 3, true), (100, Some(Move::new(0, 2))));
}

#[test]
fn test_full_board_has_no_move() {
    let pos = board(&["OXO", "OXX", "XOO"]);
    let engine = MinimaxEngine::new(5);

    assert_ne!(pos.outcome(), Outcome::Ongoing);
    assert!(pos.valid_moves().is_empty());
    assert_eq!(engine.get_best_move(&pos), None);
}

#[test]
fn test_search_is_deterministic() {
    let pos = board(&["O..X", ".X..", "..O.", "...."]);
    let engine = MinimaxEngine::new(4).with_evaluator(LinePotentialEvaluator);

    let first = engine.search(&pos);
    for _ in 0..3 {
        let again = engine.search(&pos);
        assert_eq!(again.best_move, first.best_move);
        assert_eq!(again.score, first.score);
        assert_eq!(again.nodes_searched, first.nodes_searched);
    }
}

#[test]
fn test_search_variants_agree() {
    let positions = [
        board(&["...", "...", "..."]),
        board(&["O..", ".X.", "..O"]),
        board(&["OX.", "...", "..."]),
        board(&["O..X", ".X..", "..O.", "...."]),
    ];

    for pos in &positions {
        let depth = if pos.size() == 3 { 9 } else { 4 };
        let plain = MinimaxEngine::new(depth).with_evaluator(LinePotentialEvaluator);
        let pruned = MinimaxEngine::new(depth)
            .with_pruning(true)
            .with_evaluator(LinePotentialEvaluator);

        let expected = plain.search(pos);
        let ab = pruned.search(pos);
        let par = plain.search_parallel(pos);

        assert_eq!((ab.score, ab.best_move), (expected.score, expected.best_move), "\n{}", pos);
        assert_eq!((par.score, par.best_move), (expected.score, expected.best_move), "\n{}", pos);
        assert!(ab.nodes_searched <= expected.nodes_searched);
    }
}

#[test]
fn test_expert_beats_or_draws_random_mover() {
    for seed in 0..10 {
        let mut game = Orchestrator::new(
            3,
            Box::new(RandomPlayer::new(Some(seed))),
            AIConfig::new(AIType::Minimax, Difficulty::Expert).create_player(Player::B),
            Box::new(NullRenderer),
        );

        let result = game.run().unwrap();
        assert_ne!(result, GameResult::Winner(Player::A), "seed {}", seed);
        assert_ne!(result, GameResult::Resigned(Player::B), "seed {}", seed);
    }
}

#[test]
fn test_engines_draw_each_other() {
    let ai = AIConfig {
        depth: Some(9),
        pruning: Some(true),
        ..AIConfig::default()
    };
    let mut game = Orchestrator::new(
        3,
        ai.create_player(Player::A),
        ai.create_player(Player::B),
        Box::new(NullRenderer),
    );

    assert_eq!(game.run().unwrap(), GameResult::Draw);
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_scripted_human_game_transcript() {
    let screen = SharedBuffer::default();
    let script = Cursor::new(b"1\n1\n".to_vec());
    let human = HumanPlayer::new(script, screen.clone(), "You".to_string());
    let mut game = Orchestrator::new(
        3,
        Box::new(human),
        AIConfig::new(AIType::Minimax, Difficulty::Medium).create_player(Player::B),
        Box::new(TextRenderer::new(screen.clone())),
    );

    game.start().unwrap();
    let result = game.run().unwrap();

    // The script runs dry on the second turn
    assert_eq!(result, GameResult::Resigned(Player::A));
    assert_eq!(game.history()[0], (Player::A, Move::new(1, 1)));

    let out = screen.contents();
    assert!(out.starts_with("\n  0 1 2\n0 . . .\n"));
    assert!(out.contains("Enter row (0-2): Enter column (0-2): "));
    assert!(out.contains("You (O) moves at position (1, 1)"));
    assert!(out.contains("You (O) to move"));
    assert!(out.contains("AI (Medium) is thinking..."));
    assert!(out.contains("AI (Medium) (X) moves at position"));
    assert!(out.contains("You (O) gave up. AI (Medium) (X) wins!"));
    assert!(out.ends_with("Game Over!\n"));
}
