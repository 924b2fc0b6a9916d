//! Player that picks a uniformly random legal move.
//!
//! Used as the opponent in batch simulations. A fixed seed makes a whole
//! simulation reproducible.

use crate::agent::player::GamePlayer;
use crate::game_repr::{Move, Player, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    /// Seeded from the OS when `seed` is `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            name: "Random".to_string(),
        }
    }
}

impl GamePlayer for RandomPlayer {
    fn get_move(&mut self, position: &Position, _side: Player) -> Option<Move> {
        let legal_moves = position.valid_moves();
        if legal_moves.is_empty() {
            None
        } else {
            Some(legal_moves[self.rng.gen_range(0..legal_moves.len())])
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_moves_are_legal() {
        let mut player = RandomPlayer::new(Some(7));
        let pos = Position::from_rows(&["XO.", ".X.", "O.."]).unwrap();

        for _ in 0..50 {
            let mv = player.get_move(&pos, Player::A).unwrap();
            assert!(pos.is_valid_move(mv.row, mv.col));
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let pos = Position::new(4);
        let mut a = RandomPlayer::new(Some(42));
        let mut b = RandomPlayer::new(Some(42));

        for _ in 0..20 {
            assert_eq!(a.get_move(&pos, Player::A), b.get_move(&pos, Player::A));
        }
    }

    #[test]
    fn test_full_board_gives_none() {
        let mut player = RandomPlayer::new(None);
        let full = Position::from_rows(&["XOX", "XOO", "OXX"]).unwrap();

        assert_eq!(player.get_move(&full, Player::B), None);
    }
}
