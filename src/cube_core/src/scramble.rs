use fastrand::Rng;
use log::info;

use crate::{CubeState, Move, MoveSequence};

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// A uniformly random quarter turn.
pub fn random_move() -> Move {
    Move::ALL[fastrand::usize(..Move::ALL.len())]
}

/// A uniformly random quarter turn drawn from `rng`.
pub fn random_move_with(rng: &mut Rng) -> Move {
    Move::ALL[rng.usize(..Move::ALL.len())]
}

/// Draw `length` independent random moves and apply them to a solved cube.
///
/// Consecutive moves are not filtered, so a move may be directly followed by
/// its own inverse.
pub fn scramble(length: usize) -> (CubeState, Vec<Move>) {
    scramble_with(&mut Rng::new(), length)
}

/// Like [`scramble`] but reproducible from the state of `rng`.
pub fn scramble_with(rng: &mut Rng, length: usize) -> (CubeState, Vec<Move>) {
    let moves: Vec<Move> = (0..length).map(|_| random_move_with(rng)).collect();
    let state = CubeState::solved().apply_moves(&moves);
    info!("Scrambled with {}", MoveSequence(&moves));
    (state, moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_scramble() {
        let (state_a, moves_a) = scramble_with(&mut Rng::with_seed(7), 30);
        let (state_b, moves_b) = scramble_with(&mut Rng::with_seed(7), 30);
        assert_eq!(moves_a, moves_b);
        assert_eq!(state_a, state_b);
    }

    #[test]
    fn test_empty_scramble_is_solved() {
        let (state, moves) = scramble(0);
        assert!(moves.is_empty());
        assert!(state.is_solved());
    }

    #[test]
    fn test_random_move_covers_every_move() {
        let mut rng = Rng::with_seed(1);
        let mut seen = [false; 12];
        for _ in 0..1000 {
            let move_ = random_move_with(&mut rng);
            let index = Move::ALL.iter().position(|&m| m == move_).unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert!(Move::ALL.contains(&random_move()));
    }
}
