//! Random policy.

use super::super::{Board, BoardError, Position};
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks an empty square uniformly at random.
///
/// # Errors
///
/// Returns [`BoardError::EngineMisuse`] if the board has no empty square.
pub fn choose<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, BoardError> {
    board
        .empty_positions()
        .choose(rng)
        .copied()
        .ok_or_else(|| BoardError::EngineMisuse("no empty square to play".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Square};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_only_empty_squares_are_chosen() {
        let mut board = Board::new();
        for (i, mark) in [(0, Mark::X), (4, Mark::O), (8, Mark::X), (2, Mark::O)] {
            board.apply_move(i, mark).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<Position> = (0..200)
            .map(|_| choose(&board, &mut rng).unwrap())
            .collect();

        assert!(seen.iter().all(|&pos| board.is_empty(pos)));
        assert_eq!(seen.len(), 5, "every empty square should come up");
    }

    #[test]
    fn test_single_empty_square() {
        let mut squares = [Square::Occupied(Mark::X); 9];
        squares[5] = Square::Empty;
        let board = Board::from_squares(squares, Mark::O);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choose(&board, &mut rng), Ok(Position::MiddleRight));
    }

    #[test]
    fn test_full_board_is_misuse() {
        let board = Board::from_squares([Square::Occupied(Mark::O); 9], Mark::X);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(choose(&board, &mut rng), Err(BoardError::EngineMisuse(_))));
    }
}
