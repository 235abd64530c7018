//! Precomputed move tables for the fixed-offset pieces.

use crate::BoardMask;
use chain_core::{BoardPosition, BOARD_SIZE, SQUARE_COUNT};

/// Precomputed knight move tables.
const KNIGHT_MOVES: [BoardMask; SQUARE_COUNT] = compute_offset_table(&KNIGHT_OFFSETS);

/// Precomputed king move tables.
const KING_MOVES: [BoardMask; SQUARE_COUNT] = compute_offset_table(&KING_OFFSETS);

/// Knight offsets: (dx, dy).
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// King offsets: every unit step.
const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Returns knight moves from the given square.
#[inline]
pub fn knight_moves(from: BoardPosition) -> BoardMask {
    KNIGHT_MOVES[from.index() as usize]
}

/// Returns king moves from the given square.
#[inline]
pub fn king_moves(from: BoardPosition) -> BoardMask {
    KING_MOVES[from.index() as usize]
}

/// Computes an offset-pattern table for all squares at compile time.
const fn compute_offset_table(offsets: &[(i32, i32); 8]) -> [BoardMask; SQUARE_COUNT] {
    let size = BOARD_SIZE as i32;
    let mut table = [BoardMask::EMPTY; SQUARE_COUNT];
    let mut sq = 0;

    while sq < SQUARE_COUNT {
        let x = (sq as i32) / size;
        let y = (sq as i32) % size;
        let mut bits = 0u32;

        let mut i = 0;
        while i < offsets.len() {
            let tx = x + offsets[i].0;
            let ty = y + offsets[i].1;
            if tx >= 0 && tx < size && ty >= 0 && ty < size {
                bits |= 1u32 << (tx * size + ty);
            }
            i += 1;
        }

        table[sq] = BoardMask::new(bits);
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u8, y: u8) -> BoardPosition {
        BoardPosition::new(x, y).unwrap()
    }

    #[test]
    fn knight_move_counts() {
        assert_eq!(knight_moves(pos(0, 0)).count(), 2);
        assert_eq!(knight_moves(pos(0, 1)).count(), 3);
        assert_eq!(knight_moves(pos(1, 1)).count(), 4);
        assert_eq!(knight_moves(pos(2, 2)).count(), 8);
    }

    #[test]
    fn knight_moves_from_corner() {
        let moves = knight_moves(pos(0, 0));
        assert!(moves.contains(pos(1, 2)));
        assert!(moves.contains(pos(2, 1)));
    }

    #[test]
    fn king_move_counts() {
        assert_eq!(king_moves(pos(0, 0)).count(), 3);
        assert_eq!(king_moves(pos(0, 2)).count(), 5);
        assert_eq!(king_moves(pos(2, 2)).count(), 8);
    }
}
