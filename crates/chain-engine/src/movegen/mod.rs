//! Movement generation and the capture predicate.
//!
//! Movement is pure geometry. Occupancy never blocks a line: a rook on
//! (0,0) reaches (0,4) even with pieces on (0,1)..(0,3).

mod tables;

pub use tables::{king_moves, knight_moves};

use crate::BoardMask;
use chain_core::{BoardPosition, GamePiece, PieceType, BOARD_SIZE};

/// Returns every square sharing a row or column with `from`, excluding `from`.
pub fn rook_moves(from: BoardPosition) -> BoardMask {
    let mut moves = BoardMask::EMPTY;
    for i in 0..BOARD_SIZE {
        if i != from.x() {
            if let Some(pos) = BoardPosition::new(i, from.y()) {
                moves.set(pos);
            }
        }
        if i != from.y() {
            if let Some(pos) = BoardPosition::new(from.x(), i) {
                moves.set(pos);
            }
        }
    }
    moves
}

/// Returns every square on either diagonal through `from`, excluding `from`.
pub fn bishop_moves(from: BoardPosition) -> BoardMask {
    let reach = BOARD_SIZE as i32 - 1;
    let mut moves = BoardMask::EMPTY;
    for d in (-reach..=reach).filter(|&d| d != 0) {
        if let Some(pos) = from.offset(d, d) {
            moves.set(pos);
        }
        if let Some(pos) = from.offset(d, -d) {
            moves.set(pos);
        }
    }
    moves
}

/// Returns the squares a piece of the given type reaches from `from`.
///
/// The queen is not coded separately: it is the union of the rook and
/// bishop patterns from the same square.
pub fn moves_from(kind: PieceType, from: BoardPosition) -> BoardMask {
    match kind {
        PieceType::Rook => rook_moves(from),
        PieceType::Bishop => bishop_moves(from),
        PieceType::Knight => knight_moves(from),
        PieceType::Queen => moves_from(PieceType::Rook, from) | moves_from(PieceType::Bishop, from),
        PieceType::King => king_moves(from),
    }
}

/// Returns the squares a catalog piece reaches from `from`.
#[inline]
pub fn piece_moves(piece: &GamePiece, from: BoardPosition) -> BoardMask {
    moves_from(piece.kind, from)
}

/// Returns the moves for a piece type given by name.
///
/// An unrecognised name has no movement pattern and yields an empty mask.
pub fn moves_for_name(name: &str, from: BoardPosition) -> BoardMask {
    name.parse::<PieceType>()
        .map(|kind| moves_from(kind, from))
        .unwrap_or(BoardMask::EMPTY)
}

/// Returns true if `piece` standing on `from` can capture whatever is on `to`.
///
/// Whether `to` is actually occupied is the caller's concern.
#[inline]
pub fn can_capture(piece: &GamePiece, from: BoardPosition, to: BoardPosition) -> bool {
    piece_moves(piece, from).contains(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_core::catalog;

    fn pos(x: u8, y: u8) -> BoardPosition {
        BoardPosition::new(x, y).unwrap()
    }

    #[test]
    fn rook_moves_cover_row_and_column() {
        let moves = rook_moves(pos(0, 0));
        assert_eq!(moves.count(), 8);
        assert!(moves.contains(pos(0, 4)));
        assert!(moves.contains(pos(4, 0)));
        assert!(!moves.contains(pos(0, 0)));
        assert!(!moves.contains(pos(1, 1)));
    }

    #[test]
    fn bishop_moves_from_center_and_corner() {
        assert_eq!(bishop_moves(pos(2, 2)).count(), 8);
        let corner = bishop_moves(pos(0, 0));
        assert_eq!(corner.count(), 4);
        assert!(corner.contains(pos(4, 4)));
        let edge = bishop_moves(pos(0, 2));
        assert_eq!(edge.to_vec(), vec![pos(1, 1), pos(1, 3), pos(2, 0), pos(2, 4)]);
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let from = pos(1, 3);
        assert_eq!(
            moves_from(PieceType::Queen, from),
            rook_moves(from) | bishop_moves(from)
        );
        assert_eq!(moves_from(PieceType::Queen, pos(2, 2)).count(), 16);
    }

    #[test]
    fn unknown_name_has_no_moves() {
        assert!(moves_for_name("pawn", pos(2, 2)).is_empty());
        assert_eq!(moves_for_name("knight", pos(2, 2)).count(), 8);
    }

    #[test]
    fn can_capture_ignores_blockers() {
        let rook = catalog::find("rook-blue").unwrap();
        assert!(can_capture(rook, pos(0, 0), pos(0, 4)));
        assert!(!can_capture(rook, pos(0, 0), pos(1, 1)));
        assert!(!can_capture(rook, pos(0, 0), pos(0, 0)));
    }

    #[test]
    fn enemy_king_piece_uses_king_moves() {
        let king = GamePiece::ENEMY_KING;
        assert!(can_capture(&king, pos(2, 2), pos(3, 3)));
        assert!(!can_capture(&king, pos(2, 2), pos(4, 4)));
    }
}
