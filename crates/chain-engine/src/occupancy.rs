//! Which piece stands on which square.

use crate::BoardMask;
use chain_core::{BoardPosition, GamePiece};
use std::collections::BTreeMap;

/// A mapping from board square to the piece standing on it.
///
/// Each square holds at most one piece, and a piece id stands on at most
/// one square: placing a piece that is already on the board moves it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Occupancy {
    squares: BTreeMap<BoardPosition, GamePiece>,
}

impl Occupancy {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `piece` on `pos`.
    ///
    /// Any earlier square held by the same piece id is vacated. Returns the
    /// piece previously standing on `pos`, if it was a different one.
    pub fn place(&mut self, pos: BoardPosition, piece: GamePiece) -> Option<GamePiece> {
        if let Some(old) = self.position_of(piece.id) {
            self.squares.remove(&old);
        }
        self.squares.insert(pos, piece)
    }

    /// Removes and returns the piece on `pos`.
    pub fn remove(&mut self, pos: BoardPosition) -> Option<GamePiece> {
        self.squares.remove(&pos)
    }

    /// Returns the piece on `pos`.
    pub fn get(&self, pos: BoardPosition) -> Option<&GamePiece> {
        self.squares.get(&pos)
    }

    /// Returns the piece on the square named by an `"x,y"` key.
    pub fn get_key(&self, key: &str) -> Option<&GamePiece> {
        BoardPosition::from_key(key).and_then(|pos| self.get(pos))
    }

    /// Returns true if a piece stands on `pos`.
    pub fn is_occupied(&self, pos: BoardPosition) -> bool {
        self.squares.contains_key(&pos)
    }

    /// Returns the square holding the piece with the given id.
    pub fn position_of(&self, id: &str) -> Option<BoardPosition> {
        self.squares
            .iter()
            .find(|(_, piece)| piece.id == id)
            .map(|(pos, _)| *pos)
    }

    /// Returns the occupied squares as a mask.
    pub fn mask(&self) -> BoardMask {
        self.squares.keys().copied().collect()
    }

    /// Iterates over `(square, piece)` pairs in square order.
    pub fn iter(&self) -> impl Iterator<Item = (BoardPosition, &GamePiece)> {
        self.squares.iter().map(|(pos, piece)| (*pos, piece))
    }

    /// Returns the number of pieces on the board.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Returns true if no pieces are on the board.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl FromIterator<(BoardPosition, GamePiece)> for Occupancy {
    fn from_iter<I: IntoIterator<Item = (BoardPosition, GamePiece)>>(iter: I) -> Self {
        let mut occupancy = Occupancy::new();
        for (pos, piece) in iter {
            occupancy.place(pos, piece);
        }
        occupancy
    }
}
