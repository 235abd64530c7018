//! Capture chains and their validation.
//!
//! A chain is an ordered list of occupied squares. The piece on `chain[i]`
//! captures the piece on `chain[i + 1]`, and the piece on the last square
//! captures the enemy king, which is never itself part of the list.

use crate::movegen::can_capture;
use crate::Occupancy;
use chain_core::{BoardPosition, GamePiece};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed target of a round: the zero-value king on its square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyKing {
    pub position: BoardPosition,
    pub piece: GamePiece,
}

impl EnemyKing {
    /// Places the enemy king on `position`.
    pub const fn new(position: BoardPosition) -> Self {
        EnemyKing {
            position,
            piece: GamePiece::ENEMY_KING,
        }
    }

    /// Returns true if `attacker` standing on `from` can take the king.
    #[inline]
    pub fn is_capturable_by(&self, attacker: &GamePiece, from: BoardPosition) -> bool {
        can_capture(attacker, from, self.position)
    }
}

/// Reasons a chain fails validation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("chain has {0} entries, at least 2 are needed")]
    TooShort(usize),

    #[error("no piece on {0}")]
    Unoccupied(BoardPosition),

    #[error("piece on {from} cannot capture {to}")]
    CannotCapture {
        from: BoardPosition,
        to: BoardPosition,
    },

    #[error("piece on {0} cannot reach the king")]
    KingOutOfReach(BoardPosition),
}

/// Checks a chain, returning the first reason it fails.
///
/// Pairs are checked in order and the walk stops at the first failure.
pub fn check_chain(
    occupancy: &Occupancy,
    positions: &[BoardPosition],
    king: &EnemyKing,
) -> Result<(), ChainError> {
    if positions.len() < 2 {
        return Err(ChainError::TooShort(positions.len()));
    }

    for pair in positions.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let attacker = occupancy
            .get(current)
            .ok_or(ChainError::Unoccupied(current))?;
        if !occupancy.is_occupied(next) {
            return Err(ChainError::Unoccupied(next));
        }
        if !can_capture(attacker, current, next) {
            return Err(ChainError::CannotCapture {
                from: current,
                to: next,
            });
        }
    }

    // Length was checked above.
    let last = positions[positions.len() - 1];
    let finisher = occupancy.get(last).ok_or(ChainError::Unoccupied(last))?;
    if king.is_capturable_by(finisher, last) {
        Ok(())
    } else {
        Err(ChainError::KingOutOfReach(last))
    }
}

/// Returns true if the chain is a complete, winning capture sequence.
pub fn validate_chain(occupancy: &Occupancy, positions: &[BoardPosition], king: &EnemyKing) -> bool {
    check_chain(occupancy, positions, king).is_ok()
}

/// An ordered list of chain squares that only grows until it is reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptureChain(Vec<BoardPosition>);

impl CaptureChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a square.
    pub fn push(&mut self, pos: BoardPosition) {
        self.0.push(pos);
    }

    /// Returns a copy extended by one square.
    pub fn extended(&self, pos: BoardPosition) -> Self {
        let mut next = self.clone();
        next.push(pos);
        next
    }

    /// Returns the most recently added square.
    pub fn last(&self) -> Option<BoardPosition> {
        self.0.last().copied()
    }

    /// Returns the 0-based place of `pos` in the chain.
    pub fn index_of(&self, pos: BoardPosition) -> Option<usize> {
        self.0.iter().position(|&p| p == pos)
    }

    /// Returns the number of squares.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the squares in order.
    pub fn as_slice(&self) -> &[BoardPosition] {
        &self.0
    }

    /// Empties the chain.
    pub fn reset(&mut self) {
        self.0.clear();
    }
}

impl From<Vec<BoardPosition>> for CaptureChain {
    fn from(positions: Vec<BoardPosition>) -> Self {
        CaptureChain(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_core::catalog;

    fn pos(x: u8, y: u8) -> BoardPosition {
        BoardPosition::new(x, y).unwrap()
    }

    fn occupancy(entries: &[(BoardPosition, &str)]) -> Occupancy {
        entries
            .iter()
            .map(|(p, id)| (*p, *catalog::find(id).unwrap()))
            .collect()
    }

    #[test]
    fn short_chains_never_validate() {
        let occ = occupancy(&[(pos(0, 0), "rook-blue")]);
        let king = EnemyKing::new(pos(0, 2));
        assert_eq!(check_chain(&occ, &[], &king), Err(ChainError::TooShort(0)));
        assert_eq!(
            check_chain(&occ, &[pos(0, 0)], &king),
            Err(ChainError::TooShort(1))
        );
    }

    #[test]
    fn rook_then_bishop_takes_king() {
        let occ = occupancy(&[(pos(0, 0), "rook-blue"), (pos(0, 2), "bishop-green")]);
        assert!(validate_chain(
            &occ,
            &[pos(0, 0), pos(0, 2)],
            &EnemyKing::new(pos(2, 4))
        ));
    }

    #[test]
    fn king_off_the_diagonal() {
        let occ = occupancy(&[(pos(0, 0), "rook-blue"), (pos(0, 2), "bishop-green")]);
        assert_eq!(
            check_chain(&occ, &[pos(0, 0), pos(0, 2)], &EnemyKing::new(pos(2, 3))),
            Err(ChainError::KingOutOfReach(pos(0, 2)))
        );
    }

    #[test]
    fn unoccupied_entry_fails() {
        let occ = occupancy(&[(pos(0, 0), "rook-blue")]);
        assert_eq!(
            check_chain(&occ, &[pos(0, 0), pos(0, 3)], &EnemyKing::new(pos(3, 3))),
            Err(ChainError::Unoccupied(pos(0, 3)))
        );
        assert_eq!(
            check_chain(&occ, &[pos(1, 1), pos(0, 0)], &EnemyKing::new(pos(3, 3))),
            Err(ChainError::Unoccupied(pos(1, 1)))
        );
    }

    #[test]
    fn first_bad_link_is_reported() {
        let occ = occupancy(&[
            (pos(0, 0), "knight-blue"),
            (pos(0, 1), "rook-red"),
            (pos(4, 4), "queen-red"),
        ]);
        assert_eq!(
            check_chain(&occ, &[pos(0, 0), pos(0, 1), pos(4, 4)], &EnemyKing::new(pos(2, 2))),
            Err(ChainError::CannotCapture {
                from: pos(0, 0),
                to: pos(0, 1)
            })
        );
    }

    #[test]
    fn capture_chain_grows_and_resets() {
        let mut chain = CaptureChain::new();
        chain.push(pos(0, 0));
        let longer = chain.extended(pos(0, 2));
        assert_eq!(chain.len(), 1);
        assert_eq!(longer.as_slice(), &[pos(0, 0), pos(0, 2)]);
        assert_eq!(longer.last(), Some(pos(0, 2)));
        assert_eq!(longer.index_of(pos(0, 2)), Some(1));
        chain.reset();
        assert!(chain.is_empty());
    }
}
