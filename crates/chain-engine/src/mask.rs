//! Board mask representation and operations.
//!
//! A board mask is a 25-bit set where each bit represents a square on the
//! 5x5 board. Move sets, missing squares, and drop targets are all masks.

use chain_core::{BoardPosition, BOARD_SIZE, SQUARE_COUNT};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set of board squares.
///
/// Bit `x * 5 + y` is set when square `(x, y)` is in the set. Bits above 24
/// are always clear.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoardMask(u32);

impl BoardMask {
    /// Empty mask (no squares set).
    pub const EMPTY: BoardMask = BoardMask(0);

    /// Full mask (all 25 squares set).
    pub const FULL: BoardMask = BoardMask((1u32 << SQUARE_COUNT) - 1);

    /// Creates a mask from raw bits, discarding anything above bit 24.
    #[inline]
    pub const fn new(bits: u32) -> Self {
        BoardMask(bits & Self::FULL.0)
    }

    /// Creates a mask with a single square set.
    #[inline]
    pub const fn from_position(pos: BoardPosition) -> Self {
        BoardMask(1u32 << pos.index())
    }

    /// Returns the raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of squares in the mask.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set.
    #[inline]
    pub const fn contains(self, pos: BoardPosition) -> bool {
        (self.0 & (1u32 << pos.index())) != 0
    }

    /// Sets the given square.
    #[inline]
    pub fn set(&mut self, pos: BoardPosition) {
        self.0 |= 1u32 << pos.index();
    }

    /// Clears the given square.
    #[inline]
    pub fn clear(&mut self, pos: BoardPosition) {
        self.0 &= !(1u32 << pos.index());
    }

    /// Returns a copy with the given square set.
    #[inline]
    pub const fn with(self, pos: BoardPosition) -> Self {
        BoardMask(self.0 | (1u32 << pos.index()))
    }

    /// Returns a copy with the given square cleared.
    #[inline]
    pub const fn without(self, pos: BoardPosition) -> Self {
        BoardMask(self.0 & !(1u32 << pos.index()))
    }

    /// Pops and returns the lowest-index square.
    #[inline]
    pub fn pop_first(&mut self) -> Option<BoardPosition> {
        if self.0 == 0 {
            None
        } else {
            let index = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            BoardPosition::from_index(index)
        }
    }

    /// Returns the squares as a vector in index order.
    pub fn to_vec(self) -> Vec<BoardPosition> {
        self.into_iter().collect()
    }
}

impl FromIterator<BoardPosition> for BoardMask {
    fn from_iter<I: IntoIterator<Item = BoardPosition>>(iter: I) -> Self {
        let mut mask = BoardMask::EMPTY;
        for pos in iter {
            mask.set(pos);
        }
        mask
    }
}

impl BitAnd for BoardMask {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        BoardMask(self.0 & rhs.0)
    }
}

impl BitAndAssign for BoardMask {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for BoardMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        BoardMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for BoardMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for BoardMask {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        BoardMask(!self.0 & Self::FULL.0)
    }
}

impl fmt::Debug for BoardMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BoardMask({:#09x})", self.0)?;
        for x in 0..BOARD_SIZE {
            write!(f, "{} ", x)?;
            for y in 0..BOARD_SIZE {
                let bit = x * BOARD_SIZE + y;
                if (self.0 >> bit) & 1 == 1 {
                    write!(f, "X ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  0 1 2 3 4")
    }
}

/// Iterator over set squares in a mask, lowest index first.
pub struct BoardMaskIter(BoardMask);

impl Iterator for BoardMaskIter {
    type Item = BoardPosition;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BoardMaskIter {}

impl IntoIterator for BoardMask {
    type Item = BoardPosition;
    type IntoIter = BoardMaskIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        BoardMaskIter(self)
    }
}
