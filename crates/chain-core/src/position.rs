//! Board position representation.

use crate::NotationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the board. The board is always square.
pub const BOARD_SIZE: u8 = 5;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A square on the 5x5 board.
///
/// Squares are indexed row-major with `x` as the row:
/// - (0,0) = 0, (0,1) = 1, ..., (0,4) = 4
/// - (1,0) = 5, ..., (4,4) = 24
///
/// The derived ordering follows the index, so sorted collections of
/// positions read like the board from the top-left corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct BoardPosition {
    x: u8,
    y: u8,
}

/// Unchecked wire form of a position, validated on the way in.
#[derive(Deserialize)]
struct RawPosition {
    x: u8,
    y: u8,
}

impl TryFrom<RawPosition> for BoardPosition {
    type Error = NotationError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        BoardPosition::new(raw.x, raw.y).ok_or(NotationError::OutOfBounds {
            x: i32::from(raw.x),
            y: i32::from(raw.y),
        })
    }
}

impl BoardPosition {
    /// The four corner squares, in the order the board generator draws from.
    pub const CORNERS: [BoardPosition; 4] = [
        BoardPosition { x: 0, y: 0 },
        BoardPosition {
            x: 0,
            y: BOARD_SIZE - 1,
        },
        BoardPosition {
            x: BOARD_SIZE - 1,
            y: 0,
        },
        BoardPosition {
            x: BOARD_SIZE - 1,
            y: BOARD_SIZE - 1,
        },
    ];

    /// The central square.
    pub const CENTER: BoardPosition = BoardPosition {
        x: BOARD_SIZE / 2,
        y: BOARD_SIZE / 2,
    };

    /// Creates a position, returning `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(BoardPosition { x, y })
        } else {
            None
        }
    }

    /// Creates a position from signed coordinates, as produced by offset arithmetic.
    #[inline]
    pub const fn from_signed(x: i32, y: i32) -> Option<Self> {
        if x < 0 || y < 0 || x >= BOARD_SIZE as i32 || y >= BOARD_SIZE as i32 {
            None
        } else {
            Some(BoardPosition {
                x: x as u8,
                y: y as u8,
            })
        }
    }

    /// Creates a position from its index (0-24).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < SQUARE_COUNT {
            Some(BoardPosition {
                x: index / BOARD_SIZE,
                y: index % BOARD_SIZE,
            })
        } else {
            None
        }
    }

    /// Returns the row coordinate.
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the column coordinate.
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index (0-24).
    #[inline]
    pub const fn index(self) -> u8 {
        self.x * BOARD_SIZE + self.y
    }

    /// Returns the position shifted by `(dx, dy)`, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Self::from_signed(self.x as i32 + dx, self.y as i32 + dy)
    }

    /// Returns true for the four corner squares.
    pub const fn is_corner(self) -> bool {
        (self.x == 0 || self.x == BOARD_SIZE - 1) && (self.y == 0 || self.y == BOARD_SIZE - 1)
    }

    /// Manhattan distance between two positions.
    pub const fn manhattan_distance(self, other: BoardPosition) -> u8 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns the occupancy key (`"x,y"`).
    pub fn key(self) -> String {
        format!("{},{}", self.x, self.y)
    }

    /// Parses an occupancy key (`"x,y"`).
    pub fn from_key(key: &str) -> Option<Self> {
        let (x, y) = key.split_once(',')?;
        let x = x.trim().parse::<u8>().ok()?;
        let y = y.trim().parse::<u8>().ok()?;
        Self::new(x, y)
    }

    /// Iterates over every square in index order.
    pub fn all() -> impl Iterator<Item = BoardPosition> {
        (0..SQUARE_COUNT as u8).filter_map(BoardPosition::from_index)
    }
}

impl fmt::Debug for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardPosition({},{})", self.x, self.y)
    }
}

impl fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
