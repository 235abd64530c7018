//! Text notation for positions, chains, and placements.
//!
//! - Position: `"x,y"`, the same form used as an occupancy key.
//! - Chain: positions separated by whitespace or `;`, e.g. `"0,0 0,2"`.
//! - Placement: a catalog piece id and a position joined by `@`,
//!   e.g. `"rook-blue@0,0"`.

use crate::{catalog, BoardPosition, GamePiece};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid position '{0}': expected 'x,y'")]
    InvalidPosition(String),

    #[error("position ({x},{y}) is off the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("unknown piece type '{0}'")]
    UnknownPieceType(String),

    #[error("unknown piece id '{0}'")]
    UnknownPiece(String),

    #[error("invalid placement '{0}': expected 'piece-id@x,y'")]
    InvalidPlacement(String),
}

/// Parses a position in `"x,y"` form.
pub fn parse_position(s: &str) -> Result<BoardPosition, NotationError> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| NotationError::InvalidPosition(s.to_string()))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|_| NotationError::InvalidPosition(s.to_string()))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|_| NotationError::InvalidPosition(s.to_string()))?;
    BoardPosition::from_signed(x, y).ok_or(NotationError::OutOfBounds { x, y })
}

/// Parses a chain of positions separated by whitespace or `;`.
///
/// An empty string is an empty chain.
pub fn parse_chain(s: &str) -> Result<Vec<BoardPosition>, NotationError> {
    s.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|part| !part.is_empty())
        .map(parse_position)
        .collect()
}

/// Formats a chain in the form accepted by [`parse_chain`].
pub fn format_chain(chain: &[BoardPosition]) -> String {
    chain
        .iter()
        .map(|p| p.key())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A catalog piece dropped on a square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub piece: &'static GamePiece,
    pub position: BoardPosition,
}

impl FromStr for Placement {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, position) = s
            .trim()
            .split_once('@')
            .ok_or_else(|| NotationError::InvalidPlacement(s.to_string()))?;
        let piece =
            catalog::find(id.trim()).ok_or_else(|| NotationError::UnknownPiece(id.to_string()))?;
        let position = parse_position(position)?;
        Ok(Placement { piece, position })
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.piece.id, self.position)
    }
}
