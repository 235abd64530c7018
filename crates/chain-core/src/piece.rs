//! Piece type representation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kinds of piece that can appear on the board.
///
/// `King` only ever appears as the enemy target; the player catalog holds
/// the other four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Rook,
    Bishop,
    Knight,
    Queen,
    King,
}

impl PieceType {
    /// All piece types in order.
    pub const ALL: [PieceType; 5] = [
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Piece types a player may place.
    pub const PLACEABLE: [PieceType; 4] = [
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Queen,
    ];

    /// Returns the lower-case name used in piece ids and config files.
    pub const fn name(self) -> &'static str {
        match self {
            PieceType::Rook => "rook",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }

    /// Returns the single-letter symbol used when drawing the board.
    pub const fn symbol(self) -> char {
        match self {
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// Returns true if a player may place this piece type.
    #[inline]
    pub const fn is_placeable(self) -> bool {
        !matches!(self, PieceType::King)
    }
}

impl FromStr for PieceType {
    type Err = crate::NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::NotationError::UnknownPieceType(s.to_string()))
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceType::Rook => "Rook",
            PieceType::Bishop => "Bishop",
            PieceType::Knight => "Knight",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        };
        write!(f, "{}", name)
    }
}
