//! Piece color representation.
//!
//! Colors are cosmetic. They never affect movement, only how pieces are
//! drawn and how the random piece selector spreads its picks.

use serde::{Deserialize, Serialize};

/// The fixed palette of piece colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Blue,
    Green,
    Purple,
    Red,
    Black,
}

impl PieceColor {
    /// Colors available to player pieces. Black is kept for the enemy king.
    pub const PLAYER: [PieceColor; 4] = [
        PieceColor::Blue,
        PieceColor::Green,
        PieceColor::Purple,
        PieceColor::Red,
    ];

    /// Returns the lower-case name used in piece ids.
    pub const fn name(self) -> &'static str {
        match self {
            PieceColor::Blue => "blue",
            PieceColor::Green => "green",
            PieceColor::Purple => "purple",
            PieceColor::Red => "red",
            PieceColor::Black => "black",
        }
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceColor::Blue => write!(f, "Blue"),
            PieceColor::Green => write!(f, "Green"),
            PieceColor::Purple => write!(f, "Purple"),
            PieceColor::Red => write!(f, "Red"),
            PieceColor::Black => write!(f, "Black"),
        }
    }
}
