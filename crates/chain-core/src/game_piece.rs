//! Scored piece definitions.

use crate::{PieceColor, PieceType};
use serde::Serialize;

/// A piece as it exists in the catalog: movement type plus scoring values.
///
/// Pieces are defined once in a static table and handed around by value.
/// `multiplier` scales every piece that comes *after* this one in a chain,
/// never the piece itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GamePiece {
    /// Unique identifier, e.g. `"rook-blue"`.
    pub id: &'static str,
    /// Movement pattern.
    #[serde(rename = "type")]
    pub kind: PieceType,
    /// Cosmetic color.
    pub color: PieceColor,
    /// Base points awarded when the piece takes part in a chain.
    pub points: u32,
    /// Factor applied to the running multiplier for later pieces.
    pub multiplier: f64,
}

impl GamePiece {
    /// The enemy king: the fixed capture target of every round.
    ///
    /// Worth nothing and multiplies by one, so it never changes a score.
    pub const ENEMY_KING: GamePiece = GamePiece {
        id: "black-king",
        kind: PieceType::King,
        color: PieceColor::Black,
        points: 0,
        multiplier: 1.0,
    };

    /// Creates a piece definition.
    pub const fn new(
        id: &'static str,
        kind: PieceType,
        color: PieceColor,
        points: u32,
        multiplier: f64,
    ) -> Self {
        GamePiece {
            id,
            kind,
            color,
            points,
            multiplier,
        }
    }

    /// Returns the board symbol for this piece.
    pub const fn symbol(&self) -> char {
        self.kind.symbol()
    }
}

impl std::fmt::Display for GamePiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} {}, {} pts, x{})",
            self.id, self.color, self.kind, self.points, self.multiplier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_king_is_zero_value() {
        let king = GamePiece::ENEMY_KING;
        assert_eq!(king.kind, PieceType::King);
        assert_eq!(king.points, 0);
        assert_eq!(king.multiplier, 1.0);
    }

    #[test]
    fn display() {
        let piece = GamePiece::new("rook-red", PieceType::Rook, PieceColor::Red, 60, 1.0);
        assert_eq!(piece.to_string(), "rook-red (Red Rook, 60 pts, x1)");
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(GamePiece::ENEMY_KING).unwrap();
        assert_eq!(json["type"], "king");
        assert_eq!(json["color"], "black");
    }
}
