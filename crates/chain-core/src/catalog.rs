//! The fixed, process-wide catalog of player pieces.
//!
//! Stronger pieces carry more points but smaller multipliers; the cheap
//! ones are worth placing early to boost what follows.

use crate::{GamePiece, PieceColor, PieceType};

/// Every piece a player can be handed, keyed by id.
///
/// Kings are deliberately absent: the king type is reserved for the enemy.
pub static CATALOG: [GamePiece; 16] = [
    GamePiece::new("rook-blue", PieceType::Rook, PieceColor::Blue, 50, 1.2),
    GamePiece::new("rook-green", PieceType::Rook, PieceColor::Green, 45, 1.3),
    GamePiece::new("rook-purple", PieceType::Rook, PieceColor::Purple, 55, 1.1),
    GamePiece::new("rook-red", PieceType::Rook, PieceColor::Red, 60, 1.0),
    GamePiece::new("bishop-blue", PieceType::Bishop, PieceColor::Blue, 35, 1.4),
    GamePiece::new("bishop-green", PieceType::Bishop, PieceColor::Green, 30, 1.5),
    GamePiece::new("bishop-purple", PieceType::Bishop, PieceColor::Purple, 40, 1.3),
    GamePiece::new("bishop-red", PieceType::Bishop, PieceColor::Red, 45, 1.2),
    GamePiece::new("knight-blue", PieceType::Knight, PieceColor::Blue, 40, 1.3),
    GamePiece::new("knight-green", PieceType::Knight, PieceColor::Green, 35, 1.4),
    GamePiece::new("knight-purple", PieceType::Knight, PieceColor::Purple, 45, 1.2),
    GamePiece::new("knight-red", PieceType::Knight, PieceColor::Red, 50, 1.1),
    GamePiece::new("queen-blue", PieceType::Queen, PieceColor::Blue, 80, 1.5),
    GamePiece::new("queen-green", PieceType::Queen, PieceColor::Green, 75, 1.7),
    GamePiece::new("queen-purple", PieceType::Queen, PieceColor::Purple, 85, 1.4),
    GamePiece::new("queen-red", PieceType::Queen, PieceColor::Red, 90, 2.0),
];

/// Looks up a catalog piece by id.
pub fn find(id: &str) -> Option<&'static GamePiece> {
    CATALOG.iter().find(|p| p.id == id)
}

/// Returns the catalog pieces of one type, in catalog order.
pub fn of_type(kind: PieceType) -> impl Iterator<Item = &'static GamePiece> {
    CATALOG.iter().filter(move |p| p.kind == kind)
}
