//! Core types for the capture-chain puzzle.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`BoardPosition`] and [`BOARD_SIZE`] for board coordinates
//! - [`PieceType`] and [`PieceColor`] for piece representation
//! - [`GamePiece`] and the static [`catalog`] of player pieces
//! - Text notation for positions, chains, and placements

pub mod catalog;
mod color;
mod game_piece;
mod notation;
mod piece;
mod position;

pub use catalog::CATALOG;
pub use color::PieceColor;
pub use game_piece::GamePiece;
pub use notation::{format_chain, parse_chain, parse_position, NotationError, Placement};
pub use piece::PieceType;
pub use position::{BoardPosition, BOARD_SIZE, SQUARE_COUNT};
