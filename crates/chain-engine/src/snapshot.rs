//! Saved rounds.
//!
//! A [`BoardSave`] records a board, the ids of the placed pieces in chain
//! order, and the chain itself. Pieces are stored by id and re-resolved
//! against the catalog on restore, so a save never carries piece stats.
//! Reading and writing files is left to the caller.

use crate::board::{BoardConfig, BoardError};
use crate::chain::CaptureChain;
use crate::round::Round;
use crate::Occupancy;
use chain_core::{catalog, BoardPosition};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when restoring a save.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("unknown piece id '{0}'")]
    UnknownPiece(String),

    #[error("save lists {pieces} pieces for {squares} chain squares")]
    LengthMismatch { pieces: usize, squares: usize },

    #[error("square {0} appears twice in the chain")]
    DuplicateSquare(BoardPosition),

    #[error("piece '{0}' appears twice in the chain")]
    DuplicatePiece(String),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

/// A serializable record of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSave {
    pub board_config: BoardConfig,
    /// Catalog ids of the placed pieces, in chain order.
    pub selected_pieces: Vec<String>,
    pub capture_chain: Vec<BoardPosition>,
    pub score: u64,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub name: String,
}

impl BoardSave {
    /// Records the state of `round`.
    pub fn capture(round: &Round, score: u64, name: impl Into<String>, timestamp: i64) -> Self {
        let chain = round.chain().as_slice();
        let selected_pieces = chain
            .iter()
            .filter_map(|&pos| round.occupancy().get(pos))
            .map(|piece| piece.id.to_string())
            .collect();
        BoardSave {
            board_config: round.board().clone(),
            selected_pieces,
            capture_chain: chain.to_vec(),
            score,
            timestamp,
            name: name.into(),
        }
    }

    /// Rebuilds the saved round.
    ///
    /// The i-th piece id is placed on the i-th chain square. The restored
    /// round's hand is exactly the placed pieces.
    pub fn restore(&self) -> Result<Round, SnapshotError> {
        self.board_config.validate()?;
        if self.selected_pieces.len() != self.capture_chain.len() {
            return Err(SnapshotError::LengthMismatch {
                pieces: self.selected_pieces.len(),
                squares: self.capture_chain.len(),
            });
        }

        let mut occupancy = Occupancy::new();
        let mut pieces = Vec::with_capacity(self.selected_pieces.len());
        for (id, &pos) in self.selected_pieces.iter().zip(&self.capture_chain) {
            let piece = *catalog::find(id).ok_or_else(|| SnapshotError::UnknownPiece(id.clone()))?;
            if occupancy.is_occupied(pos) {
                return Err(SnapshotError::DuplicateSquare(pos));
            }
            if occupancy.position_of(piece.id).is_some() {
                return Err(SnapshotError::DuplicatePiece(id.clone()));
            }
            occupancy.place(pos, piece);
            pieces.push(piece);
        }

        Ok(Round::from_parts(
            self.board_config.clone(),
            pieces,
            occupancy,
            CaptureChain::from(self.capture_chain.clone()),
        ))
    }
}
