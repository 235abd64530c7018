//! Chain scoring.
//!
//! Each piece scores its base points times the product of the multipliers
//! of every piece before it in the chain. Scoring never validates: an
//! unfinished chain is scored the same way to show potential points.

use crate::Occupancy;
use chain_core::BoardPosition;
use serde::Serialize;

/// One piece's contribution to a chain score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreStep {
    pub position: BoardPosition,
    pub piece_id: &'static str,
    /// Base points of the piece.
    pub points: u32,
    /// Running multiplier in effect when the piece scored.
    pub applied_multiplier: f64,
    /// `points * applied_multiplier`, unrounded.
    pub contribution: f64,
    /// The piece's own multiplier, passed on to later pieces.
    pub multiplier: f64,
}

/// The result of scoring a chain.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChainScore {
    /// Total, rounded to the nearest integer.
    pub points: u64,
    /// Per-piece multipliers in chain order, e.g. `"1.2x 1.5x 2"`.
    pub multiplier_trace: String,
    pub steps: Vec<ScoreStep>,
}

impl ChainScore {
    /// Returns the product of every multiplier in the chain.
    pub fn total_multiplier(&self) -> f64 {
        self.steps.iter().map(|step| step.multiplier).product()
    }
}

/// Scores the pieces standing on `positions`, in order.
///
/// Squares without a piece are skipped and add nothing to the trace.
pub fn score_chain(occupancy: &Occupancy, positions: &[BoardPosition]) -> ChainScore {
    let mut running = 1.0_f64;
    let mut total = 0.0_f64;
    let mut steps = Vec::with_capacity(positions.len());
    let mut multipliers = Vec::with_capacity(positions.len());

    for &position in positions {
        let Some(piece) = occupancy.get(position) else {
            continue;
        };
        let contribution = f64::from(piece.points) * running;
        total += contribution;
        steps.push(ScoreStep {
            position,
            piece_id: piece.id,
            points: piece.points,
            applied_multiplier: running,
            contribution,
            multiplier: piece.multiplier,
        });
        multipliers.push(piece.multiplier.to_string());
        running *= piece.multiplier;
    }

    ChainScore {
        points: total.round() as u64,
        multiplier_trace: multipliers.join("x "),
        steps,
    }
}
