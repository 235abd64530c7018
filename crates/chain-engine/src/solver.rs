//! Exhaustive search over placements.
//!
//! Walks every legal drop order from a round's current state. Rounds hold
//! at most four pieces, so a plain depth-first search is enough.

use crate::round::Round;
use crate::scoring::ChainScore;
use chain_core::BoardPosition;

/// A completed chain found by [`solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Piece ids and squares in drop order, including pieces already placed.
    pub placements: Vec<(&'static str, BoardPosition)>,
    pub score: ChainScore,
}

impl Solution {
    /// Replays the placements on an empty copy of `round`'s board.
    pub fn replay(&self, round: &Round) -> Option<Round> {
        self.placements
            .iter()
            .try_fold(round.reset(), |r, &(id, pos)| r.place(id, pos).ok())
    }
}

/// Finds the highest-scoring way to finish `round`.
///
/// Ties keep the first chain found, trying pieces in hand order and
/// squares in index order. Returns `None` when the king cannot be reached.
pub fn solve(round: &Round) -> Option<Solution> {
    let mut best: Option<Solution> = None;
    search(round, &mut |done| {
        let score = done.potential_score();
        if best.as_ref().map_or(true, |b| score.points > b.score.points) {
            best = Some(Solution {
                placements: placements_of(done),
                score,
            });
        }
    });
    if let Some(found) = &best {
        tracing::debug!(points = found.score.points, pieces = found.placements.len(), "solved round");
    }
    best
}

/// Counts the distinct completed chains reachable from `round`.
pub fn count_solutions(round: &Round) -> u64 {
    let mut count = 0u64;
    search(round, &mut |_| count += 1);
    count
}

/// Counts solutions per first move, sorted by placement.
///
/// Useful for seeing which opening drop keeps the most options alive.
pub fn count_solutions_divide(round: &Round) -> Vec<((&'static str, BoardPosition), u64)> {
    let mut results = Vec::new();
    for (id, pos, next) in successors(round) {
        results.push(((id, pos), count_solutions(&next)));
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

fn search(round: &Round, visit: &mut dyn FnMut(&Round)) {
    if round.is_complete() {
        visit(round);
        return;
    }
    for (_, _, next) in successors(round) {
        search(&next, visit);
    }
}

fn successors(round: &Round) -> Vec<(&'static str, BoardPosition, Round)> {
    let targets = round.drop_targets();
    let mut out = Vec::new();
    for piece in round.available_pieces() {
        for pos in targets {
            if let Ok(next) = round.place(piece.id, pos) {
                out.push((piece.id, pos, next));
            }
        }
    }
    out
}

fn placements_of(round: &Round) -> Vec<(&'static str, BoardPosition)> {
    round
        .chain()
        .as_slice()
        .iter()
        .filter_map(|&pos| round.occupancy().get(pos).map(|piece| (piece.id, pos)))
        .collect()
}
