//! Round and session state.
//!
//! A [`Round`] is one puzzle: a fixed board, four pieces, and the chain the
//! player is building. Rounds are values: [`Round::place`] returns a new
//! round and leaves the old one untouched, so a caller can keep history or
//! discard a bad move by simply dropping the result.
//!
//! A [`Session`] accumulates score and combo across completed rounds.

use crate::board::{generate_board, BoardConfig, Difficulty};
use crate::chain::{check_chain, validate_chain, CaptureChain, ChainError, EnemyKing};
use crate::levels::LevelBook;
use crate::movegen::piece_moves;
use crate::scoring::{score_chain, ChainScore};
use crate::{BoardMask, Occupancy};
use chain_core::{BoardPosition, GamePiece};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a piece cannot be dropped on a square.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("piece '{0}' is not part of this round")]
    NotInRound(String),

    #[error("piece '{0}' has already been placed")]
    AlreadyPlaced(String),

    #[error("the chain already captures the king")]
    ChainComplete,

    #[error("the first piece must go on the starting square {0}")]
    NotStartingSquare(BoardPosition),

    #[error("square {0} is missing")]
    MissingSquare(BoardPosition),

    #[error("square {0} holds the king")]
    KingSquare(BoardPosition),

    #[error("square {0} is already occupied")]
    Occupied(BoardPosition),

    #[error("piece on {from} cannot reach {to}")]
    OutOfReach {
        from: BoardPosition,
        to: BoardPosition,
    },
}

/// One puzzle in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    board: BoardConfig,
    king: EnemyKing,
    pieces: Vec<GamePiece>,
    occupancy: Occupancy,
    chain: CaptureChain,
}

impl Round {
    /// Starts an empty round on `board` with the given pieces in hand.
    pub fn new(board: BoardConfig, pieces: Vec<GamePiece>) -> Self {
        let king = board.king();
        Round {
            board,
            king,
            pieces,
            occupancy: Occupancy::new(),
            chain: CaptureChain::new(),
        }
    }

    /// Generates a board and picks its pieces from one seed.
    pub fn generate(
        difficulty: Difficulty,
        levels: &LevelBook,
        level_id: Option<&str>,
        seed: Option<&str>,
    ) -> Self {
        let board = generate_board(difficulty, seed);
        let pieces = levels.select(&board, level_id, None);
        Round::new(board, pieces)
    }

    /// Returns the board layout.
    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    /// Returns the enemy king.
    pub fn king(&self) -> &EnemyKing {
        &self.king
    }

    /// Returns every piece dealt for this round.
    pub fn pieces(&self) -> &[GamePiece] {
        &self.pieces
    }

    /// Returns the pieces not yet on the board.
    pub fn available_pieces(&self) -> impl Iterator<Item = &GamePiece> {
        self.pieces
            .iter()
            .filter(|p| self.occupancy.position_of(p.id).is_none())
    }

    /// Returns the board occupancy.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Returns the chain built so far.
    pub fn chain(&self) -> &CaptureChain {
        &self.chain
    }

    /// Returns true once the chain captures the king.
    pub fn is_complete(&self) -> bool {
        validate_chain(&self.occupancy, self.chain.as_slice(), &self.king)
    }

    /// Returns why the chain does not capture the king yet.
    pub fn check(&self) -> Result<(), ChainError> {
        check_chain(&self.occupancy, self.chain.as_slice(), &self.king)
    }

    /// Scores the chain as it stands.
    pub fn potential_score(&self) -> ChainScore {
        score_chain(&self.occupancy, self.chain.as_slice())
    }

    /// Returns the squares the next piece may be dropped on.
    pub fn drop_targets(&self) -> BoardMask {
        if self.is_complete() {
            return BoardMask::EMPTY;
        }
        let free = self.board.playable_mask() & !self.occupancy.mask();
        match self.chain.last() {
            None => free & BoardMask::from_position(self.board.starting_square),
            Some(last) => match self.occupancy.get(last) {
                Some(piece) => piece_moves(piece, last) & free,
                None => BoardMask::EMPTY,
            },
        }
    }

    /// Checks whether the piece with `id` may be dropped on `pos`.
    pub fn check_placement(&self, id: &str, pos: BoardPosition) -> Result<GamePiece, PlacementError> {
        let piece = *self
            .pieces
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PlacementError::NotInRound(id.to_string()))?;
        if self.occupancy.position_of(id).is_some() {
            return Err(PlacementError::AlreadyPlaced(id.to_string()));
        }
        if self.is_complete() {
            return Err(PlacementError::ChainComplete);
        }

        let Some(last) = self.chain.last() else {
            if pos != self.board.starting_square {
                return Err(PlacementError::NotStartingSquare(self.board.starting_square));
            }
            return self.check_square(pos).map(|()| piece);
        };

        self.check_square(pos)?;
        if self.occupancy.is_occupied(pos) {
            return Err(PlacementError::Occupied(pos));
        }
        let reachable = self
            .occupancy
            .get(last)
            .is_some_and(|attacker| piece_moves(attacker, last).contains(pos));
        if !reachable {
            return Err(PlacementError::OutOfReach { from: last, to: pos });
        }
        Ok(piece)
    }

    /// Rejects squares no piece may ever stand on.
    fn check_square(&self, pos: BoardPosition) -> Result<(), PlacementError> {
        if self.board.is_missing(pos) {
            return Err(PlacementError::MissingSquare(pos));
        }
        if pos == self.king.position {
            return Err(PlacementError::KingSquare(pos));
        }
        Ok(())
    }

    /// Drops the piece with `id` on `pos` and extends the chain.
    ///
    /// Returns the new round; `self` is unchanged.
    pub fn place(&self, id: &str, pos: BoardPosition) -> Result<Round, PlacementError> {
        let piece = self.check_placement(id, pos)?;
        let mut next = self.clone();
        next.occupancy.place(pos, piece);
        next.chain.push(pos);
        tracing::debug!(piece = id, square = %pos, chain = next.chain.len(), "placed piece");
        Ok(next)
    }

    /// Returns the same board and pieces with nothing placed.
    pub fn reset(&self) -> Round {
        Round::new(self.board.clone(), self.pieces.clone())
    }

    /// Rebuilds a round from already-placed pieces, bypassing the drop rules.
    pub(crate) fn from_parts(
        board: BoardConfig,
        pieces: Vec<GamePiece>,
        occupancy: Occupancy,
        chain: CaptureChain,
    ) -> Self {
        let king = board.king();
        Round {
            board,
            king,
            pieces,
            occupancy,
            chain,
        }
    }
}

/// Completing a round that does not capture the king.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("round is not complete: {0}")]
    Incomplete(#[from] ChainError),
}

/// Running totals across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Sum of completed round scores.
    pub score: u64,
    /// Number of completed rounds.
    pub combo: u32,
}

/// What completing a round produces.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub session: Session,
    /// Score of the round just completed.
    pub score: ChainScore,
    /// The same board, emptied for another attempt.
    pub next_round: Round,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Banks a finished round.
    pub fn complete(&self, round: &Round) -> Result<RoundOutcome, RoundError> {
        round.check()?;
        let score = round.potential_score();
        let session = Session {
            score: self.score + score.points,
            combo: self.combo + 1,
        };
        tracing::info!(
            points = score.points,
            trace = %score.multiplier_trace,
            total = session.score,
            combo = session.combo,
            "round complete"
        );
        Ok(RoundOutcome {
            session,
            score,
            next_round: round.reset(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_core::catalog;

    fn pos(x: u8, y: u8) -> BoardPosition {
        BoardPosition::new(x, y).unwrap()
    }

    fn test_round() -> Round {
        let board = BoardConfig {
            king_position: pos(2, 4),
            missing_squares: vec![pos(4, 4), pos(1, 0)],
            starting_square: pos(0, 0),
            seed: None,
        };
        let pieces = ["rook-blue", "bishop-green", "knight-purple", "queen-red"]
            .iter()
            .map(|id| *catalog::find(id).unwrap())
            .collect();
        Round::new(board, pieces)
    }

    #[test]
    fn first_piece_goes_on_starting_square() {
        let round = test_round();
        assert_eq!(round.drop_targets(), BoardMask::from_position(pos(0, 0)));
        assert_eq!(
            round.place("rook-blue", pos(0, 1)),
            Err(PlacementError::NotStartingSquare(pos(0, 0)))
        );
        assert!(round.place("rook-blue", pos(0, 0)).is_ok());
    }

    #[test]
    fn unplayable_starting_square_takes_no_piece() {
        let mut round = test_round();
        round.board.missing_squares.push(pos(0, 0));
        let round = Round::new(round.board, round.pieces);
        assert!(round.drop_targets().is_empty());
        assert_eq!(
            round.place("rook-blue", pos(0, 0)),
            Err(PlacementError::MissingSquare(pos(0, 0)))
        );

        let mut board = round.board.clone();
        board.missing_squares.clear();
        board.king_position = pos(0, 0);
        let round = Round::new(board, round.pieces);
        assert!(round.drop_targets().is_empty());
        assert_eq!(
            round.place("rook-blue", pos(0, 0)),
            Err(PlacementError::KingSquare(pos(0, 0)))
        );
    }

    #[test]
    fn place_returns_new_round() {
        let round = test_round();
        let next = round.place("rook-blue", pos(0, 0)).unwrap();
        assert!(round.chain().is_empty());
        assert_eq!(next.chain().as_slice(), &[pos(0, 0)]);
        assert_eq!(next.available_pieces().count(), 3);
    }

    #[test]
    fn later_pieces_follow_the_last_piece() {
        let round = test_round().place("rook-blue", pos(0, 0)).unwrap();
        let targets = round.drop_targets();
        // Rook row and column minus the missing (1,0).
        assert_eq!(targets.count(), 7);
        assert!(!targets.contains(pos(1, 0)));

        assert_eq!(
            round.place("bishop-green", pos(1, 1)),
            Err(PlacementError::OutOfReach {
                from: pos(0, 0),
                to: pos(1, 1)
            })
        );
        assert_eq!(
            round.place("bishop-green", pos(1, 0)),
            Err(PlacementError::MissingSquare(pos(1, 0)))
        );
        assert_eq!(
            round.place("rook-blue", pos(0, 2)),
            Err(PlacementError::AlreadyPlaced("rook-blue".to_string()))
        );
        assert_eq!(
            round.place("queen-blue", pos(0, 2)),
            Err(PlacementError::NotInRound("queen-blue".to_string()))
        );
    }

    #[test]
    fn king_square_is_never_a_target() {
        let round = test_round()
            .place("rook-blue", pos(0, 0))
            .and_then(|r| r.place("queen-red", pos(0, 4)))
            .unwrap();
        // The queen on (0,4) reaches the king on (2,4) already.
        assert!(round.is_complete());
        assert!(round.drop_targets().is_empty());
        assert_eq!(
            round.place("bishop-green", pos(1, 3)),
            Err(PlacementError::ChainComplete)
        );
    }

    #[test]
    fn occupied_and_king_squares_rejected() {
        let round = test_round()
            .place("rook-blue", pos(0, 0))
            .and_then(|r| r.place("knight-purple", pos(0, 1)))
            .unwrap();
        assert!(!round.is_complete());
        assert_eq!(
            round.place("bishop-green", pos(2, 4)),
            Err(PlacementError::KingSquare(pos(2, 4)))
        );
        assert_eq!(
            round.place("bishop-green", pos(0, 0)),
            Err(PlacementError::Occupied(pos(0, 0)))
        );
        assert_eq!(
            round.drop_targets().to_vec(),
            vec![pos(1, 3), pos(2, 0), pos(2, 2)]
        );
    }

    #[test]
    fn session_banks_complete_round() {
        let round = test_round()
            .place("rook-blue", pos(0, 0))
            .and_then(|r| r.place("bishop-green", pos(0, 2)))
            .unwrap();
        assert!(round.is_complete());

        let outcome = Session::new().complete(&round).unwrap();
        // 50 + 30 * 1.2
        assert_eq!(outcome.score.points, 86);
        assert_eq!(outcome.session, Session { score: 86, combo: 1 });
        assert!(outcome.next_round.chain().is_empty());
        assert!(outcome.next_round.occupancy().is_empty());
        assert_eq!(outcome.next_round.board(), round.board());
    }

    #[test]
    fn session_rejects_incomplete_round() {
        let round = test_round().place("rook-blue", pos(0, 0)).unwrap();
        assert_eq!(
            Session::new().complete(&round),
            Err(RoundError::Incomplete(ChainError::TooShort(1)))
        );
    }

    #[test]
    fn generated_round_is_reproducible() {
        let levels = LevelBook::builtin();
        let a = Round::generate(Difficulty::Hard, &levels, None, Some("round"));
        let b = Round::generate(Difficulty::Hard, &levels, None, Some("round"));
        assert_eq!(a, b);
        assert_eq!(a.pieces().len(), 4);
    }
}
