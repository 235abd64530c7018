//! Rules engine for the capture-chain puzzle.
//!
//! This crate provides:
//! - [`BoardMask`] - 25-bit square set used for move and target sets
//! - Movement patterns for every piece type in [`movegen`]
//! - Chain validation ([`check_chain`], [`validate_chain`]) and scoring ([`score_chain`])
//! - Seeded board generation ([`generate_board`]) and piece selection ([`LevelBook`])
//! - [`Round`] and [`Session`] state for playing through puzzles
//! - [`BoardSave`] snapshots and an exhaustive [`solve`]r
//!
//! # Example
//!
//! ```
//! use chain_engine::{generate_board, Difficulty, LevelBook, Round, Session};
//!
//! let board = generate_board(Difficulty::Easy, Some("daily-1"));
//! let pieces = LevelBook::builtin().select(&board, Some("basic"), None);
//! let round = Round::new(board, pieces);
//!
//! let start = round.board().starting_square;
//! let round = round.place("rook-blue", start).unwrap();
//! println!("next targets: {:?}", round.drop_targets());
//!
//! if round.is_complete() {
//!     let outcome = Session::new().complete(&round).unwrap();
//!     println!("scored {}", outcome.score.points);
//! }
//! ```

mod board;
mod chain;
mod levels;
mod mask;
pub mod movegen;
mod occupancy;
mod rng;
mod round;
mod scoring;
mod snapshot;
mod solver;

pub use board::{generate_board, BoardConfig, BoardError, Difficulty};
pub use chain::{check_chain, validate_chain, CaptureChain, ChainError, EnemyKing};
pub use levels::{select_random_pieces, Level, LevelBook, LevelError, PIECES_PER_ROUND};
pub use mask::{BoardMask, BoardMaskIter};
pub use movegen::{can_capture, moves_for_name, piece_moves};
pub use occupancy::Occupancy;
pub use rng::{random_seed, SeededRng};
pub use round::{PlacementError, Round, RoundError, RoundOutcome, Session};
pub use scoring::{score_chain, ChainScore, ScoreStep};
pub use snapshot::{BoardSave, SnapshotError};
pub use solver::{count_solutions, count_solutions_divide, solve, Solution};
