//! Per-round board layout and its seeded generator.

use crate::chain::EnemyKing;
use crate::rng::{seed_or_random, SeededRng};
use crate::BoardMask;
use chain_core::{BoardPosition, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Draws allowed per missing square before that square is given up.
const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Errors for board layouts that cannot be played.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("unknown difficulty '{0}': expected easy, medium, or hard")]
    UnknownDifficulty(String),

    #[error("king square {0} is marked missing")]
    KingOnMissingSquare(BoardPosition),

    #[error("starting square {0} is marked missing")]
    StartOnMissingSquare(BoardPosition),

    #[error("starting square {0} is the king's square")]
    StartOnKing(BoardPosition),
}

/// How crowded with missing squares a generated board is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Inclusive range for the number of missing squares.
    pub const fn missing_range(self) -> (i32, i32) {
        match self {
            Difficulty::Easy => (3, 5),
            Difficulty::Medium => (5, 8),
            Difficulty::Hard => (8, 12),
        }
    }

    /// Returns the lower-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BoardError::UnknownDifficulty(s.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed layout of one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfig {
    /// Square of the enemy king.
    pub king_position: BoardPosition,
    /// Squares that cannot be used this round.
    pub missing_squares: Vec<BoardPosition>,
    /// The only square the first piece may go on.
    pub starting_square: BoardPosition,
    /// Seed the layout was generated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
}

impl BoardConfig {
    /// Returns the enemy king for this layout.
    pub const fn king(&self) -> EnemyKing {
        EnemyKing::new(self.king_position)
    }

    /// Returns the missing squares as a mask.
    pub fn missing_mask(&self) -> BoardMask {
        self.missing_squares.iter().copied().collect()
    }

    /// Returns true if `pos` is a missing square.
    pub fn is_missing(&self, pos: BoardPosition) -> bool {
        self.missing_squares.contains(&pos)
    }

    /// Returns every square a piece could ever stand on.
    pub fn playable_mask(&self) -> BoardMask {
        !self.missing_mask() & !BoardMask::from_position(self.king_position)
    }

    /// Checks that the layout is playable.
    ///
    /// Generated layouts always pass; this guards layouts read back from
    /// saved files.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.is_missing(self.king_position) {
            return Err(BoardError::KingOnMissingSquare(self.king_position));
        }
        if self.is_missing(self.starting_square) {
            return Err(BoardError::StartOnMissingSquare(self.starting_square));
        }
        if self.starting_square == self.king_position {
            return Err(BoardError::StartOnKing(self.starting_square));
        }
        Ok(())
    }
}

/// Generates a board layout.
///
/// The same seed and difficulty always produce the same layout. Without a
/// seed, a fresh one is drawn and recorded in the result.
pub fn generate_board(difficulty: Difficulty, seed: Option<&str>) -> BoardConfig {
    let seed = seed_or_random(seed);
    let mut rng = SeededRng::new(&seed);
    let last = BOARD_SIZE as i32 - 1;

    let (min_missing, max_missing) = difficulty.missing_range();
    let missing_count = rng.int_range(min_missing, max_missing);

    let king_x = rng.int_range(1, last - 1);
    let king_y = rng.int_range(1, last - 1);
    let king_position = BoardPosition::from_signed(king_x, king_y)
        .filter(|p| !p.is_corner())
        .unwrap_or(BoardPosition::CENTER);

    let starting_square = BoardPosition::CORNERS[rng.index(BoardPosition::CORNERS.len())];

    let mut missing_squares: Vec<BoardPosition> = Vec::with_capacity(missing_count as usize);
    for _ in 0..missing_count {
        let mut placed = None;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let x = rng.int_range(0, last);
            let y = rng.int_range(0, last);
            let Some(candidate) = BoardPosition::from_signed(x, y) else {
                continue;
            };
            let blocked = candidate == king_position
                || candidate == starting_square
                || missing_squares.contains(&candidate)
                || (difficulty == Difficulty::Hard
                    && candidate.manhattan_distance(king_position) < 2);
            if !blocked {
                placed = Some(candidate);
                break;
            }
        }
        match placed {
            Some(square) => missing_squares.push(square),
            None => tracing::warn!(
                seed = %seed,
                placed = missing_squares.len(),
                "gave up placing a missing square"
            ),
        }
    }

    tracing::debug!(
        seed = %seed,
        %difficulty,
        king = %king_position,
        start = %starting_square,
        missing = missing_squares.len(),
        "generated board"
    );

    BoardConfig {
        king_position,
        missing_squares,
        starting_square,
        seed: Some(seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_board() {
        for difficulty in Difficulty::ALL {
            let a = generate_board(difficulty, Some("reproducible"));
            let b = generate_board(difficulty, Some("reproducible"));
            assert_eq!(a, b);
            assert_eq!(a.seed.as_deref(), Some("reproducible"));
        }
    }

    #[test]
    fn unseeded_board_records_its_seed() {
        let board = generate_board(Difficulty::Medium, None);
        let seed = board.seed.clone().unwrap();
        assert_eq!(generate_board(Difficulty::Medium, Some(&seed)), board);
    }

    #[test]
    fn generated_boards_respect_constraints() {
        for i in 0..200 {
            for difficulty in Difficulty::ALL {
                let seed = format!("seed-{}", i);
                let board = generate_board(difficulty, Some(&seed));
                let (min, max) = difficulty.missing_range();

                assert!(!board.king_position.is_corner());
                assert!(board.starting_square.is_corner());
                assert!(board.missing_squares.len() <= max as usize);
                assert!(board.missing_squares.len() >= min as usize);
                assert_eq!(board.missing_mask().count() as usize, board.missing_squares.len());
                assert!(board.validate().is_ok());

                if difficulty == Difficulty::Hard {
                    assert!(board
                        .missing_squares
                        .iter()
                        .all(|m| m.manhattan_distance(board.king_position) >= 2));
                }
            }
        }
    }

    #[test]
    fn validate_rejects_unplayable_layouts() {
        let p = |x, y| BoardPosition::new(x, y).unwrap();
        let mut board = BoardConfig {
            king_position: p(2, 2),
            missing_squares: vec![p(2, 2)],
            starting_square: p(0, 0),
            seed: None,
        };
        assert_eq!(board.validate(), Err(BoardError::KingOnMissingSquare(p(2, 2))));

        board.missing_squares = vec![p(0, 0)];
        assert_eq!(board.validate(), Err(BoardError::StartOnMissingSquare(p(0, 0))));

        board.missing_squares.clear();
        board.starting_square = p(2, 2);
        assert_eq!(board.validate(), Err(BoardError::StartOnKing(p(2, 2))));
    }

    #[test]
    fn playable_mask_excludes_king_and_missing() {
        let p = |x, y| BoardPosition::new(x, y).unwrap();
        let board = BoardConfig {
            king_position: p(1, 1),
            missing_squares: vec![p(3, 3), p(4, 0)],
            starting_square: p(0, 0),
            seed: None,
        };
        let playable = board.playable_mask();
        assert_eq!(playable.count(), 22);
        assert!(!playable.contains(p(1, 1)));
        assert!(!playable.contains(p(3, 3)));
        assert!(playable.contains(p(0, 0)));
    }

    #[test]
    fn difficulty_parsing() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn board_config_json_shape() {
        let board = generate_board(Difficulty::Easy, Some("json"));
        let json = serde_json::to_value(&board).unwrap();
        assert!(json.get("kingPosition").is_some());
        assert!(json.get("missingSquares").is_some());
        assert!(json.get("startingSquare").is_some());
        assert_eq!(json["seed"], "json");
    }
}
