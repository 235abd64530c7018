//! Named piece presets and the piece selector.
//!
//! Every round hands the player exactly [`PIECES_PER_ROUND`] pieces, either
//! from a named level or drawn from the catalog with the seeded stream.

use crate::board::BoardConfig;
use crate::rng::{random_seed, SeededRng};
use chain_core::{catalog, GamePiece, PieceColor, PieceType, CATALOG};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Number of pieces available in a round.
pub const PIECES_PER_ROUND: usize = 4;

/// Picks allowed before random selection stops and fills up in catalog order.
const MAX_SELECTION_ATTEMPTS: usize = 1000;

/// Errors for level definitions that cannot be used.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level '{level}' lists {count} pieces, expected 4")]
    WrongPieceCount { level: String, count: usize },

    #[error("level '{level}' references unknown piece '{piece}'")]
    UnknownPiece { level: String, piece: String },
}

/// A named, fixed set of pieces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Short identifier, e.g. `"queen-power"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Catalog ids of the pieces, in hand order.
    pub pieces: Vec<String>,
}

impl Level {
    /// Creates a level.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, pieces: &[&str]) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pieces: pieces.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Resolves the piece ids against the catalog.
    pub fn resolve(&self) -> Result<Vec<GamePiece>, LevelError> {
        if self.pieces.len() != PIECES_PER_ROUND {
            return Err(LevelError::WrongPieceCount {
                level: self.id.clone(),
                count: self.pieces.len(),
            });
        }
        self.pieces
            .iter()
            .map(|id| {
                catalog::find(id)
                    .copied()
                    .ok_or_else(|| LevelError::UnknownPiece {
                        level: self.id.clone(),
                        piece: id.clone(),
                    })
            })
            .collect()
    }
}

/// The collection of levels a player can choose from.
#[derive(Debug, Clone, Default)]
pub struct LevelBook {
    levels: Vec<Level>,
}

impl LevelBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book holding the built-in levels.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            levels: vec![
                Level::new(
                    "basic",
                    "Basic",
                    &["rook-blue", "bishop-green", "knight-purple", "queen-red"],
                ),
                Level::new(
                    "multiplier-focus",
                    "Multiplier Focus",
                    &["rook-red", "bishop-purple", "knight-green", "queen-blue"],
                ),
                Level::new(
                    "queen-power",
                    "Queen Power",
                    &["queen-blue", "queen-green", "queen-purple", "queen-red"],
                ),
                Level::new(
                    "knight-challenge",
                    "Knight Challenge",
                    &["knight-blue", "knight-green", "knight-purple", "knight-red"],
                ),
            ],
        }
    }

    /// Adds a level after checking it resolves. A level with the same id is replaced.
    pub fn add(&mut self, level: Level) -> Result<(), LevelError> {
        level.resolve()?;
        match self.levels.iter_mut().find(|l| l.id == level.id) {
            Some(existing) => *existing = level,
            None => self.levels.push(level),
        }
        Ok(())
    }

    /// Looks up a level by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    /// Returns all levels in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Level] {
        &self.levels
    }

    /// Returns the number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if the book has no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Chooses the pieces for a round.
    ///
    /// A known `level_id` yields that level's pieces. Anything else falls
    /// back to [`select_random_pieces`].
    pub fn select(
        &self,
        board: &BoardConfig,
        level_id: Option<&str>,
        seed: Option<&str>,
    ) -> Vec<GamePiece> {
        if let Some(id) = level_id {
            match self.get(id).map(Level::resolve) {
                Some(Ok(pieces)) => return pieces,
                Some(Err(e)) => tracing::warn!(level = id, error = %e, "level does not resolve"),
                None => tracing::debug!(level = id, "unknown level, selecting at random"),
            }
        }
        select_random_pieces(board, seed)
    }
}

/// Draws [`PIECES_PER_ROUND`] distinct catalog pieces.
///
/// The stream is seeded from `seed`, else the board's seed, else a fresh
/// one. The first two picks prefer types not yet drawn and the next two
/// prefer colors not yet drawn; when no piece satisfies the preference the
/// whole catalog is the pool.
pub fn select_random_pieces(board: &BoardConfig, seed: Option<&str>) -> Vec<GamePiece> {
    let seed = seed
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| board.seed.clone().filter(|s| !s.is_empty()))
        .unwrap_or_else(random_seed);
    let mut rng = SeededRng::new(&seed);

    let mut selected: Vec<GamePiece> = Vec::with_capacity(PIECES_PER_ROUND);
    let mut used_types: HashSet<PieceType> = HashSet::new();
    let mut used_colors: HashSet<PieceColor> = HashSet::new();

    let mut attempts = 0;
    while selected.len() < PIECES_PER_ROUND && attempts < MAX_SELECTION_ATTEMPTS {
        attempts += 1;

        let eligible: Vec<&GamePiece> = CATALOG
            .iter()
            .filter(|p| {
                if selected.len() < 2 {
                    !used_types.contains(&p.kind)
                } else {
                    !used_colors.contains(&p.color)
                }
            })
            .collect();
        let pool: Vec<&GamePiece> = if eligible.is_empty() {
            CATALOG.iter().collect()
        } else {
            eligible
        };

        let pick = *pool[rng.index(pool.len())];
        if !selected.iter().any(|p| p.id == pick.id) {
            used_types.insert(pick.kind);
            used_colors.insert(pick.color);
            selected.push(pick);
        }
    }

    if selected.len() < PIECES_PER_ROUND {
        tracing::warn!(seed = %seed, "random selection stalled, filling in catalog order");
        for piece in CATALOG.iter() {
            if selected.len() == PIECES_PER_ROUND {
                break;
            }
            if !selected.iter().any(|p| p.id == piece.id) {
                selected.push(*piece);
            }
        }
    }

    tracing::debug!(
        seed = %seed,
        pieces = ?selected.iter().map(|p| p.id).collect::<Vec<_>>(),
        "selected pieces"
    );
    selected
}
