//! Difficulty levels and grid configuration.
//!
//! Each difficulty maps to a fixed grid: easy is 3×4 (6 pairs), hard is
//! 4×6 (12 pairs). The mapping never changes mid-session - a new board is
//! generated whole from the difficulty in effect at start time.

use serde::{Deserialize, Serialize};

/// Board difficulty level.
///
/// Determines the grid dimensions and pair count used for the next board
/// generation. The symbol subset for a difficulty is always the catalog
/// prefix of length `pairs`, so difficulty-to-symbol mapping is
/// deterministic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// 3×4 grid, 6 pairs.
    #[default]
    Easy,
    /// 4×6 grid, 12 pairs.
    Hard,
}

impl Difficulty {
    /// Parse a difficulty from its textual level name.
    ///
    /// Returns `None` for unrecognized levels; callers treat that as a
    /// silent no-op rather than an error.
    #[must_use]
    pub fn parse(level: &str) -> Option<Self> {
        match level {
            "easy" => Some(Self::Easy),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Get the level name as used by the UI layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }

    /// Get the grid configuration for this difficulty.
    #[must_use]
    pub const fn grid(self) -> GridConfig {
        match self {
            Self::Easy => GridConfig { rows: 3, cols: 4, pairs: 6 },
            Self::Hard => GridConfig { rows: 4, cols: 6, pairs: 12 },
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grid dimensions and pair count for one difficulty.
///
/// Invariant: `rows * cols == 2 * pairs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// Number of symbol pairs hidden in the grid.
    pub pairs: usize,
}

impl GridConfig {
    /// Total number of tiles in the grid.
    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.rows * self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Difficulty::parse("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("medium"), None);
        assert_eq!(Difficulty::parse(""), None);
        assert_eq!(Difficulty::parse("EASY"), None);
    }

    #[test]
    fn test_display_round_trips() {
        for d in [Difficulty::Easy, Difficulty::Hard] {
            assert_eq!(Difficulty::parse(&d.to_string()), Some(d));
        }
    }

    #[test]
    fn test_grid_dimensions() {
        let easy = Difficulty::Easy.grid();
        assert_eq!((easy.rows, easy.cols, easy.pairs), (3, 4, 6));

        let hard = Difficulty::Hard.grid();
        assert_eq!((hard.rows, hard.cols, hard.pairs), (4, 6, 12));
    }

    #[test]
    fn test_grid_invariant() {
        for d in [Difficulty::Easy, Difficulty::Hard] {
            let grid = d.grid();
            assert_eq!(grid.rows * grid.cols, 2 * grid.pairs);
            assert_eq!(grid.tile_count(), 2 * grid.pairs);
        }
    }

    #[test]
    fn test_default_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }
}
