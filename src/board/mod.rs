//! Board generation and tile storage.
//!
//! A board is generated whole at session start: the catalog prefix for the
//! difficulty is duplicated into pairs and the resulting multiset is
//! shuffled with Fisher-Yates. Boards are never resized or partially
//! regenerated - difficulty changes take effect at the next generation.

pub mod tile;

pub use tile::{Tile, TileState};

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GridConfig};
use crate::symbols::{SymbolCatalog, SymbolId};

/// An ordered sequence of tiles arranged row-major in `rows × cols`.
///
/// Invariant: `tiles.len() == grid.tile_count()` and every symbol on the
/// board appears on exactly two tiles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    grid: GridConfig,
    tiles: Vec<Tile>,
}

impl Board {
    /// Generate a freshly shuffled board.
    ///
    /// Selects the first `grid.pairs` symbols from the catalog in order,
    /// duplicates them into pairs, and shuffles the full multiset uniformly.
    ///
    /// Panics if the catalog holds fewer than `grid.pairs` symbols.
    #[must_use]
    pub fn generate(catalog: &SymbolCatalog, grid: GridConfig, rng: &mut GameRng) -> Self {
        let selected = catalog.select_prefix(grid.pairs);

        let mut symbols: Vec<SymbolId> = Vec::with_capacity(grid.tile_count());
        symbols.extend(selected.iter().map(|s| s.id));
        symbols.extend(selected.iter().map(|s| s.id));
        rng.shuffle(&mut symbols);

        let tiles = symbols
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| Tile::new(index, symbol))
            .collect();

        Self { grid, tiles }
    }

    /// Get the grid configuration.
    #[must_use]
    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    /// Get the number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the board holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Get a tile by position index.
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Get a mutable tile by position index.
    pub(crate) fn tile_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    /// Iterate over all tiles in position order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Check whether every tile has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.tiles.iter().all(Tile::is_matched)
    }

    /// Find the position indices of both tiles hiding `symbol`.
    ///
    /// Useful for tests and hint features. Returns `None` if the symbol
    /// is not on the board.
    #[must_use]
    pub fn positions_of(&self, symbol: SymbolId) -> Option<(usize, usize)> {
        let mut found = self.tiles.iter().filter(|t| t.symbol == symbol);
        let first = found.next()?.index;
        let second = found.next()?.index;
        Some((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use rustc_hash::FxHashMap;

    fn generate(difficulty: Difficulty, seed: u64) -> Board {
        let catalog = SymbolCatalog::standard();
        let mut rng = GameRng::new(seed);
        Board::generate(&catalog, difficulty.grid(), &mut rng)
    }

    #[test]
    fn test_generate_easy_dimensions() {
        let board = generate(Difficulty::Easy, 42);
        assert_eq!(board.len(), 12);
        assert_eq!(board.grid().pairs, 6);
        assert!(!board.is_empty());
    }

    #[test]
    fn test_generate_hard_dimensions() {
        let board = generate(Difficulty::Hard, 42);
        assert_eq!(board.len(), 24);
        assert_eq!(board.grid().pairs, 12);
    }

    #[test]
    fn test_every_symbol_appears_twice() {
        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            let board = generate(difficulty, 99);
            let mut counts: FxHashMap<SymbolId, usize> = FxHashMap::default();
            for tile in board.iter() {
                *counts.entry(tile.symbol).or_insert(0) += 1;
            }
            assert_eq!(counts.len(), difficulty.grid().pairs);
            assert!(counts.values().all(|&c| c == 2));
        }
    }

    #[test]
    fn test_symbols_are_catalog_prefix() {
        let board = generate(Difficulty::Easy, 3);
        for tile in board.iter() {
            assert!((1..=6).contains(&tile.symbol.raw()));
        }
    }

    #[test]
    fn test_tiles_start_hidden_with_sequential_indices() {
        let board = generate(Difficulty::Easy, 1);
        for (expect, tile) in board.iter().enumerate() {
            assert_eq!(tile.index, expect);
            assert!(tile.is_hidden());
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = generate(Difficulty::Hard, 1234);
        let b = generate(Difficulty::Hard, 1234);
        let syms_a: Vec<_> = a.iter().map(|t| t.symbol).collect();
        let syms_b: Vec<_> = b.iter().map(|t| t.symbol).collect();
        assert_eq!(syms_a, syms_b);
    }

    #[test]
    fn test_positions_of() {
        let board = generate(Difficulty::Easy, 5);
        let (first, second) = board.positions_of(SymbolId::new(3)).unwrap();
        assert_ne!(first, second);
        assert_eq!(board.tile(first).unwrap().symbol, SymbolId::new(3));
        assert_eq!(board.tile(second).unwrap().symbol, SymbolId::new(3));

        // Symbol 7 is outside the easy prefix
        assert!(board.positions_of(SymbolId::new(7)).is_none());
    }

    #[test]
    fn test_all_matched() {
        let mut board = generate(Difficulty::Easy, 2);
        assert!(!board.all_matched());
        for i in 0..board.len() {
            board.tile_mut(i).unwrap().state = TileState::Matched;
        }
        assert!(board.all_matched());
    }
}
