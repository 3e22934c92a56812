//! Tiles and their per-tile state machine.
//!
//! Each tile moves through `Hidden -> Revealed -> Matched`, where a
//! mismatch cycles `Revealed` back to `Hidden`. `Matched` is terminal
//! for the lifetime of the board.

use serde::{Deserialize, Serialize};

use crate::symbols::SymbolId;

/// State of a single tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    /// Face down, symbol concealed.
    #[default]
    Hidden,
    /// Face up, awaiting its partner or mismatch resolution.
    Revealed,
    /// Permanently face up as part of a resolved pair.
    Matched,
}

/// One grid cell hiding a symbol.
///
/// The position index is 0-based and row-major within the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Position index within the board.
    pub index: usize,

    /// The symbol this tile hides.
    pub symbol: SymbolId,

    /// Current tile state.
    pub state: TileState,
}

impl Tile {
    /// Create a new hidden tile.
    #[must_use]
    pub const fn new(index: usize, symbol: SymbolId) -> Self {
        Self {
            index,
            symbol,
            state: TileState::Hidden,
        }
    }

    /// Check whether the tile is face down.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == TileState::Hidden
    }

    /// Check whether the tile is face up but not yet matched.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == TileState::Revealed
    }

    /// Check whether the tile belongs to a resolved pair.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == TileState::Matched
    }
}
