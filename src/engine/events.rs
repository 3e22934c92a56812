//! Observable engine events.
//!
//! Events are the engine's only output channel: every mutating call returns
//! the events it produced, in order. The rendering layer is expected to
//! apply them (or re-render from accessor snapshots) and nothing more - it
//! never mutates engine state directly.

use serde::{Deserialize, Serialize};

use crate::board::Tile;

/// An observable state change produced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh board was generated. Carries the full tile list in
    /// position order for rendering.
    BoardChanged {
        /// All tiles with their symbols and states.
        tiles: Vec<Tile>,
    },

    /// A tile was turned face up.
    TileRevealed {
        /// Position index of the revealed tile.
        index: usize,
    },

    /// Move and/or match counters changed.
    StatsChanged {
        /// Completed moves (two-tile reveals) so far.
        moves: u32,
        /// Matched pairs so far.
        matches: u32,
    },

    /// Two revealed tiles resolved as a matching pair.
    TilesMatched {
        /// Position index of the first tile of the pair.
        first: usize,
        /// Position index of the second tile of the pair.
        second: usize,
    },

    /// Two revealed tiles resolved as a mismatch and were hidden again.
    TilesHidden {
        /// Position index of the first tile of the pair.
        first: usize,
        /// Position index of the second tile of the pair.
        second: usize,
    },

    /// All pairs were matched; the session is over.
    Won {
        /// Final move count for the session.
        moves: u32,
    },
}
