//! # tilematch
//!
//! A tile-matching memory game engine: board generation, input gating,
//! match detection, scoring, and win detection.
//!
//! ## Design Principles
//!
//! 1. **Library-style**: The engine owns all game state and is driven by
//!    external UI events. The rendering layer reads derived state and
//!    reacts to returned [`engine::GameEvent`]s - it never mutates state.
//!
//! 2. **Deterministic where it matters**: Board shuffles come from a
//!    seedable ChaCha8 RNG, and the symbol subset per difficulty is a
//!    fixed catalog prefix. Same seed, same board.
//!
//! 3. **No stale-callback races**: Match resolution is deferred behind
//!    visual delays as generation-tagged scheduled tasks. Restarting or
//!    changing difficulty invalidates pending tasks, so a stale
//!    resolution can never corrupt a new session.
//!
//! ## Modules
//!
//! - `core`: Difficulty/grid configuration and RNG
//! - `symbols`: Symbol definitions and the fixed ordered catalog
//! - `board`: Tiles, tile state, board generation
//! - `engine`: Session, scheduler, events, and the `GameEngine` facade

pub mod board;
pub mod core;
pub mod engine;
pub mod symbols;

// Re-export commonly used types
pub use crate::core::{Difficulty, GameRng, GameRngState, GridConfig};

pub use crate::symbols::{SymbolCatalog, SymbolDefinition, SymbolId};

pub use crate::board::{Board, Tile, TileState};

pub use crate::engine::{
    GameEngine, GameEngineBuilder, GameEvent, Session, SessionStatus,
    MATCH_RESOLVE_DELAY, MISMATCH_RESOLVE_DELAY, WIN_SIGNAL_DELAY,
};
