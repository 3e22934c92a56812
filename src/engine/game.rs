//! The engine facade consumed by the UI layer.
//!
//! `GameEngine` owns the session, the RNG, and the scheduler, and exposes
//! the full input surface: difficulty selection, start/restart, tile
//! activation, and clock advancement. Invalid inputs are silent no-ops
//! (they return no events and change no state), matching the behavior a
//! rendering layer expects from defensive input gating.
//!
//! ## Example
//!
//! ```
//! use tilematch::engine::{GameEngine, GameEvent, MATCH_RESOLVE_DELAY};
//!
//! let mut engine = GameEngine::new(42);
//! let events = engine.start();
//! assert!(matches!(events[0], GameEvent::BoardChanged { .. }));
//!
//! // Reveal a known pair (tests can look the positions up on the board)
//! let symbol = engine.board().unwrap().tile(0).unwrap().symbol;
//! let (first, second) = engine.board().unwrap().positions_of(symbol).unwrap();
//! engine.activate(first);
//! engine.activate(second);
//!
//! // Resolution is deferred behind the visual delay
//! let events = engine.advance(MATCH_RESOLVE_DELAY);
//! assert!(events.contains(&GameEvent::TilesMatched { first, second }));
//! ```

use std::time::Duration;

use crate::board::Board;
use crate::core::{Difficulty, GameRng, GameRngState};
use crate::symbols::SymbolCatalog;

use super::events::GameEvent;
use super::schedule::{
    Scheduler, TaskKind, MATCH_RESOLVE_DELAY, MISMATCH_RESOLVE_DELAY, WIN_SIGNAL_DELAY,
};
use super::session::{Session, SessionStatus};

/// Tile-matching game engine.
///
/// Exclusively owns all mutable game state; the rendering layer only
/// reads derived state and feeds in input events.
#[derive(Clone, Debug)]
pub struct GameEngine {
    catalog: SymbolCatalog,
    difficulty: Difficulty,
    rng: GameRng,
    session: Option<Session>,
    scheduler: Scheduler,
}

/// Builder for a [`GameEngine`].
pub struct GameEngineBuilder {
    catalog: SymbolCatalog,
    difficulty: Difficulty,
    seed: Option<u64>,
}

impl Default for GameEngineBuilder {
    fn default() -> Self {
        Self {
            catalog: SymbolCatalog::standard(),
            difficulty: Difficulty::Easy,
            seed: None,
        }
    }
}

impl GameEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom symbol catalog instead of the standard 12 symbols.
    ///
    /// The catalog must hold at least as many symbols as the largest
    /// difficulty needs pairs.
    #[must_use]
    pub fn catalog(mut self, catalog: SymbolCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Set the initial difficulty.
    #[must_use]
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Seed the RNG for reproducible boards.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the engine. Unseeded builders draw from system entropy.
    #[must_use]
    pub fn build(self) -> GameEngine {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        GameEngine {
            catalog: self.catalog,
            difficulty: self.difficulty,
            rng,
            session: None,
            scheduler: Scheduler::new(),
        }
    }
}

impl GameEngine {
    /// Create an engine with the standard catalog, easy difficulty, and
    /// the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        GameEngineBuilder::new().seed(seed).build()
    }

    /// Create an engine seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        GameEngineBuilder::new().build()
    }

    // === Inputs ===

    /// Select the difficulty for the next board generation.
    ///
    /// The in-progress board (if any) is left intact - confirming a
    /// destructive change and calling [`restart`](Self::restart) is the
    /// UI's job. Any pending resolution is cancelled so a stale task
    /// cannot leak into the next session.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty == self.difficulty {
            return;
        }
        self.difficulty = difficulty;
        self.scheduler.invalidate();
    }

    /// Start a session: generate a freshly shuffled board and reset all
    /// counters. Cancels any pending resolution from a prior session.
    pub fn start(&mut self) -> Vec<GameEvent> {
        self.scheduler.invalidate();

        let board = Board::generate(&self.catalog, self.difficulty.grid(), &mut self.rng);
        let session = Session::new(self.difficulty, board);
        let tiles: Vec<_> = session.board().iter().copied().collect();
        self.session = Some(session);

        vec![
            GameEvent::BoardChanged { tiles },
            GameEvent::StatsChanged { moves: 0, matches: 0 },
        ]
    }

    /// Restart with the current difficulty.
    ///
    /// Equivalent to [`start`](Self::start): fresh shuffle, counters
    /// reset, win state cleared.
    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.start()
    }

    /// Activate the tile at `index`.
    ///
    /// Silent no-op when the session is not in progress, input is locked
    /// mid-resolution, the index is out of range, or the tile is already
    /// revealed or matched. Otherwise reveals the tile; the second reveal
    /// of a move counts the move, locks input, and schedules resolution.
    pub fn activate(&mut self, index: usize) -> Vec<GameEvent> {
        let Some(session) = &mut self.session else {
            return Vec::new();
        };
        if !session.can_reveal(index) {
            return Vec::new();
        }

        let mut events = vec![GameEvent::TileRevealed { index }];

        if session.reveal(index) {
            events.push(GameEvent::StatsChanged {
                moves: session.moves(),
                matches: session.matches(),
            });

            // Suspension point: final transition happens after the delay
            let (first, second) = session
                .revealed_pair()
                .expect("second reveal leaves a pending pair");
            let (delay, kind) = if session.pending_pair_matches() {
                (MATCH_RESOLVE_DELAY, TaskKind::ResolveMatch { first, second })
            } else {
                (MISMATCH_RESOLVE_DELAY, TaskKind::ResolveMismatch { first, second })
            };
            self.scheduler.schedule_in(delay, kind);
        }

        events
    }

    /// Advance the logical clock and run any due resolution tasks.
    ///
    /// The host calls this from its timer/frame source with the elapsed
    /// wall time. Stale tasks from cancelled sessions are dropped without
    /// effect.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();

        for task in self.scheduler.advance(elapsed) {
            let Some(session) = &mut self.session else {
                continue;
            };
            match task {
                TaskKind::ResolveMatch { first, second } => {
                    let all_matched = session.apply_match(first, second);
                    events.push(GameEvent::TilesMatched { first, second });
                    events.push(GameEvent::StatsChanged {
                        moves: session.moves(),
                        matches: session.matches(),
                    });
                    if all_matched {
                        self.scheduler.schedule_in(WIN_SIGNAL_DELAY, TaskKind::SignalWin);
                    }
                }
                TaskKind::ResolveMismatch { first, second } => {
                    session.apply_mismatch(first, second);
                    events.push(GameEvent::TilesHidden { first, second });
                }
                TaskKind::SignalWin => {
                    session.mark_won();
                    events.push(GameEvent::Won { moves: session.moves() });
                }
            }
        }

        events
    }

    // === Derived state ===

    /// The difficulty in effect for the next board generation.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Session status (`NotStarted` before the first start).
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.session
            .as_ref()
            .map_or(SessionStatus::NotStarted, Session::status)
    }

    /// The active board, if a session has been started.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.session.as_ref().map(Session::board)
    }

    /// Completed moves in the active session.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.session.as_ref().map_or(0, Session::moves)
    }

    /// Matched pairs in the active session.
    #[must_use]
    pub fn matches(&self) -> u32 {
        self.session.as_ref().map_or(0, Session::matches)
    }

    /// Whether tile activation is currently accepted.
    #[must_use]
    pub fn accepting_input(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(Session::input_accepted)
    }

    /// Whether a resolution task is pending.
    #[must_use]
    pub fn resolution_pending(&self) -> bool {
        self.scheduler.pending_count() > 0
    }

    /// Snapshot the RNG state for session reproduction.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
