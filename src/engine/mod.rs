//! The game engine: session state, deferred match resolution, and events.
//!
//! ## Architecture
//!
//! The engine is single-threaded and event-driven. All mutation happens in
//! response to discrete inputs (`start`, `restart`, `set_difficulty`,
//! `activate`) or to the logical clock advancing (`advance`). Each mutating
//! call returns the [`GameEvent`]s it produced; the rendering layer reacts
//! to those and re-reads derived state through the accessors.
//!
//! Match resolution is deferred: revealing a second tile locks input and
//! schedules a resolution task on the [`Scheduler`]. Tasks carry the
//! session generation, so a restart or difficulty change while a delay is
//! pending makes the stale task a no-op instead of corrupting the new
//! session.

pub mod events;
pub mod game;
pub mod schedule;
pub mod session;

pub use events::GameEvent;
pub use game::{GameEngine, GameEngineBuilder};
pub use schedule::{
    Scheduler, MATCH_RESOLVE_DELAY, MISMATCH_RESOLVE_DELAY, WIN_SIGNAL_DELAY,
};
pub use session::{Session, SessionStatus};
