//! Generation-tagged task scheduling on a logical clock.
//!
//! Match resolution happens after a fixed visual delay, so the engine
//! defers it as a scheduled task rather than mutating state inline. The
//! scheduler runs on a *logical* clock: the host advances it by however
//! much wall time elapsed (a frame tick, a timer callback), and tasks
//! whose due time has passed fire in due order.
//!
//! ## Stale task invalidation
//!
//! Every task is tagged with the generation current at scheduling time.
//! `invalidate()` bumps the generation, so tasks scheduled for a previous
//! session fire into nothing instead of corrupting the new session's
//! state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay before a matching pair is marked matched.
pub const MATCH_RESOLVE_DELAY: Duration = Duration::from_millis(500);

/// Delay before a mismatched pair is hidden again.
pub const MISMATCH_RESOLVE_DELAY: Duration = Duration::from_millis(1000);

/// Delay between the final match and the win signal.
pub const WIN_SIGNAL_DELAY: Duration = Duration::from_millis(500);

/// Work deferred behind a resolution delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Mark both tiles matched and credit the pair.
    ResolveMatch {
        /// First revealed tile of the pair.
        first: usize,
        /// Second revealed tile of the pair.
        second: usize,
    },
    /// Hide both tiles again.
    ResolveMismatch {
        /// First revealed tile of the pair.
        first: usize,
        /// Second revealed tile of the pair.
        second: usize,
    },
    /// Signal the win with the final move count.
    SignalWin,
}

/// A task waiting for its due time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct ScheduledTask {
    /// Absolute due time on the logical clock.
    due: Duration,
    /// Generation the task was scheduled under.
    generation: u64,
    kind: TaskKind,
}

/// Deferred-task scheduler with generation-based invalidation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scheduler {
    now: Duration,
    generation: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    /// Create a new scheduler at logical time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Current generation counter.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Schedule a task to fire `delay` after the current logical time.
    pub fn schedule_in(&mut self, delay: Duration, kind: TaskKind) {
        self.tasks.push(ScheduledTask {
            due: self.now + delay,
            generation: self.generation,
            kind,
        });
    }

    /// Invalidate all pending tasks.
    ///
    /// Bumps the generation; tasks scheduled before the bump are dropped
    /// when their due time arrives, without firing.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Number of pending tasks that would still fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.generation == self.generation)
            .count()
    }

    /// Advance the logical clock and collect fired tasks.
    ///
    /// Returns current-generation tasks whose due time has passed, sorted
    /// by due time. Stale tasks that came due are discarded silently.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TaskKind> {
        self.now += elapsed;
        let now = self.now;
        let generation = self.generation;

        let mut due: Vec<ScheduledTask> = Vec::new();
        self.tasks.retain(|task| {
            if task.due <= now {
                due.push(*task);
                false
            } else {
                // Stale future tasks can be dropped early too
                task.generation == generation
            }
        });

        due.sort_by_key(|t| t.due);
        due.into_iter()
            .filter(|t| t.generation == generation)
            .map(|t| t.kind)
            .collect()
    }
}
