//! Session state for one playthrough.
//!
//! A session owns the board and all counters from start to win (or
//! restart). It is a plain value: the engine creates it whole on `start`
//! and replaces it whole on `restart` - dimensions are never partially
//! mutated. All transitions go through methods here so the revealed-set
//! invariant (size 0, 1, or 2 - never more) holds by construction.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, TileState};
use crate::core::Difficulty;

/// Session-level state machine.
///
/// `NotStarted -> InProgress -> Won`; a restart returns to `InProgress`
/// with a fresh session value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No board generated yet.
    #[default]
    NotStarted,
    /// Board active, tiles can be activated.
    InProgress,
    /// All pairs matched and the win signal fired.
    Won,
}

/// One playthrough's full mutable state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    difficulty: Difficulty,
    board: Board,
    /// Revealed-but-unmatched tile indices. Holds at most two entries.
    revealed: SmallVec<[usize; 2]>,
    moves: u32,
    matches: u32,
    input_accepted: bool,
    status: SessionStatus,
}

impl Session {
    /// Create a fresh in-progress session over a generated board.
    #[must_use]
    pub fn new(difficulty: Difficulty, board: Board) -> Self {
        Self {
            difficulty,
            board,
            revealed: SmallVec::new(),
            moves: 0,
            matches: 0,
            input_accepted: true,
            status: SessionStatus::InProgress,
        }
    }

    /// The difficulty this session was started with.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The session's board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Completed moves (two-tile reveals) so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Matched pairs so far.
    #[must_use]
    pub fn matches(&self) -> u32 {
        self.matches
    }

    /// Current session status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether tile activation is currently accepted.
    #[must_use]
    pub fn input_accepted(&self) -> bool {
        self.input_accepted
    }

    /// Number of revealed-but-unmatched tiles (0, 1, or 2).
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// The two pending tile indices, once two tiles are revealed.
    #[must_use]
    pub fn revealed_pair(&self) -> Option<(usize, usize)> {
        match self.revealed.as_slice() {
            &[first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// Check whether `index` can be revealed right now.
    #[must_use]
    pub fn can_reveal(&self, index: usize) -> bool {
        self.status == SessionStatus::InProgress
            && self.input_accepted
            && self.revealed.len() < 2
            && self.board.tile(index).is_some_and(|t| t.is_hidden())
    }

    /// Reveal a tile and add it to the pending set.
    ///
    /// On the second reveal, increments the move count and locks input
    /// until resolution. Returns true if this was the second reveal.
    ///
    /// Callers must check [`can_reveal`](Self::can_reveal) first.
    pub(crate) fn reveal(&mut self, index: usize) -> bool {
        debug_assert!(self.can_reveal(index));

        if let Some(tile) = self.board.tile_mut(index) {
            tile.state = TileState::Revealed;
        }
        self.revealed.push(index);

        if self.revealed.len() == 2 {
            // Moves count at reveal time, not resolution time
            self.moves += 1;
            self.input_accepted = false;
            true
        } else {
            false
        }
    }

    /// Whether the two pending tiles hide the same symbol.
    ///
    /// Only meaningful while a pair is pending.
    #[must_use]
    pub fn pending_pair_matches(&self) -> bool {
        self.revealed_pair().is_some_and(|(first, second)| {
            match (self.board.tile(first), self.board.tile(second)) {
                (Some(a), Some(b)) => a.symbol == b.symbol,
                _ => false,
            }
        })
    }

    /// Resolve the pending pair as a match.
    ///
    /// Marks both tiles matched, credits the pair, clears the pending set
    /// and unlocks input. Returns true if every pair is now matched.
    pub(crate) fn apply_match(&mut self, first: usize, second: usize) -> bool {
        for index in [first, second] {
            if let Some(tile) = self.board.tile_mut(index) {
                tile.state = TileState::Matched;
            }
        }
        self.matches += 1;
        self.revealed.clear();
        self.input_accepted = true;

        self.matches as usize == self.board.grid().pairs
    }

    /// Resolve the pending pair as a mismatch.
    ///
    /// Hides both tiles again, clears the pending set and unlocks input.
    pub(crate) fn apply_mismatch(&mut self, first: usize, second: usize) {
        for index in [first, second] {
            if let Some(tile) = self.board.tile_mut(index) {
                tile.state = TileState::Hidden;
            }
        }
        self.revealed.clear();
        self.input_accepted = true;
    }

    /// Enter the terminal `Won` state.
    pub(crate) fn mark_won(&mut self) {
        self.status = SessionStatus::Won;
        self.input_accepted = false;
    }
}
