//! Core engine types: difficulty configuration and random number generation.
//!
//! These are the building blocks the rest of the engine is assembled from.
//! Nothing here knows about tiles or sessions.

pub mod config;
pub mod rng;

pub use config::{Difficulty, GridConfig};
pub use rng::{GameRng, GameRngState};
