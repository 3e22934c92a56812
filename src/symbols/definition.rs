//! Symbol definitions - static symbol data.
//!
//! `SymbolDefinition` holds the immutable properties of a symbol: its id,
//! the icon class the rendering layer draws with, and a short name.
//! Tile-specific data (position, state) lives in `board::Tile`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a symbol.
///
/// Identifies the matching unit (e.g. "heart"), not a specific tile on
/// the board - every symbol appears on exactly two tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Static symbol definition.
///
/// The `icon` field is an opaque display tag (the reference UI uses
/// Bootstrap Icons class names); the engine never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDefinition {
    /// Unique identifier for this symbol.
    pub id: SymbolId,

    /// Display tag for the rendering layer.
    pub icon: String,

    /// Short name (for display/debugging).
    pub name: String,
}

impl SymbolDefinition {
    /// Create a new symbol definition.
    #[must_use]
    pub fn new(id: SymbolId, icon: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            icon: icon.into(),
            name: name.into(),
        }
    }
}
