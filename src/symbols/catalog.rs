//! Symbol catalog with ordered prefix selection.
//!
//! The catalog is a fixed *ordered* list: the subset used for a board is
//! always the first `pairs` entries, never a random sample. This keeps the
//! difficulty-to-symbol-set mapping deterministic - an easy board always
//! plays with the same six symbols.

use rustc_hash::FxHashMap;

use super::definition::{SymbolDefinition, SymbolId};

/// Ordered catalog of symbol definitions.
///
/// Provides fast lookup by `SymbolId` and prefix selection by pair count.
///
/// ## Example
///
/// ```
/// use tilematch::symbols::{SymbolCatalog, SymbolId};
///
/// let catalog = SymbolCatalog::standard();
/// assert_eq!(catalog.len(), 12);
///
/// let easy = catalog.select_prefix(6);
/// assert_eq!(easy.len(), 6);
/// assert_eq!(easy[0].id, SymbolId::new(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolCatalog {
    symbols: Vec<SymbolDefinition>,
    by_id: FxHashMap<SymbolId, usize>,
}

impl SymbolCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard 12-symbol catalog used by the reference UI.
    ///
    /// Order is significant: prefix selection depends on it.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        let entries = [
            (1, "bi-heart-fill", "heart"),
            (2, "bi-star-fill", "star"),
            (3, "bi-lightning-fill", "lightning"),
            (4, "bi-sun-fill", "sun"),
            (5, "bi-moon-fill", "moon"),
            (6, "bi-cloud-fill", "cloud"),
            (7, "bi-gift-fill", "gift"),
            (8, "bi-trophy-fill", "trophy"),
            (9, "bi-gem", "gem"),
            (10, "bi-fire", "fire"),
            (11, "bi-balloon-fill", "balloon"),
            (12, "bi-flower1", "flower"),
        ];
        for (id, icon, name) in entries {
            catalog.register(SymbolDefinition::new(SymbolId::new(id), icon, name));
        }
        catalog
    }

    /// Register a symbol definition at the end of the catalog order.
    ///
    /// Panics if a symbol with the same ID already exists.
    pub fn register(&mut self, symbol: SymbolDefinition) {
        if self.by_id.contains_key(&symbol.id) {
            panic!("Symbol with ID {:?} already registered", symbol.id);
        }
        self.by_id.insert(symbol.id, self.symbols.len());
        self.symbols.push(symbol);
    }

    /// Get a symbol definition by ID.
    #[must_use]
    pub fn get(&self, id: SymbolId) -> Option<&SymbolDefinition> {
        self.by_id.get(&id).map(|&idx| &self.symbols[idx])
    }

    /// Check if a symbol ID is registered.
    #[must_use]
    pub fn contains(&self, id: SymbolId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Get the number of registered symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Select the first `pairs` symbols in catalog order.
    ///
    /// Panics if the catalog holds fewer than `pairs` symbols.
    #[must_use]
    pub fn select_prefix(&self, pairs: usize) -> &[SymbolDefinition] {
        assert!(
            pairs <= self.symbols.len(),
            "Catalog has {} symbols, {} pairs requested",
            self.symbols.len(),
            pairs
        );
        &self.symbols[..pairs]
    }

    /// Iterate over all symbol definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolDefinition> {
        self.symbols.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = SymbolCatalog::standard();
        assert_eq!(catalog.len(), 12);
        assert!(!catalog.is_empty());

        let heart = catalog.get(SymbolId::new(1)).unwrap();
        assert_eq!(heart.name, "heart");
        let flower = catalog.get(SymbolId::new(12)).unwrap();
        assert_eq!(flower.icon, "bi-flower1");

        assert!(catalog.get(SymbolId::new(13)).is_none());
    }

    #[test]
    fn test_ids_unique() {
        let catalog = SymbolCatalog::standard();
        for symbol in catalog.iter() {
            assert!(catalog.contains(symbol.id));
        }
    }

    #[test]
    fn test_prefix_selection_is_ordered() {
        let catalog = SymbolCatalog::standard();

        let easy = catalog.select_prefix(6);
        let ids: Vec<u32> = easy.iter().map(|s| s.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let hard = catalog.select_prefix(12);
        assert_eq!(hard.len(), 12);
        // Easy prefix is a prefix of the hard prefix
        assert_eq!(&hard[..6], easy);
    }

    #[test]
    #[should_panic(expected = "13 pairs requested")]
    fn test_prefix_selection_over_capacity() {
        SymbolCatalog::standard().select_prefix(13);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration() {
        let mut catalog = SymbolCatalog::standard();
        catalog.register(SymbolDefinition::new(SymbolId::new(1), "bi-x", "dup"));
    }
}
