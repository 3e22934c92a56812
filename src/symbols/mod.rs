//! Symbol definitions and the fixed catalog.
//!
//! A **Symbol** is the matching unit: two tiles hiding the same symbol form
//! a pair. Symbols are static data - the engine never mutates them. The
//! catalog is a fixed ordered list of 12 symbols; each difficulty selects a
//! prefix of it.

pub mod catalog;
pub mod definition;

pub use catalog::SymbolCatalog;
pub use definition::{SymbolDefinition, SymbolId};
