//! Immutable symbol index and its query engine.
//!
//! This module provides:
//! - One-shot index construction with record validation
//! - Tiered exact/prefix/substring/container search
//! - An atomically replaceable handle for rebuilt indexes

mod builder;
mod handle;
mod query;
mod symbol_index;

pub use builder::{build, IndexBuilder};
pub use handle::IndexHandle;
pub use query::{normalize_term, search, SearchHit, SearchResults};
pub use symbol_index::{IndexStats, SymbolIndex};
