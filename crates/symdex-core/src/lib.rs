//! symdex core - immutable symbol search index for generated API documentation.
//!
//! A corpus of [`SymbolRecord`]s (package, container type, label, optional
//! locator) is built once into a [`SymbolIndex`] and then queried any number
//! of times, from any number of threads, without locking.
//!
//! Matches are returned in tiers: exact label, label prefix, label
//! substring, and finally package/container name. Matching ignores case.
//!
//! # Example
//!
//! ```rust
//! use symdex_core::{build, SymbolRecord};
//!
//! let index = build(vec![
//!     SymbolRecord::new("a.b", "X", "foo()"),
//!     SymbolRecord::new("a.b", "X", "foobar()"),
//!     SymbolRecord::new("a.c", "Y", "bar()"),
//! ])?;
//!
//! let labels: Vec<_> = index
//!     .search("foo")?
//!     .map(|hit| hit.record.label.as_str())
//!     .collect();
//! assert_eq!(labels, ["foo()", "foobar()"]);
//! # Ok::<(), symdex_core::SymdexError>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod index;
pub mod record;

// Re-export commonly used types
pub use codec::{
    load_file, load_index, load_javadoc_dir, parse_search_index, render_search_index,
    SearchIndexKind,
};
pub use config::{FallbackMode, IndexFiles, MatchTier, RankingConfig};
pub use error::{Result, SymdexError};
pub use index::{
    build, search, IndexBuilder, IndexHandle, IndexStats, SearchHit, SearchResults, SymbolIndex,
};
pub use record::SymbolRecord;
