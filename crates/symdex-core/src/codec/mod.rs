//! Reading and writing Javadoc search-index artifacts.
//!
//! This module provides:
//! - Parsing of `*-search-index.js` assignments and plain JSON arrays
//! - Reading legacy `*-search-index.zip` archives
//! - Loading a file or a whole Javadoc output directory into an index
//! - Rendering records back into the JavaScript assignment form

mod archive;
mod javadoc;
mod loader;

pub use archive::{read_archive_json, read_archive_json_from};
pub use javadoc::{detect_kind, parse_search_index, render_search_index, SearchIndexKind};
pub use loader::{load_file, load_index, load_javadoc_dir};
