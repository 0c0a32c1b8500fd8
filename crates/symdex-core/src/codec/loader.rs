//! Loading search-index files and Javadoc output directories.

use crate::config::IndexFiles;
use crate::index::{IndexBuilder, SymbolIndex};
use crate::record::SymbolRecord;
use crate::{Result, SymdexError};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

use super::archive::read_archive_json;
use super::javadoc::{detect_kind, parse_search_index, SearchIndexKind};

/// Load the records of a single search-index file.
///
/// The kind comes from the file name; files with an unrecognized name fall
/// back to the assignment's variable name, then to member entries.
pub fn load_file(path: &Path) -> Result<Vec<SymbolRecord>> {
    let is_archive = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(IndexFiles::ARCHIVE_EXTENSION));

    let text = if is_archive {
        read_archive_json(path)?
    } else {
        std::fs::read_to_string(path).map_err(|e| SymdexError::io_with_path(e, path))?
    };

    let from_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(SearchIndexKind::from_file_name);
    let from_text = detect_kind(&text);

    if let (Some(named), Some(declared)) = (from_name, from_text) {
        if named != declared {
            warn!(
                "{} is named as a {:?} index but declares {}",
                path.display(),
                named,
                declared.variable_name()
            );
        }
    }

    let kind = from_name.or(from_text).unwrap_or(SearchIndexKind::Member);
    let records = parse_search_index(&text, kind)?;
    debug!(
        "Loaded {} {:?} records from {}",
        records.len(),
        kind,
        path.display()
    );
    Ok(records)
}

/// Load every search index found in a Javadoc output directory.
///
/// Package, type, then member indexes are read, each from its `.js` file or,
/// failing that, its `.zip` archive.
pub fn load_javadoc_dir(dir: &Path) -> Result<Vec<SymbolRecord>> {
    if !dir.is_dir() {
        return Err(SymdexError::Io {
            message: "not a directory".to_string(),
            path: Some(dir.to_path_buf()),
            source: None,
        });
    }

    let mut records = Vec::new();
    let mut found = 0;

    for kind in [
        SearchIndexKind::Package,
        SearchIndexKind::Type,
        SearchIndexKind::Member,
    ] {
        let candidates = [IndexFiles::SCRIPT_EXTENSION, IndexFiles::ARCHIVE_EXTENSION]
            .map(|ext| dir.join(format!("{}.{}", kind.file_stem(), ext)));
        if let Some(path) = candidates.iter().find(|p| p.is_file()) {
            records.extend(load_file(path)?);
            found += 1;
        }
    }

    if found == 0 {
        return Err(SymdexError::NoSearchIndex(dir.to_path_buf()));
    }
    Ok(records)
}

/// Load a file or Javadoc directory and build an index from it.
pub fn load_index(path: &Path) -> Result<SymbolIndex> {
    let start = Instant::now();

    let records = if path.is_dir() {
        load_javadoc_dir(path)?
    } else {
        load_file(path)?
    };

    let mut builder = IndexBuilder::with_capacity(records.len());
    builder.extend(records);
    let index = builder.finish()?;

    debug!(
        "Indexed {} in {:.2}ms",
        path.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(index)
}
