//! Legacy `*-search-index.zip` archives.
//!
//! Older Javadoc releases shipped each index as a zip holding a single
//! `*-search-index.json` entry.

use crate::{Result, SymdexError};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::warn;

/// Read the JSON entry of an archive on disk.
pub fn read_archive_json(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| SymdexError::io_with_path(e, path))?;
    read_archive_json_from(file).map_err(|e| match e {
        SymdexError::Archive { message } => SymdexError::Archive {
            message: format!("{}: {}", path.display(), message),
        },
        other => other,
    })
}

/// Read the first `.json` entry from any zip source.
pub fn read_archive_json_from<R: Read + Seek>(reader: R) -> Result<String> {
    let mut archive = zip::ZipArchive::new(reader)?;

    let mut json_entries = Vec::new();
    for i in 0..archive.len() {
        if archive.by_index(i)?.name().ends_with(".json") {
            json_entries.push(i);
        }
    }

    let Some(&first) = json_entries.first() else {
        return Err(SymdexError::Archive {
            message: "archive contains no .json entry".to_string(),
        });
    };
    if json_entries.len() > 1 {
        warn!(
            "Archive holds {} .json entries, reading only the first",
            json_entries.len()
        );
    }

    let mut entry = archive.by_index(first)?;
    let mut contents = String::new();
    entry.read_to_string(&mut contents)?;
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn make_archive(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_read_json_entry() {
        let bytes = make_archive(&[
            ("README.txt", "not an index"),
            ("member-search-index.json", r#"[{"p":"a","c":"X","l":"foo()"}]"#),
        ]);
        let json = read_archive_json_from(Cursor::new(bytes)).unwrap();
        assert!(json.contains("foo()"));
    }

    #[test]
    fn test_archive_without_json() {
        let bytes = make_archive(&[("README.txt", "nothing here")]);
        assert!(matches!(
            read_archive_json_from(Cursor::new(bytes)),
            Err(SymdexError::Archive { .. })
        ));
    }

    #[test]
    fn test_not_an_archive() {
        assert!(matches!(
            read_archive_json_from(Cursor::new(b"plain text".to_vec())),
            Err(SymdexError::Archive { .. })
        ));
    }
}
