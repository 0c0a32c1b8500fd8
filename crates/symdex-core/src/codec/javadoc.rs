//! Javadoc search-index text format.

use crate::config::IndexFiles;
use crate::record::SymbolRecord;
use crate::{Result, SymdexError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

/// `memberSearchIndex = ` style assignment head, with an optional declaration keyword.
static ASSIGNMENT_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(?:var|let|const)\s+)?([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*").unwrap()
});

/// Which Javadoc index a payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchIndexKind {
    Member,
    Type,
    Package,
}

impl SearchIndexKind {
    pub fn file_stem(self) -> &'static str {
        match self {
            SearchIndexKind::Member => IndexFiles::MEMBER_STEM,
            SearchIndexKind::Type => IndexFiles::TYPE_STEM,
            SearchIndexKind::Package => IndexFiles::PACKAGE_STEM,
        }
    }

    pub fn variable_name(self) -> &'static str {
        match self {
            SearchIndexKind::Member => IndexFiles::MEMBER_VARIABLE,
            SearchIndexKind::Type => IndexFiles::TYPE_VARIABLE,
            SearchIndexKind::Package => IndexFiles::PACKAGE_VARIABLE,
        }
    }

    /// Kind named by a file name such as `type-search-index.js`.
    pub fn from_file_name(name: &str) -> Option<Self> {
        [
            SearchIndexKind::Member,
            SearchIndexKind::Type,
            SearchIndexKind::Package,
        ]
        .into_iter()
        .find(|kind| name.starts_with(kind.file_stem()))
    }

    /// Index a record belongs in when written back out.
    ///
    /// Referenced records are members. Unreferenced records shaped like a
    /// package or type entry map to those kinds; anything else is a member.
    pub fn of(record: &SymbolRecord) -> Self {
        if record.reference.is_some() {
            SearchIndexKind::Member
        } else if record.container_name.is_empty() && record.label == record.package_name {
            SearchIndexKind::Package
        } else if record.label == record.container_name {
            SearchIndexKind::Type
        } else {
            SearchIndexKind::Member
        }
    }

    fn from_variable_name(name: &str) -> Option<Self> {
        [
            SearchIndexKind::Member,
            SearchIndexKind::Type,
            SearchIndexKind::Package,
        ]
        .into_iter()
        .find(|kind| kind.variable_name() == name)
    }
}

impl std::str::FromStr for SearchIndexKind {
    type Err = SymdexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "member" => Ok(SearchIndexKind::Member),
            "type" => Ok(SearchIndexKind::Type),
            "package" => Ok(SearchIndexKind::Package),
            other => Err(SymdexError::Format {
                message: format!("unknown search index kind: {}", other),
            }),
        }
    }
}

/// Entry as it appears on disk. Navigation links carry `u` instead of `p`/`c`.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(alias = "package")]
    p: Option<String>,
    #[serde(alias = "container")]
    c: Option<String>,
    #[serde(alias = "label")]
    l: Option<String>,
    url: Option<String>,
    u: Option<String>,
}

impl RawEntry {
    fn into_record(self, kind: SearchIndexKind) -> SymbolRecord {
        // A missing label is kept empty so the builder reports it.
        let label = self.l.unwrap_or_default();
        match kind {
            SearchIndexKind::Member => {
                let reference = self.url.unwrap_or_else(|| label.clone());
                SymbolRecord {
                    package_name: self.p.unwrap_or_default(),
                    container_name: self.c.unwrap_or_default(),
                    label,
                    reference: Some(reference),
                }
            }
            SearchIndexKind::Type => SymbolRecord {
                package_name: self.p.unwrap_or_default(),
                container_name: label.clone(),
                label,
                reference: None,
            },
            SearchIndexKind::Package => SymbolRecord {
                package_name: label.clone(),
                container_name: String::new(),
                label,
                reference: None,
            },
        }
    }
}

/// Entry as written back out, in the shape Javadoc uses per kind.
#[derive(Debug, Serialize)]
struct RenderedEntry<'a> {
    #[serde(skip_serializing_if = "is_blank")]
    p: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    c: &'a str,
    l: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

impl<'a> RenderedEntry<'a> {
    fn new(record: &'a SymbolRecord, kind: SearchIndexKind) -> Self {
        match kind {
            SearchIndexKind::Member => Self {
                p: &record.package_name,
                c: &record.container_name,
                l: &record.label,
                url: record.reference.as_deref().filter(|r| *r != record.label),
            },
            SearchIndexKind::Type => Self {
                p: &record.package_name,
                c: "",
                l: &record.label,
                url: None,
            },
            SearchIndexKind::Package => Self {
                p: "",
                c: "",
                l: &record.label,
                url: None,
            },
        }
    }
}

fn is_blank(value: &&str) -> bool {
    value.is_empty()
}

/// Kind named by the assignment in `text`, if it has one.
pub fn detect_kind(text: &str) -> Option<SearchIndexKind> {
    let text = text.trim_start_matches('\u{feff}');
    ASSIGNMENT_HEAD
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|name| SearchIndexKind::from_variable_name(name.as_str()))
}

/// Parse a search-index payload into records.
///
/// Accepts a bare JSON array or a `name = [...]` assignment; anything after
/// the array (`;updateSearchResults();`) is ignored.
pub fn parse_search_index(text: &str, kind: SearchIndexKind) -> Result<Vec<SymbolRecord>> {
    let text = text.trim_start_matches('\u{feff}').trim_start();

    let body = if text.starts_with('[') {
        text
    } else if let Some(head) = ASSIGNMENT_HEAD.find(text) {
        &text[head.end()..]
    } else {
        return Err(SymdexError::Format {
            message: "expected a JSON array or a `name = [...]` assignment".to_string(),
        });
    };

    let entries: Vec<RawEntry> = serde_json::Deserializer::from_str(body)
        .into_iter::<Vec<RawEntry>>()
        .next()
        .ok_or_else(|| SymdexError::Format {
            message: "search index payload is empty".to_string(),
        })??;

    let total = entries.len();
    let records: Vec<SymbolRecord> = entries
        .into_iter()
        .filter(|entry| entry.u.is_none())
        .map(|entry| entry.into_record(kind))
        .collect();

    if records.len() < total {
        debug!(
            "Skipped {} navigation entries in {:?} index",
            total - records.len(),
            kind
        );
    }

    Ok(records)
}

/// Render records as a Javadoc `name = [...];` assignment.
///
/// Only records whose [`SearchIndexKind::of`] is `kind` are written, so a
/// mixed index renders into one file per kind without losing fields.
pub fn render_search_index(records: &[SymbolRecord], kind: SearchIndexKind) -> Result<String> {
    let entries: Vec<RenderedEntry<'_>> = records
        .iter()
        .filter(|record| SearchIndexKind::of(record) == kind)
        .map(|record| RenderedEntry::new(record, kind))
        .collect();

    if entries.len() < records.len() {
        debug!(
            "Rendered {} of {} records into {:?} index",
            entries.len(),
            records.len(),
            kind
        );
    }

    Ok(format!(
        "{} = {};{}",
        kind.variable_name(),
        serde_json::to_string(&entries)?,
        IndexFiles::UPDATE_CALL
    ))
}
