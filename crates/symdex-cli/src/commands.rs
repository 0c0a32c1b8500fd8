//! Command implementations. Each writes its output to stdout.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use symdex_core::{
    load_index, render_search_index, MatchTier, RankingConfig, SearchHit, SearchIndexKind,
};
use tracing::debug;

/// One search result as printed by `symdex search --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HitView<'a> {
    pub tier: MatchTier,
    pub package: &'a str,
    pub container: &'a str,
    pub label: &'a str,
    pub href: String,
}

impl<'a> From<SearchHit<'a>> for HitView<'a> {
    fn from(hit: SearchHit<'a>) -> Self {
        Self {
            tier: hit.tier,
            package: &hit.record.package_name,
            container: &hit.record.container_name,
            label: &hit.record.label,
            href: hit.record.href(),
        }
    }
}

fn load_ranking(path: Option<&Path>) -> Result<RankingConfig> {
    let Some(path) = path else {
        return Ok(RankingConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read ranking config {}", path.display()))?;
    let ranking = RankingConfig::from_json(&text)
        .with_context(|| format!("Invalid ranking config {}", path.display()))?;
    debug!("Using ranking {:?}", ranking);
    Ok(ranking)
}

pub fn search(
    path: &Path,
    term: &str,
    limit: usize,
    json: bool,
    ranking: Option<&Path>,
) -> Result<()> {
    let ranking = load_ranking(ranking)?;
    let index = load_index(path)
        .with_context(|| format!("Failed to load index from {}", path.display()))?;

    let limit = if limit == 0 { usize::MAX } else { limit };
    let hits: Vec<HitView<'_>> = index
        .search_with(term, &ranking)?
        .take(limit)
        .map(HitView::from)
        .collect();

    let mut out = std::io::stdout().lock();
    write_hits(&mut out, &hits, json)?;
    Ok(())
}

pub fn write_hits<W: Write>(out: &mut W, hits: &[HitView<'_>], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, hits)?;
        writeln!(out)?;
        return Ok(());
    }

    for hit in hits {
        let qualified = [hit.package, hit.container, hit.label]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(".");
        writeln!(out, "{:<10} {}  {}", hit.tier.as_str(), qualified, hit.href)?;
    }
    Ok(())
}

pub fn stats(path: &Path) -> Result<()> {
    let index = load_index(path)
        .with_context(|| format!("Failed to load index from {}", path.display()))?;
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &index.stats())?;
    writeln!(out)?;
    Ok(())
}

/// Write the records of one kind as a Javadoc search-index script.
pub fn export(path: &Path, kind: SearchIndexKind) -> Result<()> {
    let index = load_index(path)
        .with_context(|| format!("Failed to load index from {}", path.display()))?;
    let text = render_search_index(index.records(), kind)?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", text)?;
    Ok(())
}
