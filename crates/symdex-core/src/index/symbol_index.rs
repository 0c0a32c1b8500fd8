//! Sorted in-memory symbol index.

use crate::config::{MatchTier, RankingConfig};
use crate::record::SymbolRecord;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;

use super::query::{normalize_term, SearchResults};

/// Case-folded copies of the searchable fields of one record.
#[derive(Debug, Clone)]
pub(super) struct FoldedFields {
    pub label: String,
    pub package: String,
    pub container: String,
}

impl FoldedFields {
    fn new(record: &SymbolRecord) -> Self {
        Self {
            label: fold(&record.label),
            package: fold(&record.package_name),
            container: fold(&record.container_name),
        }
    }
}

pub(super) fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Summary counts for an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub records: usize,
    pub containers: usize,
    pub members: usize,
    pub packages: usize,
}

/// Immutable, queryable symbol index.
///
/// Records keep their corpus positions. Two permutations are kept beside
/// them: one ordered by folded label for exact and prefix lookups, one
/// ordered by (package, container, label) for deterministic tier output.
#[derive(Debug, Clone)]
pub struct SymbolIndex {
    records: Vec<SymbolRecord>,
    folded: Vec<FoldedFields>,
    by_label: Vec<usize>,
    by_key: Vec<usize>,
    key_rank: Vec<usize>,
    ranking: RankingConfig,
}

impl SymbolIndex {
    /// Build from records that already passed validation.
    pub(super) fn from_validated(records: Vec<SymbolRecord>) -> Self {
        let folded: Vec<FoldedFields> = records.iter().map(FoldedFields::new).collect();

        let mut by_label: Vec<usize> = (0..records.len()).collect();
        by_label.sort_by(|&a, &b| folded[a].label.cmp(&folded[b].label).then(a.cmp(&b)));

        let mut by_key: Vec<usize> = (0..records.len()).collect();
        by_key.sort_by(|&a, &b| {
            let (fa, fb) = (&folded[a], &folded[b]);
            fa.package
                .cmp(&fb.package)
                .then_with(|| fa.container.cmp(&fb.container))
                .then_with(|| fa.label.cmp(&fb.label))
                .then(a.cmp(&b))
        });

        let mut key_rank = vec![0; records.len()];
        for (rank, &position) in by_key.iter().enumerate() {
            key_rank[position] = rank;
        }

        Self {
            records,
            folded,
            by_label,
            by_key,
            key_rank,
            ranking: RankingConfig::default(),
        }
    }

    /// Replace the ranking used by [`SymbolIndex::search`].
    pub fn with_ranking(mut self, ranking: RankingConfig) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn ranking(&self) -> &RankingConfig {
        &self.ranking
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at its original corpus position.
    pub fn get(&self, position: usize) -> Option<&SymbolRecord> {
        self.records.get(position)
    }

    /// Records in corpus order.
    pub fn records(&self) -> &[SymbolRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolRecord> {
        self.records.iter()
    }

    /// Search with the index's configured ranking.
    pub fn search(&self, term: &str) -> Result<SearchResults<'_>> {
        SearchResults::new(self, term, &self.ranking)
    }

    /// Search with an explicit ranking.
    pub fn search_with(&self, term: &str, ranking: &RankingConfig) -> Result<SearchResults<'_>> {
        SearchResults::new(self, term, ranking)
    }

    /// All records whose label equals `label`, ignoring case.
    pub fn find_exact(&self, label: &str) -> Vec<&SymbolRecord> {
        let folded = fold(label);
        let mut positions: Vec<usize> = self.by_label[self.exact_range(&folded)].to_vec();
        self.sort_by_key_rank(&mut positions);
        positions.iter().map(|&p| &self.records[p]).collect()
    }

    /// Check whether `term` is a prefix of any label.
    pub fn has_prefix(&self, term: &str) -> Result<bool> {
        let folded = normalize_term(term)?;
        Ok(!self.prefix_range(&folded).is_empty())
    }

    pub fn stats(&self) -> IndexStats {
        let containers = self.records.iter().filter(|r| r.is_container()).count();
        let packages: HashSet<&str> = self
            .records
            .iter()
            .map(|r| r.package_name.as_str())
            .filter(|p| !p.is_empty())
            .collect();
        IndexStats {
            records: self.records.len(),
            containers,
            members: self.records.len() - containers,
            packages: packages.len(),
        }
    }

    /// Range of `by_label` whose folded label equals `term`.
    fn exact_range(&self, term: &str) -> Range<usize> {
        let start = self
            .by_label
            .partition_point(|&p| self.folded[p].label.as_str() < term);
        let len = self.by_label[start..].partition_point(|&p| self.folded[p].label == term);
        start..start + len
    }

    /// Range of `by_label` whose folded label starts with `term`. Includes
    /// exact matches, which sort first.
    fn prefix_range(&self, term: &str) -> Range<usize> {
        let start = self
            .by_label
            .partition_point(|&p| self.folded[p].label.as_str() < term);
        let len =
            self.by_label[start..].partition_point(|&p| self.folded[p].label.starts_with(term));
        start..start + len
    }

    fn sort_by_key_rank(&self, positions: &mut [usize]) {
        positions.sort_by_key(|&p| self.key_rank[p]);
    }

    /// Record positions in tier `tier` for a folded term, in output order.
    pub(super) fn tier_positions(&self, tier: MatchTier, term: &str) -> Vec<usize> {
        match tier {
            MatchTier::Exact => {
                let mut positions = self.by_label[self.exact_range(term)].to_vec();
                self.sort_by_key_rank(&mut positions);
                positions
            }
            MatchTier::Prefix => {
                let exact = self.exact_range(term);
                let prefix = self.prefix_range(term);
                let mut positions = self.by_label[exact.end..prefix.end].to_vec();
                self.sort_by_key_rank(&mut positions);
                positions
            }
            MatchTier::Substring => self
                .by_key
                .iter()
                .copied()
                .filter(|&p| {
                    let label = &self.folded[p].label;
                    !label.starts_with(term) && label.contains(term)
                })
                .collect(),
            MatchTier::Container => self
                .by_key
                .iter()
                .copied()
                .filter(|&p| {
                    let fields = &self.folded[p];
                    !fields.label.contains(term)
                        && (fields.package.contains(term) || fields.container.contains(term))
                })
                .collect(),
        }
    }

    /// Check whether tier `tier` has at least one record for a folded term.
    pub(super) fn tier_has_match(&self, tier: MatchTier, term: &str) -> bool {
        match tier {
            MatchTier::Exact => !self.exact_range(term).is_empty(),
            MatchTier::Prefix => self.prefix_range(term).len() > self.exact_range(term).len(),
            MatchTier::Substring => self
                .folded
                .iter()
                .any(|f| !f.label.starts_with(term) && f.label.contains(term)),
            MatchTier::Container => !self.tier_positions(tier, term).is_empty(),
        }
    }
}

impl<'a> IntoIterator for &'a SymbolIndex {
    type Item = &'a SymbolRecord;
    type IntoIter = std::slice::Iter<'a, SymbolRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
