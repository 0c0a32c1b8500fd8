//! Tiered query engine.
//!
//! Each matching record lands in exactly one tier:
//! - exact: the folded label equals the term
//! - prefix: the folded label starts with the term
//! - substring: the folded label contains the term elsewhere
//! - container: only the package or container name contains the term
//!
//! Tiers are produced lazily in the configured order; within a tier records
//! are ordered by package, container, label and then corpus position.

use crate::config::{FallbackMode, MatchTier, RankingConfig};
use crate::record::SymbolRecord;
use crate::{Result, SymdexError};

use super::symbol_index::{fold, SymbolIndex};

/// Case-fold a search term.
///
/// Whitespace is significant: labels carry it inside parameter lists.
/// Returns [`SymdexError::InvalidQuery`] for an empty term.
pub fn normalize_term(term: &str) -> Result<String> {
    if term.is_empty() {
        return Err(SymdexError::invalid_query("search term is empty"));
    }
    Ok(fold(term))
}

/// Search `index` with its configured ranking.
pub fn search<'a>(index: &'a SymbolIndex, term: &str) -> Result<SearchResults<'a>> {
    index.search(term)
}

/// One search result and the tier it matched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub record: &'a SymbolRecord,
    pub tier: MatchTier,
}

/// Lazy, finite sequence of search hits.
///
/// A tier is computed only once the previous tier is exhausted. Cloning
/// replays the remaining hits without touching the index.
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    index: &'a SymbolIndex,
    term: String,
    pending: std::vec::IntoIter<MatchTier>,
    label_tiers: Vec<MatchTier>,
    fallback: FallbackMode,
    current_tier: Option<MatchTier>,
    current: std::vec::IntoIter<usize>,
    label_matched: bool,
}

impl<'a> SearchResults<'a> {
    pub(super) fn new(index: &'a SymbolIndex, term: &str, ranking: &RankingConfig) -> Result<Self> {
        let term = normalize_term(term)?;
        let tiers = ranking.effective_tiers();
        let label_tiers = tiers
            .iter()
            .copied()
            .filter(|tier| tier.is_label_tier())
            .collect();
        Ok(Self {
            index,
            term,
            pending: tiers.into_iter(),
            label_tiers,
            fallback: ranking.container_fallback,
            current_tier: None,
            current: Vec::new().into_iter(),
            label_matched: false,
        })
    }

    /// The folded term being searched.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Collect only the records, dropping tier information.
    pub fn records(self) -> Vec<&'a SymbolRecord> {
        self.map(|hit| hit.record).collect()
    }

    fn advance_tier(&mut self) -> bool {
        #[allow(clippy::while_let_on_iterator)]
        while let Some(tier) = self.pending.next() {
            let positions = if tier == MatchTier::Container && !self.container_enabled() {
                Vec::new()
            } else {
                self.index.tier_positions(tier, &self.term)
            };
            if positions.is_empty() {
                continue;
            }
            if tier.is_label_tier() {
                self.label_matched = true;
            }
            self.current_tier = Some(tier);
            self.current = positions.into_iter();
            return true;
        }
        false
    }

    fn container_enabled(&self) -> bool {
        match self.fallback {
            FallbackMode::Always => true,
            // Enabled label tiers ordered after the container tier have not
            // run yet, so ask the index directly. Disabled tiers never count.
            FallbackMode::WhenNoLabelMatch => {
                !self.label_matched
                    && !self
                        .label_tiers
                        .iter()
                        .any(|&tier| self.index.tier_has_match(tier, &self.term))
            }
        }
    }
}

impl<'a> Iterator for SearchResults<'a> {
    type Item = SearchHit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let (Some(position), Some(tier)) = (self.current.next(), self.current_tier) {
                let record = self.index.get(position)?;
                return Some(SearchHit { record, tier });
            }
            if !self.advance_tier() {
                return None;
            }
        }
    }
}

impl std::iter::FusedIterator for SearchResults<'_> {}
