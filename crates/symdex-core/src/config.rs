//! Centralized configuration for symdex.
//!
//! Fixed values (Javadoc file names, variable names) live on constant-only
//! structs; tunables live on `Default`-implementing config structs.

use serde::{Deserialize, Serialize};

/// Javadoc search-index file naming.
pub struct IndexFiles;

impl IndexFiles {
    pub const MEMBER_STEM: &'static str = "member-search-index";
    pub const TYPE_STEM: &'static str = "type-search-index";
    pub const PACKAGE_STEM: &'static str = "package-search-index";

    pub const SCRIPT_EXTENSION: &'static str = "js";
    pub const ARCHIVE_EXTENSION: &'static str = "zip";

    pub const MEMBER_VARIABLE: &'static str = "memberSearchIndex";
    pub const TYPE_VARIABLE: &'static str = "typeSearchIndex";
    pub const PACKAGE_VARIABLE: &'static str = "packageSearchIndex";

    /// Call appended by Javadoc after the array assignment.
    pub const UPDATE_CALL: &'static str = "updateSearchResults();";
}

/// A match tier. Every record that matches a term lands in exactly one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchTier {
    /// Label equals the term (case-insensitive).
    Exact,
    /// Label starts with the term.
    Prefix,
    /// Label contains the term.
    Substring,
    /// Package or container name contains the term; the label does not.
    Container,
}

impl MatchTier {
    pub const ALL: [MatchTier; 4] = [
        MatchTier::Exact,
        MatchTier::Prefix,
        MatchTier::Substring,
        MatchTier::Container,
    ];

    pub fn is_label_tier(self) -> bool {
        !matches!(self, MatchTier::Container)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Prefix => "prefix",
            MatchTier::Substring => "substring",
            MatchTier::Container => "container",
        }
    }
}

/// When the container tier contributes results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FallbackMode {
    /// Always emit container matches in their configured position.
    Always,
    /// Emit container matches only when no label matched at all.
    #[default]
    WhenNoLabelMatch,
}

/// Ordering of match tiers for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankingConfig {
    /// Emission order. Tiers left out are disabled.
    pub tiers: Vec<MatchTier>,
    pub container_fallback: FallbackMode,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            tiers: MatchTier::ALL.to_vec(),
            container_fallback: FallbackMode::default(),
        }
    }
}

impl RankingConfig {
    /// Parse a ranking from JSON, e.g. `{"tiers": ["exact", "container"]}`.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Tier order with duplicates dropped after their first occurrence.
    pub fn effective_tiers(&self) -> Vec<MatchTier> {
        let mut seen = Vec::with_capacity(self.tiers.len());
        for tier in &self.tiers {
            if !seen.contains(tier) {
                seen.push(*tier);
            }
        }
        seen
    }

    /// Put container matches ahead of label substring matches.
    pub fn container_before_substring() -> Self {
        Self {
            tiers: vec![
                MatchTier::Exact,
                MatchTier::Prefix,
                MatchTier::Container,
                MatchTier::Substring,
            ],
            container_fallback: FallbackMode::Always,
        }
    }
}
