//! One-shot index construction.

use crate::record::SymbolRecord;
use crate::{Result, SymdexError};
use tracing::debug;

use super::symbol_index::SymbolIndex;

/// Build an index from a complete corpus.
///
/// Fails with [`SymdexError::MalformedRecord`] on the first record whose
/// label is empty; no partial index is returned. Whitespace-only labels are
/// valid.
pub fn build<I>(records: I) -> Result<SymbolIndex>
where
    I: IntoIterator<Item = SymbolRecord>,
{
    let mut builder = IndexBuilder::new();
    builder.extend(records);
    builder.finish()
}

/// Accumulates records from one or more sources before building.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    records: Vec<SymbolRecord>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, record: SymbolRecord) -> &mut Self {
        self.records.push(record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate the accumulated corpus and build the index.
    pub fn finish(self) -> Result<SymbolIndex> {
        for (position, record) in self.records.iter().enumerate() {
            validate(position, record)?;
        }

        let index = SymbolIndex::from_validated(self.records);
        debug!(
            "Built symbol index: {} records, {} containers",
            index.len(),
            index.stats().containers
        );
        Ok(index)
    }
}

impl Extend<SymbolRecord> for IndexBuilder {
    fn extend<T: IntoIterator<Item = SymbolRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

fn validate(position: usize, record: &SymbolRecord) -> Result<()> {
    if record.label.is_empty() {
        return Err(SymdexError::MalformedRecord {
            position,
            container: record.container_name.clone(),
            reason: "label is empty".to_string(),
        });
    }
    Ok(())
}
