//! Per-stream aggregation of classification results.

use std::collections::BTreeMap;

use x86level_core::Level;

use crate::Classification;

/// Running totals for one input stream.
///
/// Holds one operation counter and one mnemonic frequency map per level,
/// plus the highest level seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    operations: [u64; 4],
    frequencies: [BTreeMap<String, u64>; 4],
    global_max: Level,
}

impl Aggregate {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one line's classification into the totals.
    ///
    /// Unmatched lines change nothing.
    pub fn record(&mut self, classification: &Classification<'_>) {
        let Some(tier) = classification.level.tier_index() else {
            return;
        };
        self.operations[tier] += 1;
        if let Some(mnemonic) = classification.mnemonic {
            *self.frequencies[tier].entry(mnemonic.to_string()).or_insert(0) += 1;
        }
        self.global_max = self.global_max.max(classification.level);
    }

    /// Adds another stream's totals to this one.
    pub fn merge(&mut self, other: &Aggregate) {
        for tier in 0..4 {
            self.operations[tier] += other.operations[tier];
            for (mnemonic, count) in &other.frequencies[tier] {
                *self.frequencies[tier].entry(mnemonic.clone()).or_insert(0) += count;
            }
        }
        self.global_max = self.global_max.max(other.global_max);
    }

    /// Returns the highest level recorded so far.
    pub fn global_max(&self) -> Level {
        self.global_max
    }

    /// Returns the number of lines recorded at `level`.
    pub fn operations(&self, level: Level) -> u64 {
        level.tier_index().map_or(0, |tier| self.operations[tier])
    }

    /// Returns the number of lines recorded at any level.
    pub fn total_operations(&self) -> u64 {
        self.operations.iter().sum()
    }

    /// Returns the mnemonic frequencies for `level`, or `None` for
    /// [`Level::None`].
    pub fn frequencies(&self, level: Level) -> Option<&BTreeMap<String, u64>> {
        level.tier_index().map(|tier| &self.frequencies[tier])
    }

    /// Returns the mnemonics for `level` ordered by descending count, then
    /// by name.
    pub fn ranked(&self, level: Level) -> Vec<(&str, u64)> {
        let mut rows: Vec<(&str, u64)> = self
            .frequencies(level)
            .into_iter()
            .flatten()
            .map(|(mnemonic, &count)| (mnemonic.as_str(), count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }
}
