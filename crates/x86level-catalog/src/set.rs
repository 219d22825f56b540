//! Sorted mnemonic sets.

use crate::CatalogError;

/// An immutable set of mnemonics backed by a sorted slice.
///
/// Membership is an exact, case-sensitive binary search.
#[derive(Debug, Clone, Copy)]
pub struct MnemonicSet<'a> {
    entries: &'a [&'a str],
}

impl<'a> MnemonicSet<'a> {
    /// Creates a set from a slice, verifying that it is strictly sorted.
    pub fn new(table: &'static str, entries: &'a [&'a str]) -> Result<Self, CatalogError> {
        if let Some(index) = entries.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(CatalogError::unsorted(table, index + 1, entries[index], entries[index + 1]));
        }
        Ok(Self { entries })
    }

    /// Creates a set from a slice that is already known to be strictly sorted.
    pub(crate) const fn presorted(entries: &'a [&'a str]) -> Self {
        Self { entries }
    }

    /// Returns true if `mnemonic` is in the set.
    pub fn contains(&self, mnemonic: &str) -> bool {
        self.entries
            .binary_search_by(|probe| (*probe).cmp(mnemonic))
            .is_ok()
    }

    /// Returns the number of mnemonics in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
