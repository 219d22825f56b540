//! Tiered instruction catalog.

use x86level_core::Level;

use crate::{tables, CatalogError, MnemonicSet};

/// Instruction tables for the four x86-64 levels plus the set of
/// register-sensitive mnemonics.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    tiers: [MnemonicSet<'a>; 4],
    register_sensitive: MnemonicSet<'a>,
}

static X86_64: Catalog<'static> = Catalog {
    tiers: [
        MnemonicSet::presorted(tables::V1),
        MnemonicSet::presorted(tables::V2),
        MnemonicSet::presorted(tables::V3),
        MnemonicSet::presorted(tables::V4),
    ],
    register_sensitive: MnemonicSet::presorted(tables::REGISTER_SENSITIVE),
};

impl Catalog<'static> {
    /// Returns the built-in x86-64 catalog.
    pub fn x86_64() -> &'static Catalog<'static> {
        &X86_64
    }
}

impl<'a> Catalog<'a> {
    /// Builds a catalog from caller-provided tables.
    ///
    /// Every table must be strictly sorted.
    pub fn new(
        v1: &'a [&'a str],
        v2: &'a [&'a str],
        v3: &'a [&'a str],
        v4: &'a [&'a str],
        register_sensitive: &'a [&'a str],
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            tiers: [
                MnemonicSet::new("v1", v1)?,
                MnemonicSet::new("v2", v2)?,
                MnemonicSet::new("v3", v3)?,
                MnemonicSet::new("v4", v4)?,
            ],
            register_sensitive: MnemonicSet::new("register-sensitive", register_sensitive)?,
        })
    }

    /// Returns the table for `level`, or `None` for [`Level::None`].
    fn tier(&self, level: Level) -> Option<&MnemonicSet<'a>> {
        level.tier_index().map(|index| &self.tiers[index])
    }

    /// Returns true if `mnemonic` is listed in the table for `level`.
    pub fn contains(&self, level: Level, mnemonic: &str) -> bool {
        self.tier(level).is_some_and(|set| set.contains(mnemonic))
    }

    /// Returns the highest table that lists `mnemonic`.
    pub fn raw_level(&self, mnemonic: &str) -> Option<Level> {
        Level::TIERS
            .iter()
            .rev()
            .copied()
            .find(|&level| self.contains(level, mnemonic))
    }

    /// Returns true if the level of `mnemonic` must be decided from the
    /// width of its first two operands.
    pub fn is_register_sensitive(&self, mnemonic: &str) -> bool {
        self.register_sensitive.contains(mnemonic)
    }

    /// Returns true if `mnemonic` is an AVX instruction that also has an
    /// AVX-512 (EVEX) form, i.e. it is listed in both the v3 and v4 tables.
    pub fn is_evex_promotable(&self, mnemonic: &str) -> bool {
        self.contains(Level::V3, mnemonic) && self.contains(Level::V4, mnemonic)
    }

    /// Returns the number of mnemonics in the table for `level`.
    pub fn tier_len(&self, level: Level) -> usize {
        self.tier(level).map_or(0, |set| set.len())
    }
}
