//! Per-line level classification.
//!
//! Each token of a line is looked up in the catalog tier by tier (v1 first,
//! v4 last). A token proposes the highest tier whose table lists it; the
//! line's level only ever moves up. Two kinds of mnemonics do not trust
//! the table they were found in:
//!
//! - register-sensitive mnemonics (`VMOVNTDQ` and friends) are re-decided
//!   from the widest of their first two operands: AVX-512 → v4, AVX → v3,
//!   anything else → v2;
//! - EVEX-promotable mnemonics (listed as both AVX and AVX-512) need v4 only
//!   when some operand needs EVEX: a `Z` or `K` register, or one of
//!   `X16`..`X31` and `Y16`..`Y31`. Otherwise they need v3.

use x86level_catalog::Catalog;
use x86level_core::{canonical_register, evex_register_width, register_width, InstructionLine, Level, RegisterWidth};

/// Number of operands inspected for register-sensitive mnemonics.
const SENSITIVE_OPERANDS: usize = 2;

/// How a token's tier was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Plain table membership.
    Table,
    /// Register-sensitive mnemonic re-decided from operand widths.
    RegisterWidth(RegisterWidth),
    /// AVX mnemonic with an EVEX form, decided from operand widths.
    Evex(RegisterWidth),
}

/// A catalog hit on one token of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding<'a> {
    /// Index of the token within the line.
    pub index: usize,
    /// The matched mnemonic.
    pub mnemonic: &'a str,
    /// The tier this token resolved to.
    pub level: Level,
    /// How the tier was decided.
    pub resolution: Resolution,
}

/// The outcome of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification<'a> {
    /// Minimum level required by the line.
    pub level: Level,
    /// The last token that raised the line's level.
    pub mnemonic: Option<&'a str>,
    /// Every catalog hit on the line, in token order.
    pub findings: Vec<Finding<'a>>,
}

/// Classifies instruction lines against a catalog.
///
/// The classifier holds no state between lines, so one instance can be
/// shared by any number of streams.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'c> {
    catalog: &'c Catalog<'c>,
}

impl<'c> LineClassifier<'c> {
    /// Creates a classifier over `catalog`.
    pub fn new(catalog: &'c Catalog<'c>) -> Self {
        Self { catalog }
    }

    /// Determines the level of one line.
    pub fn classify<'a>(&self, line: &InstructionLine<'a>) -> Classification<'a> {
        let mut result = Classification::default();

        for (index, &token) in line.tokens().iter().enumerate() {
            let Some(proposed) = self.table_level(token, result.level) else {
                continue;
            };

            let (level, resolution) = if self.catalog.is_register_sensitive(token) {
                let width = widest_operand(line, index, SENSITIVE_OPERANDS, register_width);
                (width.required_level(), Resolution::RegisterWidth(width))
            } else if proposed == Level::V4 && self.catalog.is_evex_promotable(token) {
                let width = widest_operand(line, index, usize::MAX, evex_register_width);
                let level = if width == RegisterWidth::Avx512 {
                    Level::V4
                } else {
                    Level::V3
                };
                (level, Resolution::Evex(width))
            } else {
                (proposed, Resolution::Table)
            };

            result.findings.push(Finding {
                index,
                mnemonic: token,
                level,
                resolution,
            });

            if level > result.level {
                result.level = level;
                result.mnemonic = Some(token);
            }
        }

        result
    }

    /// Checks the tier tables in escalation order and returns the last one
    /// that lists `token`.
    ///
    /// A tier below `mode` cannot change the outcome and is skipped; the v4
    /// table is always consulted.
    fn table_level(&self, token: &str, mode: Level) -> Option<Level> {
        let mut found = None;
        for level in Level::TIERS {
            if level != Level::V4 && mode > level {
                continue;
            }
            if self.catalog.contains(level, token) {
                found = Some(level);
            }
        }
        found
    }
}

/// Returns the widest register among up to `count` operands following the
/// token at `index`, as classified by `width`. Missing operands count as
/// [`RegisterWidth::Unknown`].
fn widest_operand(
    line: &InstructionLine<'_>,
    index: usize,
    count: usize,
    width: fn(&str) -> RegisterWidth,
) -> RegisterWidth {
    let first = index + 1;
    let last = first.saturating_add(count);
    (first..last)
        .map_while(|i| line.operand(i))
        .map(|operand| width(canonical_register(operand)))
        .max()
        .unwrap_or(RegisterWidth::Unknown)
}
