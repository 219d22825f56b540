//! x86-64 microarchitecture feature levels.

use std::fmt;

/// Minimum x86-64 microarchitecture level required to execute an instruction.
///
/// Levels form a total order: `None < V1 < V2 < V3 < V4`. `None` means that
/// nothing on the line was recognised as an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// No instruction recognised.
    #[default]
    None,
    /// Baseline x86-64 (CMOV, CX8, FPU, FXSR, MMX, SSE, SSE2).
    V1,
    /// CMPXCHG16B, LAHF/SAHF, POPCNT, SSE3, SSSE3, SSE4.1, SSE4.2.
    V2,
    /// AVX, AVX2, BMI1, BMI2, F16C, FMA, LZCNT, OSXSAVE.
    V3,
    /// AVX-512 F/BW/CD/DQ/VL.
    V4,
}

impl Level {
    /// The four real tiers in escalation order.
    pub const TIERS: [Level; 4] = [Level::V1, Level::V2, Level::V3, Level::V4];

    /// Returns the numeric level, `0` for [`Level::None`].
    pub fn number(self) -> u8 {
        match self {
            Self::None => 0,
            Self::V1 => 1,
            Self::V2 => 2,
            Self::V3 => 3,
            Self::V4 => 4,
        }
    }

    /// Returns the zero-based index of this tier, or `None` for [`Level::None`].
    pub fn tier_index(self) -> Option<usize> {
        match self {
            Self::None => None,
            other => Some(other.number() as usize - 1),
        }
    }

    /// Returns the lowercase name of this level.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
            Self::V4 => "v4",
        }
    }

    /// Returns the value of `GOAMD64` that gates this level, e.g. `v3`.
    ///
    /// [`Level::None`] renders as `v0`.
    pub fn goamd64(self) -> String {
        format!("v{}", self.number())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
