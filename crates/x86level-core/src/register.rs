//! Operand register classification.
//!
//! Register names follow the Go assembler convention used in compiler
//! listings: `X0`..`X31` for 128-bit SSE registers, `Y0`..`Y31` for 256-bit
//! AVX registers, `Z0`..`Z31` for 512-bit AVX-512 registers and `K0`..`K7`
//! for AVX-512 opmask registers.

use crate::Level;

/// Number of vector registers per width (`X0`..`X31`).
const VECTOR_REGISTERS: u8 = 32;

/// Number of vector registers reachable through a VEX encoding (`X0`..`X15`).
const VEX_REGISTERS: u8 = 16;

/// Number of AVX-512 opmask registers (`K0`..`K7`).
const MASK_REGISTERS: u8 = 8;

/// Width class of a register operand.
///
/// Ordered by the level each class demands, so the widest of several
/// operands is simply their maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RegisterWidth {
    /// Not a vector register (general purpose, memory, immediate, garbage).
    Unknown,
    /// 128-bit SSE register (`X<n>`).
    Legacy,
    /// 256-bit AVX register (`Y<n>`).
    Avx,
    /// 512-bit AVX-512 register (`Z<n>`) or opmask register (`K<n>`).
    Avx512,
}

impl RegisterWidth {
    /// Returns the level a width-dependent instruction needs when this is
    /// the widest register it touches.
    ///
    /// Legacy and unknown widths both fall back to [`Level::V2`].
    pub fn required_level(self) -> Level {
        match self {
            Self::Avx512 => Level::V4,
            Self::Avx => Level::V3,
            Self::Legacy | Self::Unknown => Level::V2,
        }
    }
}

/// Extracts the register name from an operand token.
///
/// Memory operands carry their base register in parentheses (`8(SP)`,
/// `(AX)(CX*8)`); for those the content of the first parenthesised group is
/// returned. Any other token is returned unchanged. Trailing commas must be
/// stripped by the caller.
pub fn canonical_register(operand: &str) -> &str {
    let Some(open) = operand.find('(') else {
        return operand;
    };
    let rest = &operand[open + 1..];
    let group = match rest.find('(') {
        Some(next) => &rest[..next],
        None => rest,
    };
    match group.rfind(')') {
        Some(close) => &group[..close],
        None => operand,
    }
}

/// Classifies a canonical register name by width.
pub fn register_width(name: &str) -> RegisterWidth {
    if is_numbered(name, 'X', VECTOR_REGISTERS) {
        RegisterWidth::Legacy
    } else if is_numbered(name, 'Y', VECTOR_REGISTERS) {
        RegisterWidth::Avx
    } else if is_numbered(name, 'Z', VECTOR_REGISTERS) || is_numbered(name, 'K', MASK_REGISTERS) {
        RegisterWidth::Avx512
    } else {
        RegisterWidth::Unknown
    }
}

/// Classifies a register name as seen by an instruction with an EVEX form.
///
/// `X16`..`X31` and `Y16`..`Y31` can only be encoded with EVEX, so they count
/// as [`RegisterWidth::Avx512`] here. Everything else is classified by
/// [`register_width`].
pub fn evex_register_width(name: &str) -> RegisterWidth {
    match register_width(name) {
        RegisterWidth::Legacy | RegisterWidth::Avx if is_evex_only(name) => RegisterWidth::Avx512,
        width => width,
    }
}

/// Returns true for vector registers outside the VEX encoding range.
fn is_evex_only(name: &str) -> bool {
    ['X', 'Y']
        .into_iter()
        .any(|prefix| is_numbered(name, prefix, VECTOR_REGISTERS) && !is_numbered(name, prefix, VEX_REGISTERS))
}

/// Returns true if `name` is `prefix` followed by a decimal number below
/// `limit`, written without sign or leading zeros.
fn is_numbered(name: &str, prefix: char, limit: u8) -> bool {
    let Some(digits) = name.strip_prefix(prefix) else {
        return false;
    };
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.len() == 2 && digits.starts_with('0') {
        return false;
    }
    digits.parse::<u8>().is_ok_and(|n| n < limit)
}
