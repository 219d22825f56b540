//! Literal mnemonic tables.
//!
//! Every table is sorted in byte order with no duplicates. A mnemonic may
//! appear in more than one tier table: the AVX-512 table lists every AVX
//! mnemonic that gained an EVEX encoding, and a few v2 instructions are
//! also part of the baseline table.

mod v1;
mod v2;
mod v3;
mod v4;

pub use v1::V1;
pub use v2::V2;
pub use v3::V3;
pub use v4::V4;

/// Mnemonics whose required level depends on the width of their register
/// operands rather than on the mnemonic alone.
///
/// `VMOVNTDQ`, for example, is AVX with `Y` registers, AVX-512 with `Z`
/// registers and needs only SSE-class support with `X` registers.
pub static REGISTER_SENSITIVE: &[&str] = &["PUNPCKHQDQ", "VMOVDQU", "VMOVNTDQ", "VMOVNTDQA"];
