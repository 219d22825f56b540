//! # x86level-catalog
//!
//! Instruction tables for x86level. Mnemonics are grouped by the lowest
//! x86-64 microarchitecture level that provides them:
//! - v1: baseline x86-64 with x87, MMX, SSE and SSE2
//! - v2: SSE3, SSSE3, SSE4.1, SSE4.2, POPCNT, LAHF/SAHF, CMPXCHG16B
//! - v3: AVX, AVX2, BMI1, BMI2, F16C, FMA, LZCNT, OSXSAVE
//! - v4: AVX-512
//!
//! Tables are static sorted slices queried by binary search.

pub mod catalog;
pub mod error;
pub mod set;
pub mod tables;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use set::MnemonicSet;
