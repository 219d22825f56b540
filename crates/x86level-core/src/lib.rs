//! # x86level-core
//!
//! Core abstractions for x86level. This crate defines the microarchitecture
//! level lattice, operand register classification, and the tokenizer for
//! assembly listing lines.

pub mod level;
pub mod line;
pub mod register;

pub use level::Level;
pub use line::{InstructionLine, Line, CONTEXT_MARKER};
pub use register::{canonical_register, evex_register_width, register_width, RegisterWidth};
