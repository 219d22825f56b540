//! Property-based tests for tokenization and register classification.
//!
//! These tests verify invariants that should hold for arbitrary input:
//! - Tokenizing and classifying never panic, including on non-ASCII text
//! - Canonical register names are always a substring of the operand
//! - Width classification only accepts well-formed register names

use proptest::prelude::*;

use x86level_core::{canonical_register, register_width, Line, RegisterWidth};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Parsing arbitrary text never panics.
    #[test]
    fn parse_never_panics(text in "\\PC*") {
        let _ = Line::parse(&text);
    }

    /// Context labels are a suffix of the original line.
    #[test]
    fn context_is_suffix(label in "\\PC*", sep in "[ \t:é]") {
        let text = format!("TEXT{}{}", sep, label);
        match Line::parse(&text) {
            Line::Context(context) => prop_assert!(text.ends_with(context)),
            Line::Instruction(_) => prop_assert!(false, "expected a context line for {:?}", text),
        }
    }

    /// The canonical register is always a substring of the operand.
    #[test]
    fn canonical_register_is_substring(operand in "[A-Z0-9()$*+-]{0,16}") {
        let name = canonical_register(&operand);
        prop_assert!(operand.contains(name));
    }

    /// A parenthesised register is always recovered from a memory operand.
    #[test]
    fn memory_operand_yields_base(offset in -4096i32..4096, reg in "[A-Z][A-Z0-9]{0,3}") {
        let operand = format!("{}({})", offset, reg);
        prop_assert_eq!(canonical_register(&operand), reg.as_str());
    }

    /// Vector registers classify by their prefix.
    #[test]
    fn vector_registers_classify(n in 0u8..32) {
        prop_assert_eq!(register_width(&format!("X{}", n)), RegisterWidth::Legacy);
        prop_assert_eq!(register_width(&format!("Y{}", n)), RegisterWidth::Avx);
        prop_assert_eq!(register_width(&format!("Z{}", n)), RegisterWidth::Avx512);
    }

    /// Out-of-range register numbers are not registers.
    #[test]
    fn out_of_range_registers_unknown(n in 32u32..1000) {
        prop_assert_eq!(register_width(&format!("X{}", n)), RegisterWidth::Unknown);
        prop_assert_eq!(register_width(&format!("Z{}", n)), RegisterWidth::Unknown);
    }
}
