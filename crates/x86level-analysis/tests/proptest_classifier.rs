//! Property-based tests for line classification and aggregation.
//!
//! These tests verify invariants that should hold for every input:
//! - Classification never panics and is deterministic
//! - A line's level is never below the unconditional level of any token
//! - Register-sensitive mnemonics follow operand width precedence
//! - The global maximum and counters do not depend on line order
//! - Unmatched lines leave the aggregate untouched

use proptest::prelude::*;

use x86level_analysis::{Aggregate, LineClassifier};
use x86level_catalog::Catalog;
use x86level_core::{InstructionLine, Level, RegisterWidth};

/// Mnemonics drawn from every tier plus the register-sensitive ones.
const MNEMONICS: &[&str] = &[
    "MOVQ", "RET", "CALL", "ADD", "PUNPCKHQDQ", "LAHF", "POPCNT", "PSHUFB", "PCMPESTRI", "VZEROUPPER",
    "VMOVDQA", "VFMADD213PD", "VADDPS", "VMOVDQU", "VMOVNTDQ", "VMOVNTDQA", "VPTERNLOGD", "KMOVW",
];

const OPERANDS: &[&str] = &[
    "X0,", "X15", "Y3,", "Y31", "Z0,", "Z27", "K1,", "(AX)", "8(SP),", "(AX)(CX*8)", "$0x10,", "AX,", "BX",
];

const SENSITIVE: &[&str] = &["PUNPCKHQDQ", "VMOVDQU", "VMOVNTDQ", "VMOVNTDQA"];

/// Mnemonics listed in both the AVX and AVX-512 tables.
const EVEX_PROMOTABLE: &[&str] = &["VADDPS", "VFMADD213PD", "VPADDD", "VMULPD", "VSUBPS"];

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(MNEMONICS).prop_map(str::to_string),
        prop::sample::select(OPERANDS).prop_map(str::to_string),
        "[a-z0-9.:]{1,8}",
    ]
}

fn line_text() -> impl Strategy<Value = String> {
    prop::collection::vec(token(), 0..8).prop_map(|tokens| tokens.join(" "))
}

/// Level a token guarantees regardless of its operands.
///
/// Register-sensitive mnemonics can fall back to v2. EVEX-promotable ones
/// need at least v3 and reach v4 only through their operands (a `Z`/`K`
/// register or a vector register numbered 16 and up).
fn unconditional_level(catalog: &Catalog<'_>, token: &str) -> Level {
    if catalog.is_register_sensitive(token) {
        Level::V2
    } else if catalog.is_evex_promotable(token) {
        Level::V3
    } else {
        catalog.raw_level(token).unwrap_or(Level::None)
    }
}

fn register(width: RegisterWidth, n: u8) -> String {
    match width {
        RegisterWidth::Legacy => format!("X{}", n),
        RegisterWidth::Avx => format!("Y{}", n),
        RegisterWidth::Avx512 => format!("Z{}", n),
        RegisterWidth::Unknown => "(AX)".to_string(),
    }
}

fn width() -> impl Strategy<Value = RegisterWidth> {
    prop::sample::select(vec![
        RegisterWidth::Unknown,
        RegisterWidth::Legacy,
        RegisterWidth::Avx,
        RegisterWidth::Avx512,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Classifying arbitrary text never panics.
    #[test]
    fn classify_never_panics(text in "\\PC*") {
        let classifier = LineClassifier::new(Catalog::x86_64());
        let _ = classifier.classify(&InstructionLine::new(&text));
    }

    /// Classification is deterministic.
    #[test]
    fn classify_is_deterministic(text in line_text()) {
        let classifier = LineClassifier::new(Catalog::x86_64());
        let line = InstructionLine::new(&text);
        prop_assert_eq!(classifier.classify(&line), classifier.classify(&line));
    }

    /// The line level dominates every token's unconditional level.
    #[test]
    fn level_is_monotonic(text in line_text()) {
        let catalog = Catalog::x86_64();
        let classifier = LineClassifier::new(catalog);
        let line = InstructionLine::new(&text);
        let result = classifier.classify(&line);
        for token in line.tokens() {
            prop_assert!(
                result.level >= unconditional_level(catalog, token),
                "{:?} classified {:?} below token {}", text, result.level, token
            );
        }
        prop_assert_eq!(result.mnemonic.is_some(), result.level != Level::None);
    }

    /// The recorded mnemonic is the first token that reached the line's level.
    #[test]
    fn representative_matches_level(text in line_text()) {
        let classifier = LineClassifier::new(Catalog::x86_64());
        let result = classifier.classify(&InstructionLine::new(&text));
        if let Some(mnemonic) = result.mnemonic {
            let finding = result.findings.iter().find(|f| f.level == result.level).unwrap();
            prop_assert_eq!(finding.mnemonic, mnemonic);
        }
    }

    /// Register-sensitive mnemonics take the level of their widest operand.
    #[test]
    fn register_sensitive_precedence(
        mnemonic in prop::sample::select(SENSITIVE),
        first in width(),
        second in width(),
        n in 0u8..32,
    ) {
        let text = format!("{} {}, {}", mnemonic, register(first, n), register(second, n));
        let classifier = LineClassifier::new(Catalog::x86_64());
        let result = classifier.classify(&InstructionLine::new(&text));
        prop_assert_eq!(result.level, first.max(second).required_level());
    }

    /// An EVEX-promotable mnemonic touching a register numbered 16 and up
    /// needs v4, at any operand position and in either vector width.
    #[test]
    fn high_registers_need_avx512(
        mnemonic in prop::sample::select(EVEX_PROMOTABLE),
        prefix in prop::sample::select(vec!['X', 'Y']),
        high in 16u8..32,
        low in 0u8..16,
        position in 0usize..3,
    ) {
        let mut operands = vec![format!("{}{}", prefix, low); 3];
        operands[position] = format!("{}{}", prefix, high);
        let text = format!("{} {}", mnemonic, operands.join(", "));
        let classifier = LineClassifier::new(Catalog::x86_64());
        prop_assert_eq!(classifier.classify(&InstructionLine::new(&text)).level, Level::V4, "{}", text);
    }

    /// Without a register numbered 16 and up, an EVEX-promotable mnemonic
    /// on X/Y registers stays at v3.
    #[test]
    fn low_registers_stay_avx(
        mnemonic in prop::sample::select(EVEX_PROMOTABLE),
        prefix in prop::sample::select(vec!['X', 'Y']),
        regs in prop::collection::vec(0u8..16, 1..4),
    ) {
        let operands: Vec<String> = regs.iter().map(|n| format!("{}{}", prefix, n)).collect();
        let text = format!("{} {}", mnemonic, operands.join(", "));
        let classifier = LineClassifier::new(Catalog::x86_64());
        prop_assert_eq!(classifier.classify(&InstructionLine::new(&text)).level, Level::V3, "{}", text);
    }

    /// Lines that match nothing leave the aggregate untouched.
    #[test]
    fn unmatched_lines_are_noops(text in "[a-z0-9 .:,]{0,40}") {
        let classifier = LineClassifier::new(Catalog::x86_64());
        let result = classifier.classify(&InstructionLine::new(&text));
        prop_assert_eq!(result.level, Level::None);

        let mut agg = Aggregate::new();
        agg.record(&result);
        prop_assert_eq!(agg, Aggregate::new());
    }

    /// Totals and the global maximum do not depend on line order.
    #[test]
    fn aggregate_is_order_independent(
        lines in prop::collection::vec(line_text(), 0..20)
            .prop_flat_map(|lines| (Just(lines.clone()), Just(lines).prop_shuffle()))
    ) {
        let classifier = LineClassifier::new(Catalog::x86_64());
        let (original, shuffled) = lines;

        let mut a = Aggregate::new();
        for text in &original {
            a.record(&classifier.classify(&InstructionLine::new(text)));
        }
        let mut b = Aggregate::new();
        for text in &shuffled {
            b.record(&classifier.classify(&InstructionLine::new(text)));
        }
        prop_assert_eq!(a, b);
    }

    /// The global maximum never decreases while recording.
    #[test]
    fn global_max_is_monotonic(lines in prop::collection::vec(line_text(), 0..20)) {
        let classifier = LineClassifier::new(Catalog::x86_64());
        let mut agg = Aggregate::new();
        let mut previous = Level::None;
        for text in &lines {
            agg.record(&classifier.classify(&InstructionLine::new(text)));
            prop_assert!(agg.global_max() >= previous);
            previous = agg.global_max();
        }
    }

    /// Merging per-stream aggregates equals aggregating the concatenation.
    #[test]
    fn merge_matches_concatenation(
        first in prop::collection::vec(line_text(), 0..10),
        second in prop::collection::vec(line_text(), 0..10),
    ) {
        let classifier = LineClassifier::new(Catalog::x86_64());
        let fold = |lines: &[String]| {
            let mut agg = Aggregate::new();
            for text in lines {
                agg.record(&classifier.classify(&InstructionLine::new(text)));
            }
            agg
        };

        let mut merged = fold(&first[..]);
        merged.merge(&fold(&second[..]));

        let all: Vec<String> = first.iter().chain(second.iter()).cloned().collect();
        prop_assert_eq!(merged, fold(&all[..]));
    }
}
