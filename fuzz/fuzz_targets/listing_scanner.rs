#![no_main]

use libfuzzer_sys::fuzz_target;
use x86level_analysis::{Aggregate, LineClassifier, StreamScanner};
use x86level_catalog::Catalog;
use x86level_core::InstructionLine;

fuzz_target!(|data: &[u8]| {
    let catalog = Catalog::x86_64();

    // Scanning arbitrary bytes must never panic; overlong lines may fail
    let mut scanner = StreamScanner::new(catalog);
    let mut aggregate = Aggregate::new();
    let _ = scanner.scan(data, &mut aggregate, |_, _| {});

    // Every line classifies to the same result twice
    let classifier = LineClassifier::new(catalog);
    let text = String::from_utf8_lossy(data);
    for raw in text.lines().take(100) {
        let line = InstructionLine::new(raw);
        assert_eq!(classifier.classify(&line), classifier.classify(&line));
    }
});
