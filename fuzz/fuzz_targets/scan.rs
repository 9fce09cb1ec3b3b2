#![no_main]

use libfuzzer_sys::fuzz_target;
use runelex::toolchain::{json, scanner, source};

fuzz_target!(|data: &[u8]| {
    let source = source::SourceBuffer::new_from_bytes(data, "fuzz_targets/scan.rs");
    let mut diags = runelex::toolchain::diagnostics::NullDiagnosticConsumer {};
    let config = scanner::ScanConfig::recovering(None);
    let buffer = scanner::TokenizedBuffer::tokenize(&source, json::scan, &config, &mut diags);
    assert_eq!(buffer.tokens().last().map(|t| t.kind), Some(scanner::TokenType::EOF));
});
