#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let (dll, symbol) = text.split_once('\0').unwrap_or(("kernel32", &*text));

    match symfeat::generate_api_features(symbol, 0x1000) {
        Ok(out) => assert!((1..=4).contains(&out.len())),
        Err(_) => assert!(symbol.matches('.').count() > 1),
    }
    let out = symfeat::generate_import_features(dll, symbol, 0x2000);
    assert!((1..=4).contains(&out.len()));
});
