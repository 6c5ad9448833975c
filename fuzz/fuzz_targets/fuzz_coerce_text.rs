#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The coercion parser promises to never panic on any text input
    let text = String::from_utf8_lossy(data);
    let _ = marketlens::coerce::clean_text(&text);
    let _ = marketlens::coerce::coerce_text(&text);
});
