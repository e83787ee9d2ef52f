#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let normalized = iscc::text::normalize(&iscc::text::pre_normalize(&text));
    assert!(!normalized.contains("  "));
    assert!(iscc::text::trim(&normalized, 128).len() <= 128);
    let _ = iscc::meta_id(&text, "", 1);
    let _ = iscc::content_id_text(&text, false);
});
