#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(code) = std::str::from_utf8(data) {
        if let Ok(bytes) = iscc::codec::decode(code) {
            let reencoded = iscc::codec::encode(&bytes).unwrap();
            assert_eq!(reencoded, code);
        }
    }
});
