#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = iscc::data_id(data);
    let _ = iscc::instance_id(data);
    let _ = iscc::content_id_image_from_bytes(data, false);
});
