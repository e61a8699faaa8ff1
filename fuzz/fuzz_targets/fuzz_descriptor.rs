#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(decoded) = deckhand::infrastructure::descriptor::decode_descriptor("fuzz", text) {
            assert!(decoded.id.as_str().starts_with('/'));
        }
    }
});
