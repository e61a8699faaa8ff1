#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing with unknown-key tracking - this should never panic
        let _ = deckhand::config::parse_with_warnings(std::path::Path::new("fuzz.toml"), content);
        let _ = toml::from_str::<deckhand::Config>(content);
    }
});
