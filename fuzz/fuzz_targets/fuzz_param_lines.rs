#![no_main]

use deckhand::domain::services::parse_param_lines;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        for (key, _) in parse_param_lines(content) {
            assert!(!key.contains('\n'));
        }
    }
});
