#![no_main]

use deckhand::domain::services::{placeholders, substitute};
use deckhand::domain::value_objects::ParameterSet;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(template) = std::str::from_utf8(data) {
        let params = ParameterSet::new().layered([("A", "1"), ("B", "${A}")]);

        // Lenient substitution never fails and leaves unknown names in place
        let lenient = substitute(template, &params, false).expect("lenient substitution");
        let names = placeholders(template);
        for name in &lenient.unresolved {
            assert!(names.contains(name));
        }

        let _ = substitute(template, &params, true);
    }
});
