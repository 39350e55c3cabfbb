#![no_main]

use folio_core::markdown::parse_front_matter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // Errors are expected for malformed YAML; only panics matter
        let _ = parse_front_matter(source);
    }
});
