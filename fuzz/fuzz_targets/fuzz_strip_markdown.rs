#![no_main]

use folio_core::markdown::strip_markdown;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let plain = strip_markdown(source);
        assert!(!plain.starts_with(char::is_whitespace));
    }
});
