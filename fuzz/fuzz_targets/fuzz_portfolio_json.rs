#![no_main]

use folio_core::routes::static_paths;
use folio_core::schema::Portfolio;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(portfolio) = serde_json::from_slice::<Portfolio>(data) {
        let routes = static_paths(&portfolio);
        assert_eq!(routes.len(), portfolio.projects.len() + 2);
    }
});
