#![no_main]

use libfuzzer_sys::fuzz_target;
use pagepush::domain::value_objects::PendingChanges;

fuzz_target!(|data: &[u8]| {
    let porcelain = String::from_utf8_lossy(data);
    let pending = PendingChanges::parse(&porcelain);
    assert_eq!(pending.has_staged(), !pending.staged.is_empty());
});
