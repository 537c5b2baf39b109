#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(remote) = std::str::from_utf8(data) {
        if let Some(url) = pagepush::guess_pages_url(remote, ".github.io") {
            assert!(url.starts_with("https://"));
        }
    }
});
