//! Fuzz target for the text-input sanitizer path.
//!
//! This fuzzer exercises the string path: the harness decodes the raw bytes
//! lossily (invalid sequences are dropped), so the sanitizer always receives
//! well-formed text and only malformed-value rejections are expected.

#![no_main]

use jscrub::harness::fuzz_sanitize_str;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    fuzz_sanitize_str(data);
});
