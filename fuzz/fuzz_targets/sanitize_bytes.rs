//! Fuzz target for the byte-input sanitizer path.
//!
//! This fuzzer feeds arbitrary byte sequences to the sanitizer, checking
//! for panics, crashes, or hangs. Decode and malformed-value rejections are
//! expected; anything else panics inside the harness so libFuzzer records
//! the input.
//!
//! Run with:
//!   cargo +nightly fuzz run sanitize_bytes
//!
//! Or with a corpus:
//!   cargo +nightly fuzz run sanitize_bytes fuzz/corpus/sanitize_bytes/

#![no_main]

use jscrub::harness::fuzz_sanitize_bytes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid OOM on very large inputs.
    // 10MB is generous for JSON documents.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    fuzz_sanitize_bytes(data);
});
