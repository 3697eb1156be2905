//! Fuzz target for policy decoding and compilation.
//!
//! Goal: decode + compile should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_json
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use modfence_policy::{CompiledPolicy, Policy};

fuzz_target!(|data: &[u8]| {
    // Policy files must be UTF-8 JSON.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(policy) = Policy::from_json_str(text) {
            // Compilation of a decodable policy must not panic either.
            let _ = CompiledPolicy::compile(&policy);
        }
    }
});
