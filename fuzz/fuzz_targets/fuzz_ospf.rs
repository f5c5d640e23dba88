//! Fuzz target for the OSPF header dissector.
//!
//! Exercises:
//! - Fixed header field reads and truncation at every offset
//! - Packet type and authentication type table lookups
//! - Cryptographic authentication sub-layout selection

#![no_main]

use libfuzzer_sys::fuzz_target;
use layerdissect_core::dissect_ospf;

fuzz_target!(|data: &[u8]| {
    match dissect_ospf(data) {
        Ok(result) => {
            // Consumption never depends on the declared length
            assert_eq!(result.length, 24);
            assert!(data.len() >= 24);
        }
        Err(err) => {
            assert!(err.is_truncated());
            assert!(data.len() < 24);
        }
    }
});
