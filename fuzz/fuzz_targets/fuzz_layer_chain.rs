//! Fuzz target for the layer chain.
//!
//! OSPF runs directly over IP (protocol 89). Tests:
//! - Body dissector selection from the header's child hints
//! - Declared length vs. available bytes in every body dissector
//! - LS Update LSA counts that exceed the packet
//! - Opaque payload fallback and nested failure recording

#![no_main]

use libfuzzer_sys::fuzz_target;
use layerdissect_core::{default_registry, ChainConfig, LayerChain, ParseContext};

fuzz_target!(|data: &[u8]| {
    let registry = default_registry();
    let entry = ParseContext::new().with_hint("ip_protocol", 89);

    let _ = LayerChain::new(&registry).dissect(&entry, data);

    // Same input with opaque payload capture disabled
    let config = ChainConfig::default().with_capture_payload(false);
    let _ = LayerChain::with_config(&registry, config).dissect(&entry, data);
});
