//! Protocol dissection framework.
//!
//! This module provides:
//! - [`ByteCursor`] for reading wire fields
//! - [`CodeTable`] and [`HeaderLayout`] for declaring header formats
//! - [`Protocol`] trait for implementing dissectors
//! - [`ProtocolRegistry`] for managing registered dissectors
//! - [`LayerChain`] for following one layer into the next
//! - Built-in dissectors for OSPF
//!
//! ## Supported Protocols
//!
//! | Layer | Protocols |
//! |-------|-----------|
//! | Routing | OSPF common header |
//! | OSPFv2 body | Hello, Database Description, LS Request, LS Update, LS Ack |
//!
//! ## Example
//!
//! ```rust
//! use layerdissect_core::protocol::{default_registry, LayerChain, ParseContext};
//!
//! let registry = default_registry();
//! let chain = LayerChain::new(&registry);
//!
//! let packet: &[u8] = &[
//!     0x02, 0x01, 0x00, 0x2c,  // version 2, Hello, len 44
//!     0xc0, 0x00, 0x02, 0x01,  // router id 192.0.2.1
//!     0x00, 0x00, 0x00, 0x01,  // area id 0.0.0.1
//!     0xab, 0xcd, 0x00, 0x00,  // checksum, null authentication
//!     0xde, 0xad, 0xbe, 0xef, 0xca, 0xfe, 0xba, 0xbe,
//! ];
//!
//! let entry = ParseContext::new().with_hint("ip_protocol", 89);
//! let result = chain.dissect(&entry, packet).unwrap();
//! assert_eq!(result.length, 24);
//! assert_eq!(result.record.get("router_id").and_then(|v| v.as_str()), Some("192.0.2.1"));
//! ```

mod chain;
mod code_table;
mod context;
mod cursor;
mod field;
mod layout;
mod record;
mod registry;

// Protocol implementations
mod ospf;

// Test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;

pub use chain::{ChainConfig, LayerChain, DEFAULT_MAX_DEPTH, NEXT_LAYER, NEXT_PROTOCOL};
pub use code_table::{CodeTable, Resolution, UnmappedPolicy};
pub use context::{Dissection, HintEntry, ParseContext};
pub use cursor::ByteCursor;
pub use field::{FieldValue, OwnedFieldValue};
pub use layout::{
    read_fields, read_record, DecodeAs, DecodedFields, FieldSpec, HeaderLayout, Trailer,
};
pub use record::{FieldEntry, FieldRecord, Keys, RecordBuilder};
pub use registry::{BuiltinProtocol, PayloadMode, Protocol, ProtocolRegistry};

// Re-export protocol implementations
pub use ospf::{
    OspfDbDescriptionProtocol, OspfHelloProtocol, OspfLsAckProtocol, OspfLsRequestProtocol,
    OspfLsUpdateProtocol, OspfProtocol,
};

// Re-export protocol constants and tables
pub use ospf::{
    auth_type as ospf_auth_type, lsa_type as ospf_lsa_type, packet_type as ospf_packet_type,
    AUTH_TYPES as OSPF_AUTH_TYPES, IP_PROTOCOL_OSPF, LSA_HEADER as OSPF_LSA_HEADER,
    LSA_TYPES as OSPF_LSA_TYPES, OSPF_HEADER, OSPF_HEADER_LEN, PACKET_TYPES as OSPF_PACKET_TYPES,
};

/// Create a registry with all built-in protocol dissectors.
pub fn default_registry() -> ProtocolRegistry {
    let mut registry = ProtocolRegistry::new();

    // Routing protocols
    registry.register(OspfProtocol);

    // OSPFv2 packet bodies
    registry.register(OspfHelloProtocol);
    registry.register(OspfDbDescriptionProtocol);
    registry.register(OspfLsRequestProtocol);
    registry.register(OspfLsUpdateProtocol);
    registry.register(OspfLsAckProtocol);

    registry
}

/// Decode one OSPF header from the start of `data`, without following the
/// next layer.
///
/// The reported length is always [`OSPF_HEADER_LEN`], whatever the header's
/// own `len` field says.
///
/// # Errors
///
/// [`Error::Protocol`](crate::Error::Protocol) wrapping a truncation if
/// `data` is shorter than the header.
pub fn dissect_ospf(data: &[u8]) -> crate::Result<Dissection<'_>> {
    let mut cursor = ByteCursor::new(data);
    let dissection = OspfProtocol.dissect(&mut cursor, &ParseContext::new())?;
    Ok(dissection)
}
