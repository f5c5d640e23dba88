//! # layerdissect-core
//!
//! Layered binary protocol header dissection.
//!
//! This crate decodes network protocol headers from a byte buffer into
//! ordered field records. Each header is declared as an on-wire layout;
//! enumerated codes resolve through static tables, a discriminant field can
//! select a variant sub-layout, and whatever a header leaves unread is handed
//! to the next protocol layer.
//!
//! ## Features
//!
//! - **Declarative layouts**: fixed fields plus discriminant-selected trailers
//! - **Code tables**: per-table policy for codes the table does not list
//! - **Zero-copy records**: raw fields borrow from the dissected buffer
//! - **Layer chaining**: registry-driven recursion with opaque fallback
//! - **OSPF**: common header plus the five OSPFv2 packet bodies
//!
//! ## Quick Start
//!
//! ```rust
//! use layerdissect_core::prelude::*;
//!
//! let registry = default_registry();
//! let chain = LayerChain::new(&registry);
//!
//! let packet: &[u8] = &[
//!     0x02, 0x01, 0x00, 0x18, 0xc0, 0x00, 0x02, 0x01,
//!     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02,
//!     0x00, 0x00, 0x07, 0x10, 0x00, 0x00, 0x00, 0x2a,
//! ];
//!
//! let entry = ParseContext::new().with_hint("ip_protocol", 89);
//! let result = chain.dissect(&entry, packet)?;
//!
//! assert_eq!(result.record.get("type"), Some(&FieldValue::Symbol("Hello")));
//! assert_eq!(
//!     result.record.get_path(&["auth", "seq"]),
//!     Some(&FieldValue::UInt32(42))
//! );
//! # Ok::<(), layerdissect_core::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |                        layerdissect-core                            |
//! +---------------------------------------------------------------------+
//! |  schema/     - FieldDescriptor, DataKind                            |
//! |  protocol/   - ByteCursor, CodeTable, HeaderLayout, FieldRecord,    |
//! |                Protocol trait, registry, LayerChain, OSPF           |
//! |  format/     - Address formatting utilities                         |
//! |  error/      - Error types                                          |
//! +---------------------------------------------------------------------+
//! ```
//!
//! ## Logging
//!
//! The library emits `tracing` events (`trace` per dissected layer, `debug`
//! when a next layer falls back to opaque bytes or fails). It never installs
//! a subscriber.

pub mod error;
pub mod format;
pub mod prelude;
pub mod protocol;
pub mod schema;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, ProtocolError, Result};
pub use format::format_dotted_quad;
pub use protocol::{
    default_registry, dissect_ospf, BuiltinProtocol, ByteCursor, ChainConfig, CodeTable,
    Dissection, FieldRecord, FieldValue, HeaderLayout, LayerChain, OwnedFieldValue,
    ParseContext, PayloadMode, Protocol, ProtocolRegistry, RecordBuilder, Resolution,
    UnmappedPolicy,
};
pub use schema::{DataKind, FieldDescriptor, ProtocolSchema};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
