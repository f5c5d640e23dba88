//! Convenient re-exports for common usage.
//!
//! This module provides a curated set of the most commonly used types
//! from layerdissect-core, allowing you to import them with a single `use` statement.
//!
//! # Example
//!
//! ```rust
//! use layerdissect_core::prelude::*;
//!
//! // Create a protocol registry with all built-in dissectors
//! let registry = default_registry();
//! let chain = LayerChain::new(&registry);
//! assert_eq!(chain.config().max_depth, 8);
//! ```

// Schema types
pub use crate::schema::{DataKind, FieldDescriptor, ProtocolSchema};

// Protocol types
pub use crate::protocol::{
    default_registry, dissect_ospf, BuiltinProtocol, ByteCursor, ChainConfig, Dissection,
    FieldRecord, FieldValue, LayerChain, ParseContext, PayloadMode, Protocol, ProtocolRegistry,
};

// Error types
pub use crate::error::{Error, ProtocolError, Result};
