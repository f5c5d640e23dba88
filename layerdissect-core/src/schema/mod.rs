//! Engine-agnostic schema types.
//!
//! This module provides types that describe the fields a dissector
//! produces, independent of any decoded packet.
//!
//! # Example
//!
//! ```rust
//! use layerdissect_core::schema::{DataKind, FieldDescriptor};
//!
//! let fields = vec![
//!     FieldDescriptor::new("version", DataKind::UInt8),
//!     FieldDescriptor::nullable("next_layer", DataKind::Record),
//! ];
//! assert_eq!(fields.len(), 2);
//! ```

mod field;
mod kind;

pub use field::FieldDescriptor;
pub use kind::DataKind;

/// A protocol's complete schema.
pub type ProtocolSchema = Vec<FieldDescriptor>;
