//! Field value types for protocol dissection.
//!
//! FieldValue references packet data directly where it can (`Bytes`) and
//! owns data only when a value has to be constructed (`DottedQuad`,
//! `OwnedBytes`, nested records).

use compact_str::CompactString;

use super::FieldRecord;
use crate::error::ProtocolError;
use crate::format::format_dotted_quad;

/// A single decoded field.
///
/// Every field read from the wire maps to exactly one variant. The lifetime
/// parameter `'data` ties zero-copy variants to the dissected buffer.
#[derive(Debug, Clone)]
pub enum FieldValue<'data> {
    // === Unsigned integers ===
    /// Unsigned 8-bit integer
    UInt8(u8),
    /// Unsigned 16-bit integer
    UInt16(u16),
    /// Unsigned 32-bit integer
    UInt32(u32),
    /// Unsigned 64-bit integer
    UInt64(u64),

    // === Constructed strings ===
    /// 32-bit identifier rendered as `a.b.c.d`.
    /// At most 15 bytes, so CompactString keeps it inline.
    DottedQuad(CompactString),
    /// Name resolved from a static code table.
    Symbol(&'static str),

    // === Raw bytes ===
    /// Zero-copy reference into the dissected buffer.
    Bytes(&'data [u8]),
    /// Owned bytes, produced by [`FieldValue::to_owned`].
    OwnedBytes(Vec<u8>),

    // === Structure ===
    /// Repeated sub-structure (neighbor lists, LSA headers).
    List(Vec<FieldValue<'data>>),
    /// Nested record (variant sub-layouts, next protocol layer).
    /// Boxed because FieldRecord stores FieldValues inline.
    Record(Box<FieldRecord<'data>>),
    /// A nested decode that failed. The enclosing record stays valid.
    Failed(ProtocolError),
}

/// Type alias for FieldValue that owns all its data.
pub type OwnedFieldValue = FieldValue<'static>;

impl<'data> FieldValue<'data> {
    /// Build a dotted-quad value from four wire bytes.
    pub fn dotted_quad(octets: [u8; 4]) -> Self {
        FieldValue::DottedQuad(format_dotted_quad(octets))
    }

    /// Unsigned integer sized to the wire width it was read from.
    pub fn uint(width: usize, value: u64) -> Self {
        match width {
            1 => FieldValue::UInt8(value as u8),
            2 => FieldValue::UInt16(value as u16),
            4 => FieldValue::UInt32(value as u32),
            _ => FieldValue::UInt64(value),
        }
    }

    /// Wrap a record as a nested field.
    pub fn record(record: FieldRecord<'data>) -> Self {
        FieldValue::Record(Box::new(record))
    }

    /// Try to get as u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::UInt8(v) => Some(*v as u64),
            FieldValue::UInt16(v) => Some(*v as u64),
            FieldValue::UInt32(v) => Some(*v as u64),
            FieldValue::UInt64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as str reference (dotted quads and symbolic names).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::DottedQuad(s) => Some(s.as_str()),
            FieldValue::Symbol(s) => Some(*s),
            _ => None,
        }
    }

    /// Try to get as bytes reference.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(b) => Some(b),
            FieldValue::OwnedBytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    /// Try to get as list reference.
    pub fn as_list(&self) -> Option<&[FieldValue<'data>]> {
        match self {
            FieldValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Try to get as a nested record.
    pub fn as_record(&self) -> Option<&FieldRecord<'data>> {
        match self {
            FieldValue::Record(record) => Some(record),
            _ => None,
        }
    }

    /// The error carried by a failed nested decode.
    pub fn as_failure(&self) -> Option<&ProtocolError> {
        match self {
            FieldValue::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Convert to an owned version, copying borrowed bytes.
    pub fn to_owned(&self) -> FieldValue<'static> {
        match self {
            FieldValue::UInt8(v) => FieldValue::UInt8(*v),
            FieldValue::UInt16(v) => FieldValue::UInt16(*v),
            FieldValue::UInt32(v) => FieldValue::UInt32(*v),
            FieldValue::UInt64(v) => FieldValue::UInt64(*v),
            FieldValue::DottedQuad(s) => FieldValue::DottedQuad(s.clone()),
            FieldValue::Symbol(s) => FieldValue::Symbol(*s),
            FieldValue::Bytes(b) => FieldValue::OwnedBytes(b.to_vec()),
            FieldValue::OwnedBytes(b) => FieldValue::OwnedBytes(b.clone()),
            FieldValue::List(items) => {
                FieldValue::List(items.iter().map(|v| v.to_owned()).collect())
            }
            FieldValue::Record(record) => FieldValue::record(record.as_ref().to_owned()),
            FieldValue::Failed(err) => FieldValue::Failed(err.clone()),
        }
    }
}

impl<'data> std::fmt::Display for FieldValue<'data> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::UInt8(v) => write!(f, "{v}"),
            FieldValue::UInt16(v) => write!(f, "{v}"),
            FieldValue::UInt32(v) => write!(f, "{v}"),
            FieldValue::UInt64(v) => write!(f, "{v}"),
            FieldValue::DottedQuad(s) => write!(f, "{s}"),
            FieldValue::Symbol(s) => write!(f, "{s}"),
            FieldValue::Bytes(b) => write_hex(f, b),
            FieldValue::OwnedBytes(b) => write_hex(f, b),
            FieldValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            FieldValue::Record(record) => write!(f, "{record}"),
            FieldValue::Failed(err) => write!(f, "<error: {err}>"),
        }
    }
}

fn write_hex(f: &mut std::fmt::Formatter<'_>, bytes: &[u8]) -> std::fmt::Result {
    write!(f, "0x")?;
    for b in bytes {
        write!(f, "{b:02x}")?;
    }
    Ok(())
}

// Implement PartialEq manually to handle borrowed vs owned comparison
impl<'a, 'b> PartialEq<FieldValue<'b>> for FieldValue<'a> {
    fn eq(&self, other: &FieldValue<'b>) -> bool {
        match (self, other) {
            (FieldValue::UInt8(a), FieldValue::UInt8(b)) => a == b,
            (FieldValue::UInt16(a), FieldValue::UInt16(b)) => a == b,
            (FieldValue::UInt32(a), FieldValue::UInt32(b)) => a == b,
            (FieldValue::UInt64(a), FieldValue::UInt64(b)) => a == b,
            (FieldValue::DottedQuad(a), FieldValue::DottedQuad(b)) => a == b,
            (FieldValue::Symbol(a), FieldValue::Symbol(b)) => a == b,
            // Bytes comparisons: allow cross-comparison between Bytes and OwnedBytes
            (FieldValue::Bytes(a), FieldValue::Bytes(b)) => a == b,
            (FieldValue::Bytes(a), FieldValue::OwnedBytes(b)) => *a == b.as_slice(),
            (FieldValue::OwnedBytes(a), FieldValue::Bytes(b)) => a.as_slice() == *b,
            (FieldValue::OwnedBytes(a), FieldValue::OwnedBytes(b)) => a == b,
            (FieldValue::List(a), FieldValue::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
            }
            (FieldValue::Record(a), FieldValue::Record(b)) => **a == **b,
            (FieldValue::Failed(a), FieldValue::Failed(b)) => a == b,
            _ => false,
        }
    }
}
