//! Engine-agnostic data type definitions.

use crate::protocol::FieldValue;

/// Data types a decoded field can take.
///
/// Mirrors the [`FieldValue`](crate::protocol::FieldValue) variants, so a
/// protocol's schema can be listed without dissecting any bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// Unsigned 8-bit integer
    UInt8,

    /// Unsigned 16-bit integer
    UInt16,

    /// Unsigned 32-bit integer
    UInt32,

    /// Unsigned 64-bit integer
    UInt64,

    /// UTF-8 string (dotted quads, symbolic names)
    String,

    /// Variable-length binary data
    Binary,

    /// Fixed-size binary data (e.g. 2-byte checksum, 8-byte auth data)
    FixedBinary(usize),

    /// Variable-length list of elements of the same type
    List(Box<DataKind>),

    /// Nested record
    Record,

    /// Any one of several kinds, decided per packet. Code fields whose table
    /// passes unknown codes through are a name or the raw integer; a trailer
    /// with variants is a record or its raw bytes.
    OneOf(Vec<DataKind>),
}

impl DataKind {
    /// Human-readable type name for display.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataKind::UInt8 => "u8",
            DataKind::UInt16 => "u16",
            DataKind::UInt32 => "u32",
            DataKind::UInt64 => "u64",
            DataKind::String => "string",
            DataKind::Binary => "binary",
            DataKind::FixedBinary(_) => "fixed_binary",
            DataKind::List(_) => "list",
            DataKind::Record => "record",
            DataKind::OneOf(_) => "one_of",
        }
    }

    /// Size in bytes for fixed-width types, None for variable-width.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            DataKind::UInt8 => Some(1),
            DataKind::UInt16 => Some(2),
            DataKind::UInt32 => Some(4),
            DataKind::UInt64 => Some(8),
            DataKind::FixedBinary(n) => Some(*n),
            DataKind::String
            | DataKind::Binary
            | DataKind::List(_)
            | DataKind::Record
            | DataKind::OneOf(_) => None,
        }
    }

    /// True if `value` is a value this kind describes.
    ///
    /// A failed nested decode matches no kind.
    pub fn admits(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (DataKind::OneOf(kinds), _) => kinds.iter().any(|k| k.admits(value)),
            (DataKind::UInt8, FieldValue::UInt8(_))
            | (DataKind::UInt16, FieldValue::UInt16(_))
            | (DataKind::UInt32, FieldValue::UInt32(_))
            | (DataKind::UInt64, FieldValue::UInt64(_))
            | (DataKind::String, FieldValue::DottedQuad(_) | FieldValue::Symbol(_))
            | (DataKind::Binary, FieldValue::Bytes(_) | FieldValue::OwnedBytes(_))
            | (DataKind::Record, FieldValue::Record(_)) => true,
            (DataKind::FixedBinary(n), _) => value.as_bytes().is_some_and(|b| b.len() == *n),
            (DataKind::List(item), FieldValue::List(items)) => {
                items.iter().all(|v| item.admits(v))
            }
            _ => false,
        }
    }

    /// Integer kind for a wire width, if the width is a native integer width.
    pub fn uint_for_width(width: usize) -> Option<DataKind> {
        match width {
            1 => Some(DataKind::UInt8),
            2 => Some(DataKind::UInt16),
            4 => Some(DataKind::UInt32),
            8 => Some(DataKind::UInt64),
            _ => None,
        }
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataKind::OneOf(kinds) => {
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{}", kind)?;
                }
                Ok(())
            }
            _ => f.write_str(self.type_name()),
        }
    }
}
