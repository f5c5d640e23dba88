//! Field descriptor for protocol schemas.

use super::DataKind;

/// Static description of one field a dissector can produce.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name within its protocol record (e.g. "router_id")
    pub name: &'static str,

    /// Data type
    pub kind: DataKind,

    /// Whether the field may be absent from a record
    pub nullable: bool,

    /// Optional description for documentation
    pub description: Option<&'static str>,
}

impl FieldDescriptor {
    /// Create a new non-nullable field.
    pub const fn new(name: &'static str, kind: DataKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
            description: None,
        }
    }

    /// Create a new nullable field.
    pub const fn nullable(name: &'static str, kind: DataKind) -> Self {
        Self {
            name,
            kind,
            nullable: true,
            description: None,
        }
    }

    /// Add a description to the field.
    pub const fn with_description(mut self, desc: &'static str) -> Self {
        self.description = Some(desc);
        self
    }
}
