//! Protocol registry for managing dissectors.

use crate::error::ProtocolError;
use crate::schema::FieldDescriptor;

use super::{
    ByteCursor, Dissection, OspfDbDescriptionProtocol, OspfHelloProtocol, OspfLsAckProtocol,
    OspfLsRequestProtocol, OspfLsUpdateProtocol, OspfProtocol, ParseContext,
};

/// How a protocol's remaining bytes should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadMode {
    /// Look up a child dissector from the hints (default).
    Chain,

    /// Terminal protocol. Remaining bytes are kept as opaque payload.
    None,
}

/// Core trait all protocol dissectors must implement.
pub trait Protocol: Send + Sync {
    /// Unique identifier for this protocol (e.g., "ospf", "ospf_hello").
    fn name(&self) -> &'static str;

    /// Human-readable display name.
    fn display_name(&self) -> &'static str {
        self.name()
    }

    /// Check if this dissector can handle the given context.
    /// Returns a priority score (higher = more specific match).
    /// Returns `None` if this dissector cannot handle the context.
    fn can_parse(&self, context: &ParseContext) -> Option<u32>;

    /// Decode one header from the cursor.
    ///
    /// All-or-nothing: on error no record is produced. The cursor may have
    /// advanced and should be discarded by the caller.
    fn dissect<'a>(
        &self,
        cursor: &mut ByteCursor<'a>,
        context: &ParseContext,
    ) -> Result<Dissection<'a>, ProtocolError>;

    /// Return the schema fields this protocol produces.
    fn schema_fields(&self) -> Vec<FieldDescriptor>;

    /// Protocols that might follow this one.
    fn child_protocols(&self) -> &'static [&'static str] {
        &[]
    }

    /// How should remaining bytes be handled after dissecting?
    fn payload_mode(&self) -> PayloadMode {
        PayloadMode::Chain
    }
}

/// Enum of all built-in protocol dissectors.
///
/// This enables static dispatch (no vtable overhead) for all built-in protocols.
#[derive(Debug, Clone, Copy)]
pub enum BuiltinProtocol {
    Ospf(OspfProtocol),
    OspfHello(OspfHelloProtocol),
    OspfDbDescription(OspfDbDescriptionProtocol),
    OspfLsRequest(OspfLsRequestProtocol),
    OspfLsUpdate(OspfLsUpdateProtocol),
    OspfLsAck(OspfLsAckProtocol),
}

/// Macro to delegate Protocol trait methods to inner types.
macro_rules! delegate_protocol {
    ($self:expr, $method:ident $(, $arg:expr)*) => {
        match $self {
            BuiltinProtocol::Ospf(p) => p.$method($($arg),*),
            BuiltinProtocol::OspfHello(p) => p.$method($($arg),*),
            BuiltinProtocol::OspfDbDescription(p) => p.$method($($arg),*),
            BuiltinProtocol::OspfLsRequest(p) => p.$method($($arg),*),
            BuiltinProtocol::OspfLsUpdate(p) => p.$method($($arg),*),
            BuiltinProtocol::OspfLsAck(p) => p.$method($($arg),*),
        }
    };
}

impl Protocol for BuiltinProtocol {
    #[inline]
    fn name(&self) -> &'static str {
        delegate_protocol!(self, name)
    }

    #[inline]
    fn display_name(&self) -> &'static str {
        delegate_protocol!(self, display_name)
    }

    #[inline]
    fn can_parse(&self, context: &ParseContext) -> Option<u32> {
        delegate_protocol!(self, can_parse, context)
    }

    #[inline]
    fn dissect<'a>(
        &self,
        cursor: &mut ByteCursor<'a>,
        context: &ParseContext,
    ) -> Result<Dissection<'a>, ProtocolError> {
        delegate_protocol!(self, dissect, cursor, context)
    }

    #[inline]
    fn schema_fields(&self) -> Vec<FieldDescriptor> {
        delegate_protocol!(self, schema_fields)
    }

    #[inline]
    fn child_protocols(&self) -> &'static [&'static str] {
        delegate_protocol!(self, child_protocols)
    }

    #[inline]
    fn payload_mode(&self) -> PayloadMode {
        delegate_protocol!(self, payload_mode)
    }
}

/// Conversion traits for ergonomic registration.
impl From<OspfProtocol> for BuiltinProtocol {
    fn from(p: OspfProtocol) -> Self {
        BuiltinProtocol::Ospf(p)
    }
}

impl From<OspfHelloProtocol> for BuiltinProtocol {
    fn from(p: OspfHelloProtocol) -> Self {
        BuiltinProtocol::OspfHello(p)
    }
}

impl From<OspfDbDescriptionProtocol> for BuiltinProtocol {
    fn from(p: OspfDbDescriptionProtocol) -> Self {
        BuiltinProtocol::OspfDbDescription(p)
    }
}

impl From<OspfLsRequestProtocol> for BuiltinProtocol {
    fn from(p: OspfLsRequestProtocol) -> Self {
        BuiltinProtocol::OspfLsRequest(p)
    }
}

impl From<OspfLsUpdateProtocol> for BuiltinProtocol {
    fn from(p: OspfLsUpdateProtocol) -> Self {
        BuiltinProtocol::OspfLsUpdate(p)
    }
}

impl From<OspfLsAckProtocol> for BuiltinProtocol {
    fn from(p: OspfLsAckProtocol) -> Self {
        BuiltinProtocol::OspfLsAck(p)
    }
}

/// Registry for protocol dissectors with priority-based selection.
///
/// This is the explicit "what follows what" table for the layer chain:
/// each dissector declares the contexts it accepts through `can_parse`.
#[derive(Debug, Clone)]
pub struct ProtocolRegistry {
    parsers: Vec<BuiltinProtocol>,
}

impl ProtocolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Register a protocol dissector.
    pub fn register<P: Into<BuiltinProtocol>>(&mut self, parser: P) {
        self.parsers.push(parser.into());
    }

    /// Find the best dissector for the given context.
    #[inline]
    pub fn find_parser(&self, context: &ParseContext) -> Option<&BuiltinProtocol> {
        self.parsers
            .iter()
            .filter_map(|p| p.can_parse(context).map(|priority| (p, priority)))
            .max_by_key(|(_, priority)| *priority)
            .map(|(parser, _)| parser)
    }

    /// Get all registered dissectors.
    pub fn all_parsers(&self) -> impl Iterator<Item = &BuiltinProtocol> {
        self.parsers.iter()
    }

    /// Get a dissector by name.
    pub fn get_parser(&self, name: &str) -> Option<&BuiltinProtocol> {
        self.parsers.iter().find(|p| p.name() == name)
    }

    /// Get the number of registered dissectors.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl Default for ProtocolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
