//! Layer chaining.
//!
//! After a dissector returns, whatever bytes it left unread belong to the
//! next protocol layer. [`LayerChain`] asks the registry who handles them
//! and nests the result under the `next_layer` key of the parent record.

use tracing::{debug, trace};

use super::{
    BuiltinProtocol, ByteCursor, Dissection, FieldValue, ParseContext, PayloadMode, Protocol,
    ProtocolRegistry,
};
use crate::error::ProtocolError;

/// Record key holding the next layer (nested record, opaque bytes, or failure).
pub const NEXT_LAYER: &str = "next_layer";

/// Record key holding the name of the dissector that decoded `next_layer`.
pub const NEXT_PROTOCOL: &str = "next_protocol";

/// Default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: u8 = 8;

/// Chain configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Layers nested deeper than this are kept as opaque bytes.
    pub max_depth: u8,
    /// Attach trailing bytes no dissector claims. When false they are dropped.
    pub capture_payload: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            capture_payload: true,
        }
    }
}

impl ChainConfig {
    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_capture_payload(mut self, capture_payload: bool) -> Self {
        self.capture_payload = capture_payload;
        self
    }
}

/// Recursive dissector driver over a [`ProtocolRegistry`].
#[derive(Debug, Clone)]
pub struct LayerChain<'r> {
    registry: &'r ProtocolRegistry,
    config: ChainConfig,
}

impl<'r> LayerChain<'r> {
    pub fn new(registry: &'r ProtocolRegistry) -> Self {
        Self::with_config(registry, ChainConfig::default())
    }

    pub fn with_config(registry: &'r ProtocolRegistry, config: ChainConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn registry(&self) -> &ProtocolRegistry {
        self.registry
    }

    /// Dissect `data` starting with the dissector chosen by `entry`.
    ///
    /// The returned length is the root dissector's own consumption; nested
    /// layers are reachable through the record's `next_layer` slot.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::UnknownLayer`] if no dissector accepts `entry`, or the
    /// root dissector's own error. Failures below the root are recorded in
    /// the record instead.
    pub fn dissect<'a>(
        &self,
        entry: &ParseContext,
        data: &'a [u8],
    ) -> Result<Dissection<'a>, ProtocolError> {
        let parser = self
            .registry
            .find_parser(entry)
            .ok_or_else(|| ProtocolError::UnknownLayer {
                context: entry.to_string(),
            })?;

        let mut cursor = ByteCursor::new(data);
        self.dissect_layer(parser, &mut cursor, entry)
    }

    fn dissect_layer<'a>(
        &self,
        parser: &BuiltinProtocol,
        cursor: &mut ByteCursor<'a>,
        context: &ParseContext,
    ) -> Result<Dissection<'a>, ProtocolError> {
        let dissection = parser.dissect(cursor, context)?;
        trace!(
            protocol = parser.name(),
            offset = context.offset,
            depth = context.depth,
            length = dissection.length,
            remaining = cursor.remaining(),
            "dissected layer"
        );

        if cursor.is_empty() {
            return Ok(dissection);
        }
        Ok(self.attach_next_layer(parser, dissection, cursor.rest(), context))
    }

    fn attach_next_layer<'a>(
        &self,
        parser: &BuiltinProtocol,
        dissection: Dissection<'a>,
        rest: &'a [u8],
        context: &ParseContext,
    ) -> Dissection<'a> {
        let child_context = context.child(parser.name(), &dissection);
        let next = if parser.payload_mode() == PayloadMode::None {
            None
        } else if child_context.depth > self.config.max_depth {
            debug!(
                protocol = parser.name(),
                max_depth = self.config.max_depth,
                "depth limit reached, keeping payload opaque"
            );
            None
        } else {
            self.registry.find_parser(&child_context)
        };

        let Dissection {
            record,
            length,
            child_hints,
        } = dissection;
        let mut builder = record.into_builder();

        match next {
            Some(child) => {
                builder.push(NEXT_PROTOCOL, FieldValue::Symbol(child.name()));
                let mut child_cursor = ByteCursor::new(rest);
                match self.dissect_layer(child, &mut child_cursor, &child_context) {
                    Ok(inner) => {
                        builder.push(NEXT_LAYER, FieldValue::record(inner.record));
                    }
                    Err(err) => {
                        debug!(
                            protocol = child.name(),
                            offset = child_context.offset,
                            error = %err,
                            "nested layer failed"
                        );
                        builder.push(NEXT_LAYER, FieldValue::Failed(err));
                    }
                }
            }
            None if self.config.capture_payload => {
                debug!(
                    protocol = parser.name(),
                    context = %child_context,
                    bytes = rest.len(),
                    "no dissector for next layer, keeping opaque payload"
                );
                builder.push(NEXT_LAYER, FieldValue::Bytes(rest));
            }
            None => {}
        }

        Dissection {
            record: builder.finish(),
            length,
            child_hints,
        }
    }
}
