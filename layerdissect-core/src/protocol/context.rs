//! Parse context and dissection result types.

use smallvec::SmallVec;

use super::{FieldRecord, FieldValue};

/// Hint entry for child protocol detection: (hint_name, value).
pub type HintEntry = (&'static str, u64);

/// Context passed down the layer chain.
///
/// A parent dissector describes what follows it through hints (an IP
/// protocol number, a packet type); registered dissectors match on them.
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    /// Parent protocol that identified this layer.
    pub parent_protocol: Option<&'static str>,

    /// Protocol-specific hints (e.g. IP protocol number, OSPF packet type).
    /// Typically 1-3 entries.
    pub hints: SmallVec<[HintEntry; 4]>,

    /// Offset into the original buffer where this layer starts.
    pub offset: usize,

    /// Nesting depth (0 = outermost layer).
    pub depth: u8,
}

impl ParseContext {
    /// Create a root context with no hints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a hint.
    pub fn with_hint(mut self, key: &'static str, value: u64) -> Self {
        self.set_hint(key, value);
        self
    }

    /// Context for the layer following `parent`.
    pub fn child(&self, parent: &'static str, dissection: &Dissection<'_>) -> Self {
        Self {
            parent_protocol: Some(parent),
            hints: dissection.child_hints.clone(),
            offset: self.offset + dissection.length,
            depth: self.depth.saturating_add(1),
        }
    }

    /// Get a hint value by key (linear search, but N is small).
    #[inline]
    pub fn hint(&self, key: &str) -> Option<u64> {
        self.hints.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Set a hint value (updates existing or appends).
    #[inline]
    pub fn set_hint(&mut self, key: &'static str, value: u64) {
        if let Some(entry) = self.hints.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.hints.push((key, value));
        }
    }

    /// Check if we're at the start of the chain (no parent protocol).
    pub fn is_root(&self) -> bool {
        self.parent_protocol.is_none()
    }
}

impl std::fmt::Display for ParseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[", self.parent_protocol.unwrap_or("root"))?;
        for (i, (key, value)) in self.hints.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        write!(f, "]")
    }
}

/// Output of one dissector: the decoded record, the number of bytes the
/// dissector consumed, and hints describing the next layer.
#[derive(Debug, Clone)]
pub struct Dissection<'data> {
    /// Decoded fields.
    pub record: FieldRecord<'data>,

    /// Bytes consumed by this dissector. Reflects the decoder's own
    /// consumption, not any length field carried inside the record.
    pub length: usize,

    /// Hints for child protocol identification.
    pub child_hints: SmallVec<[HintEntry; 4]>,
}

impl<'data> Dissection<'data> {
    pub fn new(record: FieldRecord<'data>, length: usize) -> Self {
        Self {
            record,
            length,
            child_hints: SmallVec::new(),
        }
    }

    /// Builder: declare a hint for the next layer.
    pub fn with_hint(mut self, key: &'static str, value: u64) -> Self {
        self.child_hints.push((key, value));
        self
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue<'data>> {
        self.record.get(name)
    }

    /// Get a child hint value by name.
    pub fn hint(&self, name: &str) -> Option<u64> {
        self.child_hints
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::RecordBuilder;

    #[test]
    fn test_context_hint_access() {
        let ctx = ParseContext::new()
            .with_hint("ip_protocol", 89)
            .with_hint("ospf_type", 1);

        assert_eq!(ctx.hint("ip_protocol"), Some(89));
        assert_eq!(ctx.hint("ospf_type"), Some(1));
        assert_eq!(ctx.hint("nonexistent"), None);
        assert!(ctx.is_root());
    }

    #[test]
    fn test_context_set_hint_update() {
        let mut ctx = ParseContext::new();
        ctx.set_hint("ip_protocol", 6);
        ctx.set_hint("ip_protocol", 89);

        assert_eq!(ctx.hint("ip_protocol"), Some(89));
        assert_eq!(ctx.hints.len(), 1);
    }

    #[test]
    fn test_child_context() {
        let root = ParseContext::new().with_hint("ip_protocol", 89);
        let dissection = Dissection::new(RecordBuilder::new().finish(), 24)
            .with_hint("ospf_version", 2)
            .with_hint("ospf_type", 1);

        let child = root.child("ospf", &dissection);
        assert_eq!(child.parent_protocol, Some("ospf"));
        assert_eq!(child.offset, 24);
        assert_eq!(child.depth, 1);
        assert_eq!(child.hint("ospf_type"), Some(1));
        assert_eq!(child.hint("ip_protocol"), None);
        assert!(!child.is_root());
    }

    #[test]
    fn test_context_display() {
        let ctx = ParseContext::new().with_hint("ip_protocol", 89);
        assert_eq!(ctx.to_string(), "root[ip_protocol=89]");
    }

    #[test]
    fn test_dissection_accessors() {
        let mut builder = RecordBuilder::new();
        builder.push("version", FieldValue::UInt8(2));
        let dissection = Dissection::new(builder.finish(), 24).with_hint("ospf_type", 5);

        assert_eq!(dissection.get("version"), Some(&FieldValue::UInt8(2)));
        assert_eq!(dissection.hint("ospf_type"), Some(5));
        assert_eq!(dissection.hint("missing"), None);
    }
}
