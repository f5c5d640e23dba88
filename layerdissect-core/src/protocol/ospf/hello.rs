//! OSPFv2 Hello packet body (RFC 2328 A.3.2).

use super::{
    body_region, match_body, packet_type, read_entries, trailing, trailing_descriptor, TRAILING,
};
use crate::error::ProtocolError;
use crate::protocol::{
    read_fields, ByteCursor, DecodedFields, Dissection, FieldSpec, FieldValue, ParseContext,
    PayloadMode, Protocol,
};
use crate::schema::{DataKind, FieldDescriptor};

const PROTOCOL: &str = "ospf_hello";

/// Fixed part of the Hello body, before the neighbor list.
const HELLO_FIXED: &[FieldSpec] = &[
    FieldSpec::dotted_quad("network_mask"),
    FieldSpec::uint("hello_interval", 2),
    FieldSpec::uint("options", 1),
    FieldSpec::uint("rtr_pri", 1),
    FieldSpec::uint("router_dead_interval", 4),
    FieldSpec::dotted_quad("designated_router"),
    FieldSpec::dotted_quad("backup_designated_router"),
];

/// OSPFv2 Hello dissector.
#[derive(Debug, Clone, Copy)]
pub struct OspfHelloProtocol;

impl Protocol for OspfHelloProtocol {
    fn name(&self) -> &'static str {
        PROTOCOL
    }

    fn display_name(&self) -> &'static str {
        "OSPF Hello"
    }

    fn can_parse(&self, context: &ParseContext) -> Option<u32> {
        match_body(context, packet_type::HELLO)
    }

    fn dissect<'a>(
        &self,
        cursor: &mut ByteCursor<'a>,
        context: &ParseContext,
    ) -> Result<Dissection<'a>, ProtocolError> {
        let mut region = body_region(cursor, context);
        let length = region.remaining();

        let mut out = DecodedFields::new();
        read_fields(&mut region, PROTOCOL, HELLO_FIXED, &mut out)?;

        // Remaining body bytes list the neighbors' router IDs
        let neighbors = read_entries(&mut region, 4, |c| {
            c.read_array()
                .map(FieldValue::dotted_quad)
                .map_err(|e| e.in_field(PROTOCOL, "neighbors"))
        })?;
        out.push("neighbors", FieldValue::List(neighbors));
        if let Some(rest) = trailing(&region) {
            out.push(TRAILING, rest);
        }

        Ok(Dissection::new(out.finish(), length))
    }

    fn schema_fields(&self) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("network_mask", DataKind::String),
            FieldDescriptor::new("hello_interval", DataKind::UInt16),
            FieldDescriptor::new("options", DataKind::UInt8),
            FieldDescriptor::new("rtr_pri", DataKind::UInt8),
            FieldDescriptor::new("router_dead_interval", DataKind::UInt32),
            FieldDescriptor::new("designated_router", DataKind::String),
            FieldDescriptor::new("backup_designated_router", DataKind::String),
            FieldDescriptor::new("neighbors", DataKind::List(Box::new(DataKind::String))),
            trailing_descriptor(),
        ]
    }

    fn payload_mode(&self) -> PayloadMode {
        PayloadMode::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::test_utils::HelloBuilder;
    use crate::protocol::ospf::HINT_BODY_LEN;

    fn body_context(len: usize) -> ParseContext {
        ParseContext::new()
            .with_hint("ospf_version", 2)
            .with_hint("ospf_type", 1)
            .with_hint(HINT_BODY_LEN, len as u64)
    }

    #[test]
    fn test_can_parse_requires_v2_hello() {
        let parser = OspfHelloProtocol;
        assert_eq!(parser.can_parse(&body_context(20)), Some(100));

        let v3 = ParseContext::new()
            .with_hint("ospf_version", 3)
            .with_hint("ospf_type", 1);
        assert!(parser.can_parse(&v3).is_none());

        let dd = ParseContext::new()
            .with_hint("ospf_version", 2)
            .with_hint("ospf_type", 2);
        assert!(parser.can_parse(&dd).is_none());
    }

    #[test]
    fn test_hello_packet_parsing() {
        let body = HelloBuilder::new()
            .hello_interval(10)
            .router_dead_interval(40)
            .designated_router([192, 168, 1, 1])
            .backup_designated_router([192, 168, 1, 2])
            .neighbor([192, 168, 1, 2])
            .neighbor([192, 168, 1, 3])
            .build();
        let mut cursor = ByteCursor::new(&body);

        let result = OspfHelloProtocol
            .dissect(&mut cursor, &body_context(body.len()))
            .unwrap();
        let record = &result.record;

        assert_eq!(result.length, 28);
        assert_eq!(record.get("network_mask").and_then(|v| v.as_str()), Some("255.255.255.0"));
        assert_eq!(record.get("hello_interval"), Some(&FieldValue::UInt16(10)));
        assert_eq!(record.get("router_dead_interval"), Some(&FieldValue::UInt32(40)));
        assert_eq!(
            record.get("designated_router").and_then(|v| v.as_str()),
            Some("192.168.1.1")
        );
        assert_eq!(
            record.get("backup_designated_router").and_then(|v| v.as_str()),
            Some("192.168.1.2")
        );

        let neighbors: Vec<_> = record
            .get("neighbors")
            .and_then(|v| v.as_list())
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(neighbors, vec!["192.168.1.2", "192.168.1.3"]);
        assert!(!record.contains(TRAILING));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_neighbors_bounded_by_body_length() {
        let body = HelloBuilder::new()
            .neighbor([10, 0, 0, 1])
            .neighbor([10, 0, 0, 2])
            .build();
        let mut cursor = ByteCursor::new(&body);

        // Declared body only covers the first neighbor
        let result = OspfHelloProtocol
            .dissect(&mut cursor, &body_context(24))
            .unwrap();

        assert_eq!(result.length, 24);
        assert_eq!(
            result.record.get("neighbors").and_then(|v| v.as_list()).map(|l| l.len()),
            Some(1)
        );
        assert_eq!(cursor.remaining(), 4);
    }

    #[test]
    fn test_partial_neighbor_kept_as_trailing() {
        let mut body = HelloBuilder::new().build();
        body.extend_from_slice(&[0xaa, 0xbb]);
        let mut cursor = ByteCursor::new(&body);

        let result = OspfHelloProtocol
            .dissect(&mut cursor, &body_context(body.len()))
            .unwrap();

        assert_eq!(result.length, 22);
        assert_eq!(
            result.record.get("neighbors"),
            Some(&FieldValue::List(Vec::new()))
        );
        assert_eq!(
            result.record.get(TRAILING),
            Some(&FieldValue::Bytes(&[0xaa, 0xbb]))
        );
        assert_eq!(result.record.keys().last(), Some(TRAILING));
    }

    #[test]
    fn test_no_neighbors() {
        let body = HelloBuilder::new().build();
        let mut cursor = ByteCursor::new(&body);

        let result = OspfHelloProtocol
            .dissect(&mut cursor, &body_context(body.len()))
            .unwrap();
        assert_eq!(
            result.record.get("neighbors"),
            Some(&FieldValue::List(Vec::new()))
        );
    }

    #[test]
    fn test_truncated_hello() {
        let body = HelloBuilder::new().build();
        let mut cursor = ByteCursor::new(&body[..12]);

        let err = OspfHelloProtocol
            .dissect(&mut cursor, &body_context(20))
            .unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TruncatedInput {
                protocol: "ospf_hello",
                field: "designated_router",
                needed: 4,
                have: 0,
            }
        );
    }
}
