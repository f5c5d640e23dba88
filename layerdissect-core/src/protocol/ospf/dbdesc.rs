//! OSPFv2 Database Description packet body (RFC 2328 A.3.3).

use super::lsa::read_lsa_header;
use super::{
    body_region, match_body, packet_type, read_entries, trailing, trailing_descriptor,
    LSA_HEADER_LEN, TRAILING,
};
use crate::error::ProtocolError;
use crate::protocol::{
    read_fields, ByteCursor, DecodedFields, Dissection, FieldSpec, FieldValue, ParseContext,
    PayloadMode, Protocol,
};
use crate::schema::{DataKind, FieldDescriptor};

const PROTOCOL: &str = "ospf_db_description";

const DD_FIXED: &[FieldSpec] = &[
    FieldSpec::uint("interface_mtu", 2),
    FieldSpec::uint("options", 1),
    // I/M/MS bits
    FieldSpec::uint("flags", 1),
    FieldSpec::uint("dd_seq", 4),
];

/// OSPFv2 Database Description dissector.
#[derive(Debug, Clone, Copy)]
pub struct OspfDbDescriptionProtocol;

impl Protocol for OspfDbDescriptionProtocol {
    fn name(&self) -> &'static str {
        PROTOCOL
    }

    fn display_name(&self) -> &'static str {
        "OSPF Database Description"
    }

    fn can_parse(&self, context: &ParseContext) -> Option<u32> {
        match_body(context, packet_type::DATABASE_DESCRIPTION)
    }

    fn dissect<'a>(
        &self,
        cursor: &mut ByteCursor<'a>,
        context: &ParseContext,
    ) -> Result<Dissection<'a>, ProtocolError> {
        let mut region = body_region(cursor, context);
        let length = region.remaining();

        let mut out = DecodedFields::new();
        read_fields(&mut region, PROTOCOL, DD_FIXED, &mut out)?;

        let headers = read_entries(&mut region, LSA_HEADER_LEN, |c| {
            read_lsa_header(c, PROTOCOL)
        })?;
        out.push("lsa_headers", FieldValue::List(headers));
        if let Some(rest) = trailing(&region) {
            out.push(TRAILING, rest);
        }

        Ok(Dissection::new(out.finish(), length))
    }

    fn schema_fields(&self) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("interface_mtu", DataKind::UInt16),
            FieldDescriptor::new("options", DataKind::UInt8),
            FieldDescriptor::new("flags", DataKind::UInt8),
            FieldDescriptor::new("dd_seq", DataKind::UInt32),
            FieldDescriptor::new("lsa_headers", DataKind::List(Box::new(DataKind::Record))),
            trailing_descriptor(),
        ]
    }

    fn payload_mode(&self) -> PayloadMode {
        PayloadMode::None
    }
}
