//! OSPFv2 Link State Acknowledgment packet body (RFC 2328 A.3.6).

use super::lsa::read_lsa_header;
use super::{
    body_region, match_body, packet_type, read_entries, trailing, trailing_descriptor,
    LSA_HEADER_LEN, TRAILING,
};
use crate::error::ProtocolError;
use crate::protocol::{
    ByteCursor, Dissection, FieldValue, ParseContext, PayloadMode, Protocol, RecordBuilder,
};
use crate::schema::{DataKind, FieldDescriptor};

const PROTOCOL: &str = "ospf_ls_ack";

/// OSPFv2 Link State Acknowledgment dissector.
#[derive(Debug, Clone, Copy)]
pub struct OspfLsAckProtocol;

impl Protocol for OspfLsAckProtocol {
    fn name(&self) -> &'static str {
        PROTOCOL
    }

    fn display_name(&self) -> &'static str {
        "OSPF Link State Acknowledgment"
    }

    fn can_parse(&self, context: &ParseContext) -> Option<u32> {
        match_body(context, packet_type::LINK_STATE_ACK)
    }

    fn dissect<'a>(
        &self,
        cursor: &mut ByteCursor<'a>,
        context: &ParseContext,
    ) -> Result<Dissection<'a>, ProtocolError> {
        let mut region = body_region(cursor, context);
        let length = region.remaining();

        // LS Ack is nothing but a list of LSA headers
        let headers = read_entries(&mut region, LSA_HEADER_LEN, |c| {
            read_lsa_header(c, PROTOCOL)
        })?;

        let mut builder = RecordBuilder::new();
        builder.push("lsa_headers", FieldValue::List(headers));
        if let Some(rest) = trailing(&region) {
            builder.push(TRAILING, rest);
        }
        Ok(Dissection::new(builder.finish(), length))
    }

    fn schema_fields(&self) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("lsa_headers", DataKind::List(Box::new(DataKind::Record))),
            trailing_descriptor(),
        ]
    }

    fn payload_mode(&self) -> PayloadMode {
        PayloadMode::None
    }
}
