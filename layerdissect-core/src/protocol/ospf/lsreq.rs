//! OSPFv2 Link State Request packet body (RFC 2328 A.3.4).

use super::{
    body_region, match_body, packet_type, read_entries, trailing, trailing_descriptor, LSA_TYPES,
    TRAILING,
};
use crate::error::ProtocolError;
use crate::protocol::{
    read_record, ByteCursor, Dissection, FieldSpec, FieldValue, ParseContext, PayloadMode,
    Protocol, RecordBuilder,
};
use crate::schema::{DataKind, FieldDescriptor};

const PROTOCOL: &str = "ospf_ls_request";

/// One requested LSA. The LS type is a full 32-bit word here.
static LS_REQUEST: &[FieldSpec] = &[
    FieldSpec::code("ls_type", 4, &LSA_TYPES),
    FieldSpec::dotted_quad("link_state_id"),
    FieldSpec::dotted_quad("advertising_router"),
];

const LS_REQUEST_LEN: usize = 12;

/// OSPFv2 Link State Request dissector.
#[derive(Debug, Clone, Copy)]
pub struct OspfLsRequestProtocol;

impl Protocol for OspfLsRequestProtocol {
    fn name(&self) -> &'static str {
        PROTOCOL
    }

    fn display_name(&self) -> &'static str {
        "OSPF Link State Request"
    }

    fn can_parse(&self, context: &ParseContext) -> Option<u32> {
        match_body(context, packet_type::LINK_STATE_REQUEST)
    }

    fn dissect<'a>(
        &self,
        cursor: &mut ByteCursor<'a>,
        context: &ParseContext,
    ) -> Result<Dissection<'a>, ProtocolError> {
        let mut region = body_region(cursor, context);
        let length = region.remaining();

        let requests = read_entries(&mut region, LS_REQUEST_LEN, |c| {
            read_record(c, PROTOCOL, LS_REQUEST).map(FieldValue::record)
        })?;

        let mut builder = RecordBuilder::new();
        builder.push("requests", FieldValue::List(requests));
        if let Some(rest) = trailing(&region) {
            builder.push(TRAILING, rest);
        }
        Ok(Dissection::new(builder.finish(), length))
    }

    fn schema_fields(&self) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("requests", DataKind::List(Box::new(DataKind::Record))),
            trailing_descriptor(),
        ]
    }

    fn payload_mode(&self) -> PayloadMode {
        PayloadMode::None
    }
}
