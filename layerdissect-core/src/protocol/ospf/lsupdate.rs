//! OSPFv2 Link State Update packet body (RFC 2328 A.3.5).

use super::{
    body_region, match_body, packet_type, trailing, trailing_descriptor, LSA_HEADER,
    LSA_HEADER_LEN, TRAILING,
};
use crate::error::ProtocolError;
use crate::protocol::{
    read_fields, ByteCursor, DecodedFields, Dissection, FieldValue, ParseContext, PayloadMode,
    Protocol, RecordBuilder,
};
use crate::schema::{DataKind, FieldDescriptor};

const PROTOCOL: &str = "ospf_ls_update";

/// OSPFv2 Link State Update dissector.
///
/// Each LSA is its 20-byte header followed by `length - 20` body bytes, kept
/// raw. The advertised LSA count is trusted: if the body runs out before
/// `num_lsas` LSAs were read the packet is truncated.
#[derive(Debug, Clone, Copy)]
pub struct OspfLsUpdateProtocol;

impl Protocol for OspfLsUpdateProtocol {
    fn name(&self) -> &'static str {
        PROTOCOL
    }

    fn display_name(&self) -> &'static str {
        "OSPF Link State Update"
    }

    fn can_parse(&self, context: &ParseContext) -> Option<u32> {
        match_body(context, packet_type::LINK_STATE_UPDATE)
    }

    fn dissect<'a>(
        &self,
        cursor: &mut ByteCursor<'a>,
        context: &ParseContext,
    ) -> Result<Dissection<'a>, ProtocolError> {
        let mut region = body_region(cursor, context);
        let length = region.remaining();

        let num_lsas = region
            .read_u32()
            .map_err(|e| e.in_field(PROTOCOL, "num_lsas"))?;

        // Capacity bounded by what the region can hold, not by the wire count
        let mut lsas = Vec::with_capacity(min_count(num_lsas, region.remaining()));
        for _ in 0..num_lsas {
            lsas.push(read_lsa(&mut region)?);
        }

        let mut builder = RecordBuilder::new();
        builder
            .push("num_lsas", FieldValue::UInt32(num_lsas))
            .push("lsas", FieldValue::List(lsas));
        if let Some(rest) = trailing(&region) {
            builder.push(TRAILING, rest);
        }
        Ok(Dissection::new(builder.finish(), length))
    }

    fn schema_fields(&self) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("num_lsas", DataKind::UInt32),
            FieldDescriptor::new("lsas", DataKind::List(Box::new(DataKind::Record))),
            trailing_descriptor(),
        ]
    }

    fn payload_mode(&self) -> PayloadMode {
        PayloadMode::None
    }
}

fn min_count(num_lsas: u32, remaining: usize) -> usize {
    (num_lsas as usize).min(remaining / LSA_HEADER_LEN)
}

/// Read one LSA: header fields followed by its raw `body`.
fn read_lsa<'a>(region: &mut ByteCursor<'a>) -> Result<FieldValue<'a>, ProtocolError> {
    let mut out = DecodedFields::new();
    read_fields(region, PROTOCOL, LSA_HEADER, &mut out)?;

    // `length` counts the header; a value below 20 leaves an empty body
    let lsa_len = out.raw("length").unwrap_or_default() as usize;
    let body = region
        .read(lsa_len.saturating_sub(LSA_HEADER_LEN))
        .map_err(|e| e.in_field(PROTOCOL, "body"))?;
    out.push("body", FieldValue::Bytes(body));

    Ok(FieldValue::record(out.finish()))
}
