//! OSPF (Open Shortest Path First) protocol dissector.
//!
//! OSPF is a link-state routing protocol for IP networks that uses
//! a shortest path first (SPF) algorithm for finding the best path.
//!
//! The common 24-byte header is decoded by [`OspfProtocol`]. Its child hints
//! select one of the OSPFv2 packet-body dissectors in the submodules.
//!
//! RFC 2328: OSPF Version 2

mod dbdesc;
mod hello;
mod lsa;
mod lsack;
mod lsreq;
mod lsupdate;

pub use dbdesc::OspfDbDescriptionProtocol;
pub use hello::OspfHelloProtocol;
pub use lsa::{lsa_type, LSA_HEADER, LSA_HEADER_LEN, LSA_TYPES};
pub use lsack::OspfLsAckProtocol;
pub use lsreq::OspfLsRequestProtocol;
pub use lsupdate::OspfLsUpdateProtocol;

use std::cmp::min;

use super::{
    ByteCursor, CodeTable, Dissection, FieldSpec, FieldValue, HeaderLayout, ParseContext,
    Protocol, Trailer, UnmappedPolicy,
};
use crate::error::ProtocolError;
use crate::schema::{DataKind, FieldDescriptor};

/// IP protocol number for OSPF.
pub const IP_PROTOCOL_OSPF: u8 = 89;

/// Bytes consumed by the common header in every variant.
pub const OSPF_HEADER_LEN: usize = 24;

/// OSPF packet types.
pub mod packet_type {
    pub const HELLO: u8 = 1;
    pub const DATABASE_DESCRIPTION: u8 = 2;
    pub const LINK_STATE_REQUEST: u8 = 3;
    pub const LINK_STATE_UPDATE: u8 = 4;
    pub const LINK_STATE_ACK: u8 = 5;
}

/// OSPF authentication types.
pub mod auth_type {
    pub const NULL: u16 = 0;
    pub const SIMPLE_PASSWORD: u16 = 1;
    pub const CRYPTOGRAPHIC: u16 = 2;
}

/// Child hint: OSPF version from the common header.
pub const HINT_VERSION: &str = "ospf_version";
/// Child hint: raw packet type code.
pub const HINT_TYPE: &str = "ospf_type";
/// Child hint: declared packet length minus the common header.
pub const HINT_BODY_LEN: &str = "ospf_body_len";

/// Body key for bytes inside the declared length that no entry covers.
pub const TRAILING: &str = "trailing";

/// Packet type names. Unlisted codes stay numeric.
pub static PACKET_TYPES: CodeTable = CodeTable::new(
    "ospf.type",
    &[
        (packet_type::HELLO as u64, "Hello"),
        (packet_type::DATABASE_DESCRIPTION as u64, "Database Description"),
        (packet_type::LINK_STATE_REQUEST as u64, "Link State Request"),
        (packet_type::LINK_STATE_UPDATE as u64, "Link State Update"),
        (packet_type::LINK_STATE_ACK as u64, "Link State Acknowledgment"),
    ],
    UnmappedPolicy::PassThrough,
);

/// Authentication type names. Unlisted codes report as "Reserved".
pub static AUTH_TYPES: CodeTable = CodeTable::new(
    "ospf.autype",
    &[
        (auth_type::NULL as u64, "Null Authentication"),
        (auth_type::SIMPLE_PASSWORD as u64, "Simple Password"),
        (auth_type::CRYPTOGRAPHIC as u64, "Cryptographic Authentication"),
    ],
    UnmappedPolicy::Fallback("Reserved"),
);

/// Cryptographic authentication sub-layout (RFC 2328 D.3).
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |              0                |    Key ID     | Auth Data Len |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                 Cryptographic sequence number                 |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
const CRYPTO_AUTH: &[FieldSpec] = &[
    FieldSpec::raw("resv", 2),
    FieldSpec::uint("key_id", 1),
    FieldSpec::uint("len", 1),
    FieldSpec::uint("seq", 4),
];

/// Common OSPF header (RFC 2328 A.3.1).
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Version #   |     Type      |         Packet length         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                          Router ID                            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                           Area ID                             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |           Checksum            |             AuType            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                       Authentication                          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                       Authentication                          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
pub static OSPF_HEADER: HeaderLayout = HeaderLayout {
    protocol: "ospf",
    fields: &[
        FieldSpec::uint("version", 1),
        FieldSpec::code("type", 1, &PACKET_TYPES),
        FieldSpec::uint("len", 2),
        FieldSpec::dotted_quad("router_id"),
        FieldSpec::dotted_quad("area_id"),
        FieldSpec::raw("chksum", 2),
        FieldSpec::code("autype", 2, &AUTH_TYPES),
    ],
    trailer: Some(Trailer {
        name: "auth",
        width: 8,
        discriminant: "autype",
        variants: &[(auth_type::CRYPTOGRAPHIC as u64, CRYPTO_AUTH)],
    }),
};

/// OSPF common header dissector.
#[derive(Debug, Clone, Copy)]
pub struct OspfProtocol;

impl Protocol for OspfProtocol {
    fn name(&self) -> &'static str {
        "ospf"
    }

    fn display_name(&self) -> &'static str {
        "OSPF"
    }

    fn can_parse(&self, context: &ParseContext) -> Option<u32> {
        // Match when IP protocol hint equals 89
        match context.hint("ip_protocol") {
            Some(proto) if proto == IP_PROTOCOL_OSPF as u64 => Some(100),
            _ => None,
        }
    }

    fn dissect<'a>(
        &self,
        cursor: &mut ByteCursor<'a>,
        _context: &ParseContext,
    ) -> Result<Dissection<'a>, ProtocolError> {
        let decoded = OSPF_HEADER.decode(cursor)?;

        // Hints use wire values, never names. OSPF_HEADER stages all three.
        let raw = |name: &str| {
            let value = decoded.raw(name);
            debug_assert!(value.is_some(), "{} has no raw value in OSPF_HEADER", name);
            value.unwrap_or_default()
        };
        let version = raw("version");
        let pkt_type = raw("type");
        let declared_len = raw("len");

        // `len` is reported as found; consumption is always the fixed header
        Ok(Dissection::new(decoded.finish(), OSPF_HEADER_LEN)
            .with_hint(HINT_VERSION, version)
            .with_hint(HINT_TYPE, pkt_type)
            .with_hint(HINT_BODY_LEN, declared_len.saturating_sub(OSPF_HEADER_LEN as u64)))
    }

    fn schema_fields(&self) -> Vec<FieldDescriptor> {
        OSPF_HEADER.schema_fields()
    }

    fn child_protocols(&self) -> &'static [&'static str] {
        &[
            "ospf_hello",
            "ospf_db_description",
            "ospf_ls_request",
            "ospf_ls_update",
            "ospf_ls_ack",
        ]
    }
}

/// Priority for an OSPFv2 body dissector of packet type `pkt_type`.
fn match_body(context: &ParseContext, pkt_type: u8) -> Option<u32> {
    match (context.hint(HINT_VERSION), context.hint(HINT_TYPE)) {
        (Some(2), Some(t)) if t == pkt_type as u64 => Some(100),
        _ => None,
    }
}

/// Carve the packet body out of the cursor.
///
/// The body spans the declared packet length, clipped to the bytes actually
/// present. Bytes past it (e.g. a cryptographic digest) stay in `cursor`.
fn body_region<'a>(cursor: &mut ByteCursor<'a>, context: &ParseContext) -> ByteCursor<'a> {
    let available = cursor.remaining();
    let len = context
        .hint(HINT_BODY_LEN)
        .map_or(available, |declared| min(declared, available as u64) as usize);

    // Cannot fail: `len` never exceeds what remains
    cursor
        .sub_cursor(len)
        .unwrap_or_else(|_| ByteCursor::new(&[]))
}

/// Read fixed-size entries until the region is exhausted.
///
/// A tail shorter than one entry stays in `region`; see [`trailing`].
fn read_entries<'a, F>(
    region: &mut ByteCursor<'a>,
    entry_len: usize,
    mut read_one: F,
) -> Result<Vec<FieldValue<'a>>, ProtocolError>
where
    F: FnMut(&mut ByteCursor<'a>) -> Result<FieldValue<'a>, ProtocolError>,
{
    let mut entries = Vec::with_capacity(region.remaining() / entry_len);
    while region.remaining() >= entry_len {
        entries.push(read_one(region)?);
    }
    Ok(entries)
}

/// Whatever the body region still holds once its entries are read.
fn trailing<'a>(region: &ByteCursor<'a>) -> Option<FieldValue<'a>> {
    (!region.is_empty()).then(|| FieldValue::Bytes(region.rest()))
}

fn trailing_descriptor() -> FieldDescriptor {
    FieldDescriptor::nullable(TRAILING, DataKind::Binary)
        .with_description("body bytes after the last whole entry")
}
