//! LSA header layout shared by the DD, LS Update and LS Ack bodies.

use crate::protocol::{read_record, ByteCursor, CodeTable, FieldSpec, FieldValue, UnmappedPolicy};
use crate::error::ProtocolError;

/// Size of an LSA header in bytes.
pub const LSA_HEADER_LEN: usize = 20;

/// OSPF LSA types (RFC 2328).
pub mod lsa_type {
    /// Router-LSA: Describes router's links within an area.
    pub const ROUTER: u8 = 1;
    /// Network-LSA: Describes transit network.
    pub const NETWORK: u8 = 2;
    /// Summary-LSA (IP network): Describes route to network.
    pub const SUMMARY_NETWORK: u8 = 3;
    /// Summary-LSA (ASBR): Describes route to ASBR.
    pub const SUMMARY_ASBR: u8 = 4;
    /// AS-External-LSA: Describes route to external network.
    pub const AS_EXTERNAL: u8 = 5;
}

pub static LSA_TYPES: CodeTable = CodeTable::new(
    "ospf.ls_type",
    &[
        (lsa_type::ROUTER as u64, "Router-LSA"),
        (lsa_type::NETWORK as u64, "Network-LSA"),
        (lsa_type::SUMMARY_NETWORK as u64, "Summary-LSA-Network"),
        (lsa_type::SUMMARY_ASBR as u64, "Summary-LSA-ASBR"),
        (lsa_type::AS_EXTERNAL as u64, "AS-External-LSA"),
    ],
    UnmappedPolicy::PassThrough,
);

/// LSA header (RFC 2328 A.4.1).
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |            LS Age             |    Options    |    LS Type    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                        Link State ID                          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                     Advertising Router                        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                     LS Sequence Number                        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |         LS Checksum           |             Length            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
pub static LSA_HEADER: &[FieldSpec] = &[
    FieldSpec::uint("ls_age", 2),
    FieldSpec::uint("options", 1),
    FieldSpec::code("ls_type", 1, &LSA_TYPES),
    FieldSpec::dotted_quad("link_state_id"),
    FieldSpec::dotted_quad("advertising_router"),
    FieldSpec::uint("ls_seq", 4),
    FieldSpec::raw("ls_chksum", 2),
    FieldSpec::uint("length", 2),
];

/// Read one LSA header as a nested record.
pub(super) fn read_lsa_header<'a>(
    cursor: &mut ByteCursor<'a>,
    protocol: &'static str,
) -> Result<FieldValue<'a>, ProtocolError> {
    read_record(cursor, protocol, LSA_HEADER).map(FieldValue::record)
}
