//! Test utilities for protocol dissection.
//!
//! Provides builders for constructing test packets and helper functions
//! for validating dissection results.

use super::ospf::{auth_type, lsa_type, packet_type, IP_PROTOCOL_OSPF, OSPF_HEADER_LEN};
use super::{FieldRecord, FieldValue, ParseContext};

/// Builder for constructing OSPF packets (common header plus raw body).
#[derive(Debug, Clone)]
pub struct OspfBuilder {
    version: u8,
    packet_type: u8,
    len: Option<u16>,
    router_id: [u8; 4],
    area_id: [u8; 4],
    checksum: u16,
    autype: u16,
    auth: [u8; 8],
    body: Vec<u8>,
}

impl Default for OspfBuilder {
    fn default() -> Self {
        Self {
            version: 2,
            packet_type: packet_type::HELLO,
            len: None, // Header plus body, computed on build
            router_id: [192, 0, 2, 1],
            area_id: [0, 0, 0, 0],
            checksum: 0,
            autype: auth_type::NULL,
            auth: [0; 8],
            body: Vec::new(),
        }
    }
}

impl OspfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn packet_type(mut self, packet_type: u8) -> Self {
        self.packet_type = packet_type;
        self
    }

    /// Override the declared packet length.
    pub fn len(mut self, len: u16) -> Self {
        self.len = Some(len);
        self
    }

    pub fn router_id(mut self, id: [u8; 4]) -> Self {
        self.router_id = id;
        self
    }

    pub fn area_id(mut self, id: [u8; 4]) -> Self {
        self.area_id = id;
        self
    }

    pub fn checksum(mut self, checksum: u16) -> Self {
        self.checksum = checksum;
        self
    }

    pub fn autype(mut self, autype: u16) -> Self {
        self.autype = autype;
        self
    }

    pub fn auth(mut self, auth: [u8; 8]) -> Self {
        self.auth = auth;
        self
    }

    /// Cryptographic authentication trailer.
    pub fn crypto_auth(mut self, key_id: u8, auth_len: u8, seq: u32) -> Self {
        self.autype = auth_type::CRYPTOGRAPHIC;
        self.auth[0..2].copy_from_slice(&[0, 0]);
        self.auth[2] = key_id;
        self.auth[3] = auth_len;
        self.auth[4..8].copy_from_slice(&seq.to_be_bytes());
        self
    }

    pub fn body(mut self, body: &[u8]) -> Self {
        self.body = body.to_vec();
        self
    }

    pub fn build(self) -> Vec<u8> {
        let len = self
            .len
            .unwrap_or((OSPF_HEADER_LEN + self.body.len()) as u16);

        let mut packet = Vec::with_capacity(OSPF_HEADER_LEN + self.body.len());
        packet.push(self.version);
        packet.push(self.packet_type);
        packet.extend_from_slice(&len.to_be_bytes());
        packet.extend_from_slice(&self.router_id);
        packet.extend_from_slice(&self.area_id);
        packet.extend_from_slice(&self.checksum.to_be_bytes());
        packet.extend_from_slice(&self.autype.to_be_bytes());
        packet.extend_from_slice(&self.auth);
        packet.extend_from_slice(&self.body);
        packet
    }
}

/// Builder for constructing OSPFv2 Hello bodies.
#[derive(Debug, Clone)]
pub struct HelloBuilder {
    network_mask: [u8; 4],
    hello_interval: u16,
    options: u8,
    rtr_pri: u8,
    router_dead_interval: u32,
    designated_router: [u8; 4],
    backup_designated_router: [u8; 4],
    neighbors: Vec<[u8; 4]>,
}

impl Default for HelloBuilder {
    fn default() -> Self {
        Self {
            network_mask: [255, 255, 255, 0],
            hello_interval: 10,
            options: 0x02, // E-bit
            rtr_pri: 1,
            router_dead_interval: 40,
            designated_router: [0; 4],
            backup_designated_router: [0; 4],
            neighbors: Vec::new(),
        }
    }
}

impl HelloBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn network_mask(mut self, mask: [u8; 4]) -> Self {
        self.network_mask = mask;
        self
    }

    pub fn hello_interval(mut self, interval: u16) -> Self {
        self.hello_interval = interval;
        self
    }

    pub fn rtr_pri(mut self, priority: u8) -> Self {
        self.rtr_pri = priority;
        self
    }

    pub fn router_dead_interval(mut self, interval: u32) -> Self {
        self.router_dead_interval = interval;
        self
    }

    pub fn designated_router(mut self, id: [u8; 4]) -> Self {
        self.designated_router = id;
        self
    }

    pub fn backup_designated_router(mut self, id: [u8; 4]) -> Self {
        self.backup_designated_router = id;
        self
    }

    pub fn neighbor(mut self, id: [u8; 4]) -> Self {
        self.neighbors.push(id);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut body = Vec::with_capacity(20 + 4 * self.neighbors.len());
        body.extend_from_slice(&self.network_mask);
        body.extend_from_slice(&self.hello_interval.to_be_bytes());
        body.push(self.options);
        body.push(self.rtr_pri);
        body.extend_from_slice(&self.router_dead_interval.to_be_bytes());
        body.extend_from_slice(&self.designated_router);
        body.extend_from_slice(&self.backup_designated_router);
        for neighbor in &self.neighbors {
            body.extend_from_slice(neighbor);
        }
        body
    }
}

/// Builder for constructing 20-byte LSA headers.
#[derive(Debug, Clone)]
pub struct LsaHeaderBuilder {
    ls_age: u16,
    options: u8,
    ls_type: u8,
    link_state_id: [u8; 4],
    advertising_router: [u8; 4],
    ls_seq: u32,
    ls_chksum: u16,
    length: u16,
}

impl Default for LsaHeaderBuilder {
    fn default() -> Self {
        Self {
            ls_age: 1,
            options: 0x02,
            ls_type: lsa_type::ROUTER,
            link_state_id: [192, 0, 2, 1],
            advertising_router: [192, 0, 2, 1],
            ls_seq: 0x8000_0001, // InitialSequenceNumber
            ls_chksum: 0,
            length: 20,
        }
    }
}

impl LsaHeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ls_age(mut self, age: u16) -> Self {
        self.ls_age = age;
        self
    }

    pub fn ls_type(mut self, ls_type: u8) -> Self {
        self.ls_type = ls_type;
        self
    }

    pub fn link_state_id(mut self, id: [u8; 4]) -> Self {
        self.link_state_id = id;
        self
    }

    pub fn advertising_router(mut self, id: [u8; 4]) -> Self {
        self.advertising_router = id;
        self
    }

    pub fn ls_seq(mut self, seq: u32) -> Self {
        self.ls_seq = seq;
        self
    }

    pub fn ls_chksum(mut self, checksum: u16) -> Self {
        self.ls_chksum = checksum;
        self
    }

    /// LSA length including the header.
    pub fn length(mut self, length: u16) -> Self {
        self.length = length;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut header = Vec::with_capacity(20);
        header.extend_from_slice(&self.ls_age.to_be_bytes());
        header.push(self.options);
        header.push(self.ls_type);
        header.extend_from_slice(&self.link_state_id);
        header.extend_from_slice(&self.advertising_router);
        header.extend_from_slice(&self.ls_seq.to_be_bytes());
        header.extend_from_slice(&self.ls_chksum.to_be_bytes());
        header.extend_from_slice(&self.length.to_be_bytes());
        header
    }
}

/// Helper to assert a field value.
pub fn assert_field_eq(record: &FieldRecord, field: &str, expected: &FieldValue) {
    let actual = record
        .get(field)
        .unwrap_or_else(|| panic!("Field '{}' not found in record", field));
    assert_eq!(
        actual, expected,
        "Field '{}' mismatch: expected {:?}, got {:?}",
        field, expected, actual
    );
}

/// Helper to assert a field is present.
pub fn assert_field_present(record: &FieldRecord, field: &str) {
    assert!(
        record.get(field).is_some(),
        "Field '{}' not found in record",
        field
    );
}

/// Create a chain entry context for an IP payload carrying OSPF.
pub fn ospf_context() -> ParseContext {
    ParseContext::new().with_hint("ip_protocol", IP_PROTOCOL_OSPF as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{LayerChain, default_registry};

    #[test]
    fn test_ospf_builder() {
        let packet = OspfBuilder::new()
            .packet_type(packet_type::LINK_STATE_ACK)
            .router_id([10, 0, 0, 1])
            .area_id([0, 0, 0, 5])
            .body(&[0u8; 20])
            .build();

        assert_eq!(packet.len(), 44);
        assert_eq!(packet[0], 2); // Version
        assert_eq!(packet[1], 5); // Type
        assert_eq!(&packet[2..4], &44u16.to_be_bytes()); // Length covers body
        assert_eq!(&packet[4..8], &[10, 0, 0, 1]);
        assert_eq!(&packet[8..12], &[0, 0, 0, 5]);
    }

    #[test]
    fn test_ospf_builder_crypto_auth() {
        let packet = OspfBuilder::new().crypto_auth(7, 16, 0x0102_0304).build();

        assert_eq!(&packet[14..16], &[0, 2]); // AuType
        assert_eq!(&packet[16..24], &[0, 0, 7, 16, 1, 2, 3, 4]);
    }

    #[test]
    fn test_hello_builder() {
        let body = HelloBuilder::new()
            .neighbor([10, 0, 0, 2])
            .neighbor([10, 0, 0, 3])
            .build();

        assert_eq!(body.len(), 28);
        assert_eq!(&body[0..4], &[255, 255, 255, 0]);
        assert_eq!(&body[20..24], &[10, 0, 0, 2]);
    }

    #[test]
    fn test_lsa_header_builder() {
        let header = LsaHeaderBuilder::new().ls_type(lsa_type::AS_EXTERNAL).build();

        assert_eq!(header.len(), 20);
        assert_eq!(header[3], 5);
        assert_eq!(&header[18..20], &20u16.to_be_bytes());
    }

    #[test]
    fn test_assert_helpers() {
        let packet = OspfBuilder::new().build();
        let registry = default_registry();
        let result = LayerChain::new(&registry)
            .dissect(&ospf_context(), &packet)
            .unwrap();

        assert_field_present(&result.record, "auth");
        assert_field_eq(&result.record, "type", &FieldValue::Symbol("Hello"));
    }
}
