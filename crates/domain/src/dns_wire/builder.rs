use super::HEADER_LEN;
use crate::RecordType;

/// Source of DNS transaction ids.
///
/// Production code uses [`RandomIdSource`]; tests pin the id with
/// [`FixedIdSource`] to assert on exact bytes.
pub trait TransactionIdSource: Send + Sync {
    fn next_id(&self) -> u16;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdSource;

impl TransactionIdSource for RandomIdSource {
    fn next_id(&self) -> u16 {
        fastrand::u16(..)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedIdSource(pub u16);

impl TransactionIdSource for FixedIdSource {
    fn next_id(&self) -> u16 {
        self.0
    }
}

const FLAGS_RECURSION_DESIRED: u16 = 0x0100;
const CLASS_IN: u16 = 1;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a standard recursive query with an id drawn from `ids`.
    pub fn build_query(
        domain: &str,
        record_type: RecordType,
        ids: &dyn TransactionIdSource,
    ) -> Vec<u8> {
        Self::build_query_with_id(domain, record_type, ids.next_id())
    }

    /// Build a standard recursive query:
    /// - opcode 0, RD set, QDCOUNT=1, every other count zero
    /// - the name split on `.` into length-prefixed labels, zero terminated
    /// - QTYPE from `record_type`, QCLASS=IN
    ///
    /// Label and name lengths are not validated. A label longer than 63
    /// octets is written with its length byte truncated to `u8`, exactly as
    /// given; callers that care must validate beforehand.
    pub fn build_query_with_id(domain: &str, record_type: RecordType, id: u16) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN + domain.len() + 6);

        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&FLAGS_RECURSION_DESIRED.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&[0; 6]);

        for label in domain.split('.') {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);

        buf.extend_from_slice(&record_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_exact_bytes() {
        let bytes = MessageBuilder::build_query_with_id("example.com", RecordType::A, 0xBEEF);
        let expected: Vec<u8> = [
            &[0xBE, 0xEF, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0][..],
            &[7],
            b"example",
            &[3],
            b"com",
            &[0, 0x00, 0x01, 0x00, 0x01],
        ]
        .concat();
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_build_query_uses_id_source() {
        let bytes = MessageBuilder::build_query("a.b", RecordType::AAAA, &FixedIdSource(7));
        assert_eq!(&bytes[0..2], &[0x00, 0x07]);
        let qtype = u16::from_be_bytes([bytes[bytes.len() - 4], bytes[bytes.len() - 3]]);
        assert_eq!(qtype, 28);
    }

    #[test]
    fn test_rd_flag_set() {
        let bytes = MessageBuilder::build_query_with_id("google.com", RecordType::MX, 1);
        assert_eq!(bytes[2] & 0x01, 0x01, "RD flag should be set");
        assert_eq!(bytes[2] & 0x78, 0, "opcode should be QUERY");
        assert_eq!(bytes[3], 0);
    }

    #[test]
    fn test_long_label_is_not_rejected() {
        let label = "x".repeat(70);
        let bytes = MessageBuilder::build_query_with_id(&label, RecordType::A, 1);
        assert_eq!(bytes[HEADER_LEN], 70);
        assert_eq!(bytes.len(), HEADER_LEN + 1 + 70 + 1 + 4);
    }
}
